/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::{ApiClient, ApiParams};
use crate::errors::HydrusError;
use crate::macros::{push_options, single_param};
use crate::selector::FileSelector;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Popup messages and background job statuses shown by the client
#[derive(Debug, Clone)]
pub struct PopupManager {
    api_client: Arc<ApiClient>,
}

impl PopupManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    pub async fn popups(&self, only_in_view: Option<bool>) -> Result<PopupsResponse, HydrusError> {
        let mut params = ApiParams::new();
        params.insert_opt("only_in_view", only_in_view)?;
        self.api_client
            .get::<PopupsResponse>("manage_popups/get_popups", Some(&params))
            .await
    }

    pub async fn add_popup(&self, options: &PopupOptions) -> Result<PopupResponse, HydrusError> {
        let mut params = ApiParams::new();
        push_options!(
            params,
            options,
            [is_cancellable, is_pausable, attached_files_mergable]
        );
        options.write_content(&mut params)?;
        self.api_client
            .post::<PopupResponse>("manage_popups/add_popup", &params)
            .await
    }

    /// Updates an existing popup. The flags that only apply on creation are ignored.
    pub async fn update_popup(
        &self,
        job_status_key: &str,
        options: &PopupOptions,
    ) -> Result<PopupResponse, HydrusError> {
        let mut params = single_param!("job_status_key", job_status_key);
        options.write_content(&mut params)?;
        self.api_client
            .post::<PopupResponse>("manage_popups/update_popup", &params)
            .await
    }

    /// Presses the button of a popup that has a user callable
    pub async fn call_user_callable(&self, job_status_key: &str) -> Result<(), HydrusError> {
        self.post_job_status_key("manage_popups/call_user_callable", job_status_key)
            .await
    }

    pub async fn cancel_popup(&self, job_status_key: &str) -> Result<(), HydrusError> {
        self.post_job_status_key("manage_popups/cancel_popup", job_status_key)
            .await
    }

    pub async fn dismiss_popup(&self, job_status_key: &str) -> Result<(), HydrusError> {
        self.post_job_status_key("manage_popups/dismiss_popup", job_status_key)
            .await
    }

    pub async fn finish_popup(&self, job_status_key: &str) -> Result<(), HydrusError> {
        self.post_job_status_key("manage_popups/finish_popup", job_status_key)
            .await
    }

    /// Marks the popup finished and dismisses it, optionally after `seconds`
    pub async fn finish_and_dismiss_popup(
        &self,
        job_status_key: &str,
        seconds: Option<u32>,
    ) -> Result<(), HydrusError> {
        let mut params = single_param!("job_status_key", job_status_key);
        params.insert_opt("seconds", seconds)?;
        self.api_client
            .post_empty("manage_popups/finish_and_dismiss_popup", &params)
            .await
    }

    async fn post_job_status_key(&self, path: &str, job_status_key: &str) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(path, &single_param!("job_status_key", job_status_key))
            .await
    }
}

/// Contents of a popup. Gauges are `(current, total)`.
#[derive(Debug, Default, Clone)]
pub struct PopupOptions {
    pub status_title: Option<String>,
    pub status_text_1: Option<String>,
    pub status_text_2: Option<String>,
    pub is_cancellable: Option<bool>,
    pub is_pausable: Option<bool>,
    pub attached_files_mergable: Option<bool>,
    pub popup_gauge_1: Option<(u64, u64)>,
    pub popup_gauge_2: Option<(u64, u64)>,
    pub api_data: Option<Value>,
    pub files_label: Option<String>,
    pub files: Option<FileSelector>,
}

impl PopupOptions {
    // Fields shared by add and update
    fn write_content(&self, params: &mut ApiParams) -> Result<(), HydrusError> {
        push_options!(
            params,
            self,
            [
                status_title,
                status_text_1,
                status_text_2,
                popup_gauge_1,
                popup_gauge_2,
                api_data,
                files_label,
            ]
        );
        if let Some(files) = &self.files {
            params.insert_files(files)?;
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PopupsResponse {
    #[serde(default)]
    pub job_statuses: Vec<JobStatus>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PopupResponse {
    pub job_status: JobStatus,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JobStatus {
    pub key: String,

    pub creation_time: f64,

    #[serde(default)]
    pub status_title: Option<String>,

    #[serde(default)]
    pub status_text_1: Option<String>,

    #[serde(default)]
    pub status_text_2: Option<String>,

    #[serde(default)]
    pub had_error: bool,

    #[serde(default)]
    pub traceback: Option<String>,

    #[serde(default)]
    pub is_cancellable: bool,

    #[serde(default)]
    pub is_cancelled: bool,

    #[serde(default)]
    pub is_deleted: bool,

    #[serde(default)]
    pub is_pausable: bool,

    #[serde(default)]
    pub is_paused: bool,

    #[serde(default)]
    pub is_working: bool,

    #[serde(default)]
    pub nice_string: Option<String>,

    #[serde(default)]
    pub attached_files_mergable: Option<bool>,

    /// `[current, total]`, either of which may be null
    #[serde(default)]
    pub popup_gauge_1: Option<Vec<Option<u64>>>,

    #[serde(default)]
    pub popup_gauge_2: Option<Vec<Option<u64>>>,

    #[serde(default)]
    pub api_data: Option<Value>,

    #[serde(default)]
    pub files: Option<JobStatusFiles>,

    #[serde(default)]
    pub user_callable_label: Option<String>,

    #[serde(default)]
    pub network_job: Option<NetworkJob>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JobStatusFiles {
    #[serde(default)]
    pub hashes: Vec<String>,

    #[serde(default)]
    pub label: Option<String>,
}

/// Progress of a download attached to a popup
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkJob {
    pub url: String,

    #[serde(default)]
    pub waiting_on_connection_error: bool,

    #[serde(default)]
    pub domain_ok: bool,

    #[serde(default)]
    pub waiting_on_serverside_bandwidth: bool,

    #[serde(default)]
    pub no_engine_yet: bool,

    #[serde(default)]
    pub has_error: bool,

    #[serde(default)]
    pub total_data_used: u64,

    #[serde(default)]
    pub is_done: bool,

    #[serde(default)]
    pub status_text: Option<String>,

    #[serde(default)]
    pub current_speed: u64,

    #[serde(default)]
    pub bytes_read: u64,

    #[serde(default)]
    pub bytes_to_read: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_omits_creation_flags() {
        let options = PopupOptions {
            status_title: Some("importing".to_string()),
            is_cancellable: Some(true),
            popup_gauge_1: Some((3, 10)),
            files: Some(FileSelector::from_hash("abcd")),
            ..Default::default()
        };
        let mut params = ApiParams::new();
        options.write_content(&mut params).unwrap();
        assert_eq!(
            Value::from(params),
            json!({"status_title": "importing", "popup_gauge_1": [3, 10], "hash": "abcd"})
        );
    }

    #[test]
    fn job_status_with_gauge_gaps() {
        let status: JobStatus = serde_json::from_value(json!({
            "key": "d2bd6cfd",
            "creation_time": 1_700_000_000.25,
            "status_title": "sync",
            "popup_gauge_1": [1, null]
        }))
        .unwrap();
        assert_eq!(status.popup_gauge_1, Some(vec![Some(1), None]));
        assert!(!status.is_working);
    }
}
