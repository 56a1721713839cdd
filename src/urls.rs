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
use crate::parsers::from_empty_str_to_none;
use crate::properties::{FileImportStatus, UrlType};
use crate::selector::FileSelector;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// URL lookup, import and association
#[derive(Debug, Clone)]
pub struct UrlManager {
    api_client: Arc<ApiClient>,
}

impl UrlManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Asks which files the client already has for a URL
    pub async fn url_files(
        &self,
        url: &str,
        doublecheck_file_system: Option<bool>,
    ) -> Result<UrlFilesResponse, HydrusError> {
        let mut params = single_param!("url", url);
        params.insert_opt("doublecheck_file_system", doublecheck_file_system)?;
        self.api_client
            .get::<UrlFilesResponse>("add_urls/get_url_files", Some(&params))
            .await
    }

    /// Asks how the client's URL classes would parse a URL
    pub async fn url_info(&self, url: &str) -> Result<UrlInfo, HydrusError> {
        self.api_client
            .get::<UrlInfo>("add_urls/get_url_info", Some(&single_param!("url", url)))
            .await
    }

    /// Queues a URL for download
    pub async fn add_url(
        &self,
        url: &str,
        options: &AddUrlOptions,
    ) -> Result<AddUrlResponse, HydrusError> {
        if options.destination_page_key.is_some() && options.destination_page_name.is_some() {
            return Err(HydrusError::InvalidArgument(
                "Only one of destination_page_key and destination_page_name can be given"
                    .to_string(),
            ));
        }

        let mut params = single_param!("url", url);
        push_options!(
            params,
            options,
            [
                destination_page_key,
                destination_page_name,
                file_service_key,
                show_destination_page,
                service_keys_to_additional_tags,
                filterable_tags,
            ]
        );
        self.api_client
            .post::<AddUrlResponse>("add_urls/add_url", &params)
            .await
    }

    /// Adds and removes known URLs on the selected files
    pub async fn associate_urls(
        &self,
        files: &FileSelector,
        urls_to_add: &[&str],
        urls_to_delete: &[&str],
        normalise_urls: Option<bool>,
    ) -> Result<(), HydrusError> {
        if urls_to_add.is_empty() && urls_to_delete.is_empty() {
            return Err(HydrusError::InvalidArgument(
                "At least one url to add or delete is required".to_string(),
            ));
        }

        let mut params = files.to_params()?;
        insert_urls(&mut params, "url_to_add", "urls_to_add", urls_to_add)?;
        insert_urls(&mut params, "url_to_delete", "urls_to_delete", urls_to_delete)?;
        params.insert_opt("normalise_urls", normalise_urls)?;
        self.api_client
            .post_empty("add_urls/associate_url", &params)
            .await
    }
}

fn insert_urls(
    params: &mut ApiParams,
    single: &str,
    plural: &str,
    urls: &[&str],
) -> Result<(), HydrusError> {
    match urls {
        [] => (),
        [url] => {
            params.insert(single, url)?;
        }
        many => {
            params.insert(plural, many)?;
        }
    }
    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct AddUrlOptions {
    pub destination_page_key: Option<String>,
    pub destination_page_name: Option<String>,
    pub file_service_key: Option<String>,
    pub show_destination_page: Option<bool>,
    pub service_keys_to_additional_tags: Option<HashMap<String, Vec<String>>>,
    pub filterable_tags: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UrlFileStatus {
    pub status: FileImportStatus,

    pub hash: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub note: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UrlFilesResponse {
    pub normalised_url: String,

    #[serde(default)]
    pub url_file_statuses: Vec<UrlFileStatus>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UrlInfo {
    #[serde(default)]
    pub request_url: Option<String>,

    pub normalised_url: String,

    pub url_type: UrlType,

    pub url_type_string: String,

    pub match_name: String,

    pub can_parse: bool,

    #[serde(default)]
    pub cannot_parse_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AddUrlResponse {
    pub human_result_text: String,

    pub normalised_url: String,
}
