/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::{ApiClient, ApiParams};
use crate::errors::HydrusError;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DatabaseManager {
    api_client: Arc<ApiClient>,
}

impl DatabaseManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Commits pending database work to disk now
    pub async fn force_commit(&self) -> Result<(), HydrusError> {
        self.api_client
            .post_empty("manage_database/force_commit", &ApiParams::new())
            .await
    }

    /// Pauses database access so the files can be backed up. Only `lock_off`
    /// and a few read only calls work until it is released.
    pub async fn lock_on(&self) -> Result<(), HydrusError> {
        self.api_client
            .post_empty("manage_database/lock_on", &ApiParams::new())
            .await
    }

    pub async fn lock_off(&self) -> Result<(), HydrusError> {
        self.api_client
            .post_empty("manage_database/lock_off", &ApiParams::new())
            .await
    }

    /// Gets the statistics behind the client's "mr bones" dialog
    pub async fn mr_bones(
        &self,
        tags: Option<&[&str]>,
        file_service_key: Option<&str>,
        tag_service_key: Option<&str>,
    ) -> Result<BonedStats, HydrusError> {
        let mut params = ApiParams::new();
        params.insert_opt("tags", tags)?;
        params.insert_opt("file_service_key", file_service_key)?;
        params.insert_opt("tag_service_key", tag_service_key)?;
        let resp = self
            .api_client
            .get::<MrBonesResponse>("manage_database/mr_bones", Some(&params))
            .await?;
        Ok(resp.boned_stats)
    }

    /// Gets the client's options as raw JSON. The layout follows the client's
    /// internal settings and changes between versions.
    pub async fn client_options(&self) -> Result<Value, HydrusError> {
        self.api_client
            .get::<Value>("manage_database/get_client_options", None)
            .await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
struct MrBonesResponse {
    boned_stats: BonedStats,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BonedStats {
    #[serde(default)]
    pub num_inbox: u64,

    #[serde(default)]
    pub num_archive: u64,

    #[serde(default)]
    pub num_deleted: u64,

    #[serde(default)]
    pub size_inbox: u64,

    #[serde(default)]
    pub size_archive: u64,

    #[serde(default)]
    pub size_deleted: u64,

    #[serde(default)]
    pub earliest_import_time: Option<f64>,

    /// `[media views, media viewtime, preview views, preview viewtime]`
    #[serde(default)]
    pub total_viewtime: Option<Vec<f64>>,

    #[serde(default)]
    pub total_alternate_files: u64,

    #[serde(default)]
    pub total_duplicate_files: u64,

    #[serde(default)]
    pub total_potential_pairs: Option<u64>,
}
