/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::access::Service;
use crate::api::ApiClient;
use crate::errors::HydrusError;
use crate::macros::single_param;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Pending uploads to repository services
#[derive(Debug, Clone)]
pub struct ServiceManager {
    api_client: Arc<ApiClient>,
}

impl ServiceManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    pub async fn pending_counts(&self) -> Result<PendingCountsResponse, HydrusError> {
        self.api_client
            .get::<PendingCountsResponse>("manage_services/get_pending_counts", None)
            .await
    }

    /// Uploads everything pending for the service
    pub async fn commit_pending(&self, service_key: &str) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_services/commit_pending",
                &single_param!("service_key", service_key),
            )
            .await
    }

    /// Discards everything pending for the service
    pub async fn forget_pending(&self, service_key: &str) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_services/forget_pending",
                &single_param!("service_key", service_key),
            )
            .await
    }
}

/// Counts of content waiting to be uploaded. Only the counts relevant to the
/// service type are present.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingCounts {
    #[serde(default)]
    pub pending_files: Option<u64>,

    #[serde(default)]
    pub petitioned_files: Option<u64>,

    #[serde(default)]
    pub pending_tag_mappings: Option<u64>,

    #[serde(default)]
    pub petitioned_tag_mappings: Option<u64>,

    #[serde(default)]
    pub pending_tag_siblings: Option<u64>,

    #[serde(default)]
    pub petitioned_tag_siblings: Option<u64>,

    #[serde(default)]
    pub pending_tag_parents: Option<u64>,

    #[serde(default)]
    pub petitioned_tag_parents: Option<u64>,
}

impl PendingCounts {
    pub fn is_empty(&self) -> bool {
        [
            self.pending_files,
            self.petitioned_files,
            self.pending_tag_mappings,
            self.petitioned_tag_mappings,
            self.pending_tag_siblings,
            self.petitioned_tag_siblings,
            self.pending_tag_parents,
            self.petitioned_tag_parents,
        ]
        .iter()
        .all(|c| c.unwrap_or(0) == 0)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PendingCountsResponse {
    #[serde(default)]
    pub services: HashMap<String, Service>,

    /// Keyed by service key
    pub pending_counts: HashMap<String, PendingCounts>,
}
