/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::{ApiClient, ApiParams};
use crate::errors::HydrusError;
use crate::macros::single_param;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Custom HTTP headers the client sends when downloading
#[derive(Debug, Clone)]
pub struct HeaderManager {
    api_client: Arc<ApiClient>,
}

impl HeaderManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Gets the headers for `domain`, or the global ones when no domain is given
    pub async fn headers(&self, domain: Option<&str>) -> Result<HeadersResponse, HydrusError> {
        let mut params = ApiParams::new();
        params.insert_opt("domain", domain.filter(|d| !d.is_empty()))?;
        self.api_client
            .get::<HeadersResponse>("manage_headers/get_headers", Some(&params))
            .await
    }

    /// Sets headers for `domain`, or globally. A header with an empty value is removed.
    pub async fn set_headers(
        &self,
        headers: &HashMap<String, HeaderValue>,
        domain: Option<&str>,
    ) -> Result<(), HydrusError> {
        let mut params = ApiParams::new();
        params.insert_opt("domain", domain.filter(|d| !d.is_empty()))?;
        params.insert("headers", headers)?;
        self.api_client
            .post_empty("manage_headers/set_headers", &params)
            .await
    }

    /// Sets the global User-Agent. An empty string resets it to the client default.
    #[deprecated(note = "use set_headers with a \"User-Agent\" header")]
    pub async fn set_user_agent(&self, user_agent: &str) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_headers/set_user_agent",
                &single_param!("user-agent", user_agent),
            )
            .await
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HeaderValue {
    pub value: String,

    /// One of "approved", "denied" or "pending"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl HeaderValue {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            approved: None,
            reason: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkContext {
    #[serde(rename = "type")]
    pub context_type: u32,

    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HeadersResponse {
    #[serde(default)]
    pub network_context: Option<NetworkContext>,

    #[serde(default)]
    pub headers: HashMap<String, HeaderValue>,
}
