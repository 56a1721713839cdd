/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::{ApiClient, ApiParams};
use crate::errors::HydrusError;
use crate::parsers::from_null_to_default;
use crate::properties::Permission;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Version, permission and service queries
#[derive(Debug, Clone)]
pub struct AccessManager {
    api_client: Arc<ApiClient>,
}

impl AccessManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Gets the current API version and hydrus client version
    pub async fn api_version(&self) -> Result<ApiVersion, HydrusError> {
        self.api_client.get::<ApiVersion>("api_version", None).await
    }

    /// Requests a new access key. The client must have the "add from api request"
    /// dialog open for this to succeed.
    pub async fn request_new_permissions(
        &self,
        name: &str,
        permits_everything: Option<bool>,
        basic_permissions: Option<&[Permission]>,
    ) -> Result<AccessKey, HydrusError> {
        let mut params = ApiParams::new();
        params.insert("name", name)?;
        params.insert_opt("permits_everything", permits_everything)?;
        params.insert_opt("basic_permissions", basic_permissions)?;
        self.api_client
            .get::<AccessKey>("request_new_permissions", Some(&params))
            .await
    }

    /// Gets a session key that can be used in place of the access key
    pub async fn session_key(&self) -> Result<SessionKey, HydrusError> {
        self.api_client.get::<SessionKey>("session_key", None).await
    }

    /// Checks the configured access key and reports what it is allowed to do
    pub async fn verify_access_key(&self) -> Result<AccessKeyInfo, HydrusError> {
        self.api_client
            .get::<AccessKeyInfo>("verify_access_key", None)
            .await
    }

    /// Looks up a single service by either its name or its key
    pub async fn service(
        &self,
        service_name: Option<&str>,
        service_key: Option<&str>,
    ) -> Result<ServiceResponse, HydrusError> {
        let service_name = service_name.filter(|s| !s.is_empty());
        let service_key = service_key.filter(|s| !s.is_empty());
        let mut params = ApiParams::new();
        match (service_name, service_key) {
            (Some(name), None) => params.insert("service_name", name)?,
            (None, Some(key)) => params.insert("service_key", key)?,
            _ => {
                return Err(HydrusError::InvalidArgument(
                    "Provide either a service name or a service key, but not both".to_string(),
                ));
            }
        };
        self.api_client
            .get::<ServiceResponse>("get_service", Some(&params))
            .await
    }

    /// Gets every service the client knows about, keyed by service key
    pub async fn services(&self) -> Result<ServicesResponse, HydrusError> {
        self.api_client
            .get::<ServicesResponse>("get_services", None)
            .await
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion {
    /// Client API version
    pub version: u32,

    /// Version of the hydrus client itself
    #[serde(alias = "client_version")]
    pub hydrus_version: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessKey {
    pub access_key: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub session_key: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AccessKeyInfo {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub permits_everything: Option<bool>,

    #[serde(default, deserialize_with = "from_null_to_default")]
    pub basic_permissions: Vec<u8>,

    pub human_description: String,
}

impl AccessKeyInfo {
    /// The basic permissions this library has a name for
    pub fn permissions(&self) -> Vec<Permission> {
        self.basic_permissions
            .iter()
            .filter_map(|p| Permission::try_from(*p).ok())
            .collect()
    }
}

/// A service configured in the client
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,

    #[serde(default)]
    pub service_key: Option<String>,

    #[serde(rename = "type")]
    pub service_type: u32,

    pub type_pretty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_shape: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stars: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stars: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub service: Service,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServicesResponse {
    pub services: HashMap<String, Service>,
}
