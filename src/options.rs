/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::DEFAULT_API_URL;
use crate::errors::HydrusError;
use serde::Deserialize;

/// Environment variable holding the Client API address
pub const API_URL_ENV: &str = "HYDRUS_API_URL";

/// Environment variable holding the access key
pub const ACCESS_KEY_ENV: &str = "HYDRUS_ACCESS_KEY";

/// Settings needed to reach a Client API instance
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct HydrusOptions {
    /// The base URL the API is served from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// The access key used to authenticate with the client
    pub access_key: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl HydrusOptions {
    pub fn new(base_url: &str, access_key: &str) -> Self {
        Self {
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }

    /// Reads the options from `HYDRUS_API_URL` and `HYDRUS_ACCESS_KEY`.
    /// The url falls back to the client's default port on localhost.
    pub fn from_env() -> Result<Self, HydrusError> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| default_base_url());
        let access_key = std::env::var(ACCESS_KEY_ENV)
            .map_err(|_| HydrusError::Configuration(format!("{ACCESS_KEY_ENV} is not set")))?;
        if access_key.trim().is_empty() {
            return Err(HydrusError::Configuration(format!("{ACCESS_KEY_ENV} is empty")));
        }
        Ok(Self {
            base_url,
            access_key,
        })
    }
}

impl std::fmt::Debug for HydrusOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HydrusOptions")
            .field("base_url", &self.base_url)
            .field("access_key", &"xxx")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_default_url() {
        let opts: HydrusOptions = serde_json::from_str(r#"{"access_key": "abc"}"#).unwrap();
        assert_eq!(opts.base_url, DEFAULT_API_URL);
        assert_eq!(opts.access_key, "abc");
    }

    #[test]
    fn debug_hides_access_key() {
        let opts = HydrusOptions::new("http://localhost:45869", "secret");
        assert!(!format!("{opts:?}").contains("secret"));
    }
}
