/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum HydrusError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to deserialize response to type {expected}")]
    Deserialization {
        expected: &'static str,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Hydrus API error. {0}")]
    Api(ApiErrorBody),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Failed serializing to JSON: {0}")]
    JsonSerialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl HydrusError {
    /// The remote exception type when this is an [`HydrusError::Api`] error
    pub fn kind(&self) -> Option<&str> {
        match self {
            HydrusError::Api(body) => Some(body.exception_type.as_str()),
            _ => None,
        }
    }

    /// The remote error message when this is an [`HydrusError::Api`] error
    pub fn message(&self) -> Option<&str> {
        match self {
            HydrusError::Api(body) => Some(body.error.as_str()),
            _ => None,
        }
    }

    pub(crate) fn deserialization<T>(source: Option<serde_json::Error>) -> Self {
        HydrusError::Deserialization {
            expected: std::any::type_name::<T>(),
            source,
        }
    }
}

/// Body returned by the Client API alongside any non-2xx status.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: String,

    pub exception_type: String,

    #[serde(default)]
    pub status_code: Option<u16>,

    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default)]
    pub hydrus_version: Option<u32>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.exception_type, self.error)
    }
}
