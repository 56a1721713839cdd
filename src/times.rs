/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::{ApiClient, ApiParams};
use crate::errors::HydrusError;
use crate::properties::{CanvasType, TimestampType};
use crate::selector::FileSelector;
use std::sync::Arc;

/// File timestamps and viewing statistics
#[derive(Debug, Clone)]
pub struct TimeManager {
    api_client: Arc<ApiClient>,
}

impl TimeManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Adds to the view count and viewtime of the selected files on a canvas.
    /// `views` defaults to one on the client.
    pub async fn increment_file_viewtime(
        &self,
        files: &FileSelector,
        canvas_type: CanvasType,
        viewtime: f64,
        views: Option<u64>,
        when: &ViewTimestamp,
    ) -> Result<(), HydrusError> {
        let mut params = files.to_params()?;
        params.insert("canvas_type", canvas_type)?;
        params.insert("viewtime", viewtime)?;
        params.insert_opt("views", views)?;
        when.write_params(&mut params)?;
        self.api_client
            .post_empty("edit_times/increment_file_viewtime", &params)
            .await
    }

    /// Overwrites the view count and viewtime of the selected files on a canvas
    pub async fn set_file_viewtime(
        &self,
        files: &FileSelector,
        canvas_type: CanvasType,
        views: u64,
        viewtime: f64,
        when: &ViewTimestamp,
    ) -> Result<(), HydrusError> {
        let mut params = files.to_params()?;
        params.insert("canvas_type", canvas_type)?;
        params.insert("views", views)?;
        params.insert("viewtime", viewtime)?;
        when.write_params(&mut params)?;
        self.api_client
            .post_empty("edit_times/set_file_viewtime", &params)
            .await
    }

    /// Sets or clears one kind of timestamp on the selected files.
    ///
    /// Leaving both `timestamp` and `timestamp_ms` unset clears the time, where the
    /// client allows it.
    pub async fn set_time(
        &self,
        files: &FileSelector,
        timestamp_type: TimestampType,
        options: &SetTimeOptions,
    ) -> Result<(), HydrusError> {
        options.validate(timestamp_type)?;

        let mut params = files.to_params()?;
        params.insert("timestamp_type", timestamp_type)?;
        ViewTimestamp {
            timestamp: options.timestamp,
            timestamp_ms: options.timestamp_ms,
        }
        .write_params(&mut params)?;
        params.insert_opt("file_service_key", options.file_service_key.as_ref())?;
        params.insert_opt("canvas_type", options.canvas_type)?;
        params.insert_opt("domain", options.domain.as_ref())?;
        self.api_client
            .post_empty("edit_times/set_time", &params)
            .await
    }
}

/// When a view happened, in seconds or milliseconds. At most one may be set.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewTimestamp {
    pub timestamp: Option<f64>,
    pub timestamp_ms: Option<i64>,
}

impl ViewTimestamp {
    pub fn now() -> Self {
        Self::default()
    }

    pub fn seconds(timestamp: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            timestamp_ms: None,
        }
    }

    pub fn millis(timestamp_ms: i64) -> Self {
        Self {
            timestamp: None,
            timestamp_ms: Some(timestamp_ms),
        }
    }

    fn write_params(&self, params: &mut ApiParams) -> Result<(), HydrusError> {
        if self.timestamp.is_some() && self.timestamp_ms.is_some() {
            return Err(HydrusError::InvalidArgument(
                "Only one of timestamp and timestamp_ms can be given".to_string(),
            ));
        }
        params.insert_opt("timestamp", self.timestamp)?;
        params.insert_opt("timestamp_ms", self.timestamp_ms)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct SetTimeOptions {
    pub timestamp: Option<f64>,
    pub timestamp_ms: Option<i64>,
    /// Required for import and delete times
    pub file_service_key: Option<String>,
    /// Required for last viewed times
    pub canvas_type: Option<CanvasType>,
    /// Required for web domain modified times
    pub domain: Option<String>,
}

impl SetTimeOptions {
    fn validate(&self, timestamp_type: TimestampType) -> Result<(), HydrusError> {
        let missing = match timestamp_type {
            TimestampType::Imported | TimestampType::Deleted
                if self.file_service_key.is_none() =>
            {
                Some("file_service_key")
            }
            TimestampType::LastViewed if self.canvas_type.is_none() => Some("canvas_type"),
            TimestampType::WebDomainModified if self.domain.is_none() => Some("domain"),
            _ => None,
        };
        match missing {
            Some(field) => Err(HydrusError::InvalidArgument(format!(
                "{field} is required for {timestamp_type} timestamps"
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_timestamps_rejected() {
        let when = ViewTimestamp {
            timestamp: Some(1.0),
            timestamp_ms: Some(1000),
        };
        let mut params = ApiParams::new();
        assert!(matches!(
            when.write_params(&mut params),
            Err(HydrusError::InvalidArgument(_))
        ));
    }

    #[test]
    fn set_time_requirements() {
        let none = SetTimeOptions::default();
        assert!(none.validate(TimestampType::Imported).is_err());
        assert!(none.validate(TimestampType::Deleted).is_err());
        assert!(none.validate(TimestampType::LastViewed).is_err());
        assert!(none.validate(TimestampType::WebDomainModified).is_err());
        assert!(none.validate(TimestampType::Archived).is_ok());
        assert!(none.validate(TimestampType::FileModified).is_ok());

        let viewed = SetTimeOptions {
            canvas_type: Some(CanvasType::MediaViewer),
            ..Default::default()
        };
        assert!(viewed.validate(TimestampType::LastViewed).is_ok());
    }
}
