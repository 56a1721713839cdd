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
use crate::parsers::{from_empty_str_to_none, from_null_to_default};
use crate::properties::{CanvasType, FileImportStatus};
use crate::selector::FileSelector;
use crate::access::Service;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Importing, deleting, searching and fetching files
#[derive(Debug, Clone)]
pub struct FileManager {
    api_client: Arc<ApiClient>,
}

impl FileManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Imports the file at `path`, which must be readable by the hydrus client
    pub async fn add_file(
        &self,
        path: &str,
        delete_after_successful_import: Option<bool>,
    ) -> Result<AddFileResponse, HydrusError> {
        let mut params = single_param!("path", path);
        params.insert_opt(
            "delete_after_successful_import",
            delete_after_successful_import,
        )?;
        self.api_client
            .post::<AddFileResponse>("add_files/add_file", &params)
            .await
    }

    /// Imports a file by uploading its contents
    pub async fn add_file_bytes(&self, data: Bytes) -> Result<AddFileResponse, HydrusError> {
        self.api_client
            .post_bytes::<AddFileResponse>("add_files/add_file", data)
            .await
    }

    /// Sends files to the trash, or deletes them from the given file service
    pub async fn delete_files(
        &self,
        files: &FileSelector,
        file_service_key: Option<&str>,
        reason: Option<&str>,
    ) -> Result<(), HydrusError> {
        let mut params = files.to_params()?;
        params.insert_opt("file_service_key", file_service_key)?;
        params.insert_opt("reason", reason)?;
        self.api_client
            .post_empty("add_files/delete_files", &params)
            .await
    }

    /// Restores files from the trash
    pub async fn undelete_files(
        &self,
        files: &FileSelector,
        file_service_key: Option<&str>,
    ) -> Result<(), HydrusError> {
        let mut params = files.to_params()?;
        params.insert_opt("file_service_key", file_service_key)?;
        self.api_client
            .post_empty("add_files/undelete_files", &params)
            .await
    }

    /// Moves files out of the inbox
    pub async fn archive_files(&self, files: &FileSelector) -> Result<(), HydrusError> {
        self.api_client
            .post_empty("add_files/archive_files", &files.to_params()?)
            .await
    }

    /// Puts files back into the inbox
    pub async fn unarchive_files(&self, files: &FileSelector) -> Result<(), HydrusError> {
        self.api_client
            .post_empty("add_files/unarchive_files", &files.to_params()?)
            .await
    }

    /// Asks the client to compute the hashes of the file at `path` without importing it
    pub async fn generate_hashes(&self, path: &str) -> Result<GeneratedHashes, HydrusError> {
        self.api_client
            .post::<GeneratedHashes>("add_files/generate_hashes", &single_param!("path", path))
            .await
    }

    /// Gets metadata for the selected files
    pub async fn file_metadata(
        &self,
        files: &FileSelector,
        options: &FileMetadataOptions,
    ) -> Result<FileMetadataResponse, HydrusError> {
        let mut params = files.to_params()?;
        push_options!(
            params,
            options,
            [
                create_new_file_ids,
                only_return_identifiers,
                only_return_basic_information,
                detailed_url_information,
                include_blurhash,
                include_milliseconds,
                include_notes,
                include_services_object,
            ]
        );
        self.api_client
            .get::<FileMetadataResponse>("get_files/file_metadata", Some(&params))
            .await
    }

    /// Searches for files matching all of the given tags
    pub async fn search_files(
        &self,
        tags: &[&str],
        options: &SearchFilesOptions,
    ) -> Result<SearchFilesResponse, HydrusError> {
        let mut params = single_param!("tags", tags);
        push_options!(
            params,
            options,
            [
                file_service_key,
                tag_service_key,
                include_current_tags,
                include_pending_tags,
                file_sort_type,
                file_sort_asc,
                return_file_ids,
                return_hashes,
            ]
        );
        self.api_client
            .get::<SearchFilesResponse>("get_files/search_files", Some(&params))
            .await
    }

    /// Gets the local path of a file, identified by either its id or its hash
    pub async fn file_path(
        &self,
        file_id: Option<u64>,
        hash: Option<&str>,
    ) -> Result<FilePath, HydrusError> {
        let params = single_file_params(file_id, hash)?;
        self.api_client
            .get::<FilePath>("get_files/file_path", Some(&params))
            .await
    }

    /// Downloads the file itself
    pub async fn file(&self, file_id: Option<u64>, hash: Option<&str>) -> Result<Bytes, HydrusError> {
        let params = single_file_params(file_id, hash)?;
        self.api_client
            .get_bytes("get_files/file", Some(&params))
            .await
    }

    /// Downloads the thumbnail of a file
    pub async fn thumbnail(
        &self,
        file_id: Option<u64>,
        hash: Option<&str>,
    ) -> Result<Bytes, HydrusError> {
        let params = single_file_params(file_id, hash)?;
        self.api_client
            .get_bytes("get_files/thumbnail", Some(&params))
            .await
    }

    /// Renders a file, e.g. a PSD or a single frame of an animation, into an image.
    ///
    /// `width` and `height` have to be given together.
    pub async fn render(
        &self,
        file_id: Option<u64>,
        hash: Option<&str>,
        options: &RenderOptions,
    ) -> Result<Bytes, HydrusError> {
        let mut params = single_file_params(file_id, hash)?;
        push_options!(params, options, [render_format, render_quality]);
        match (options.width, options.height) {
            (Some(width), Some(height)) => {
                params.insert("width", width)?;
                params.insert("height", height)?;
            }
            (None, None) => (),
            _ => {
                return Err(HydrusError::InvalidArgument(
                    "Width and height must be provided together".to_string(),
                ));
            }
        }
        self.api_client
            .get_bytes("get_files/render", Some(&params))
            .await
    }
}

// Endpoints addressing a single file take either `file_id` or `hash`, not both
fn single_file_params(file_id: Option<u64>, hash: Option<&str>) -> Result<ApiParams, HydrusError> {
    let mut params = ApiParams::new();
    match (file_id, hash) {
        (Some(file_id), None) => params.insert("file_id", file_id)?,
        (None, Some(hash)) => params.insert("hash", hash)?,
        _ => {
            return Err(HydrusError::InvalidArgument(
                "Provide either a file id or a hash, but not both".to_string(),
            ));
        }
    };
    Ok(params)
}

/// Optional flags for [`FileManager::file_metadata`]
#[derive(Debug, Default, Clone)]
pub struct FileMetadataOptions {
    pub create_new_file_ids: Option<bool>,
    pub only_return_identifiers: Option<bool>,
    pub only_return_basic_information: Option<bool>,
    pub detailed_url_information: Option<bool>,
    pub include_blurhash: Option<bool>,
    pub include_milliseconds: Option<bool>,
    pub include_notes: Option<bool>,
    pub include_services_object: Option<bool>,
}

/// Optional parameters for [`FileManager::search_files`]
#[derive(Debug, Default, Clone)]
pub struct SearchFilesOptions {
    pub file_service_key: Option<String>,
    pub tag_service_key: Option<String>,
    pub include_current_tags: Option<bool>,
    pub include_pending_tags: Option<bool>,
    pub file_sort_type: Option<u8>,
    pub file_sort_asc: Option<bool>,
    pub return_file_ids: Option<bool>,
    pub return_hashes: Option<bool>,
}

/// Optional parameters for [`FileManager::render`]
#[derive(Debug, Default, Clone)]
pub struct RenderOptions {
    /// Filetype id of the output, e.g. 2 for PNG
    pub render_format: Option<u32>,
    pub render_quality: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AddFileResponse {
    pub status: FileImportStatus,

    pub hash: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub note: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratedHashes {
    pub hash: String,

    #[serde(default)]
    pub perceptual_hashes: Option<Vec<String>>,

    #[serde(default)]
    pub pixel_hash: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FilePath {
    pub path: String,

    #[serde(default)]
    pub filetype: Option<String>,

    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchFilesResponse {
    #[serde(default)]
    pub file_ids: Option<Vec<u64>>,

    #[serde(default)]
    pub hashes: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FileMetadataResponse {
    #[serde(default)]
    pub services: Option<HashMap<String, Service>>,

    pub metadata: Vec<FileMetadata>,
}

/// Holds information returned for a single file by the file metadata call.
///
/// Only `file_id` and `hash` are always present. Everything else depends on the
/// options the request was made with.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub file_id: u64,

    pub hash: String,

    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub mime: Option<String>,

    #[serde(default)]
    pub filetype_forced: Option<bool>,

    #[serde(default)]
    pub filetype_human: Option<String>,

    #[serde(default)]
    pub ext: Option<String>,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub thumbnail_width: Option<u32>,

    #[serde(default)]
    pub thumbnail_height: Option<u32>,

    /// Milliseconds
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub time_modified: Option<f64>,

    #[serde(default)]
    pub file_services: Option<FileServices>,

    #[serde(default, deserialize_with = "from_null_to_default")]
    pub ipfs_multihashes: HashMap<String, String>,

    #[serde(default)]
    pub has_audio: Option<bool>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub blurhash: Option<String>,

    #[serde(default)]
    pub pixel_hash: Option<String>,

    #[serde(default)]
    pub num_frames: Option<u64>,

    #[serde(default)]
    pub num_words: Option<u64>,

    #[serde(default)]
    pub is_inbox: Option<bool>,

    #[serde(default)]
    pub is_local: Option<bool>,

    #[serde(default)]
    pub is_trashed: Option<bool>,

    #[serde(default)]
    pub is_deleted: Option<bool>,

    #[serde(default)]
    pub has_exif: Option<bool>,

    #[serde(default)]
    pub has_human_readable_embedded_metadata: Option<bool>,

    #[serde(default)]
    pub has_icc_profile: Option<bool>,

    #[serde(default)]
    pub has_transparency: Option<bool>,

    #[serde(default, deserialize_with = "from_null_to_default")]
    pub known_urls: Vec<String>,

    /// Rating service key to rating; `null` for unset, a bool for like/dislike or a number of stars
    #[serde(default, deserialize_with = "from_null_to_default")]
    pub ratings: HashMap<String, Value>,

    #[serde(default, deserialize_with = "from_null_to_default")]
    pub tags: HashMap<String, TagInfo>,

    #[serde(default, deserialize_with = "from_null_to_default")]
    pub notes: HashMap<String, String>,

    #[serde(default, deserialize_with = "from_null_to_default")]
    pub file_viewing_statistics: Vec<FileViewingStatistics>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FileServices {
    #[serde(default)]
    pub current: HashMap<String, ServiceFileInfo>,

    #[serde(default)]
    pub deleted: HashMap<String, ServiceFileInfo>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceFileInfo {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub type_pretty: Option<String>,

    #[serde(default)]
    pub time_imported: Option<f64>,

    #[serde(default)]
    pub time_deleted: Option<f64>,
}

/// Tags of a file on one tag service, keyed by tag status ("0" current, "1" pending, ...)
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct TagInfo {
    #[serde(default)]
    pub storage_tags: HashMap<String, Vec<String>>,

    #[serde(default)]
    pub display_tags: HashMap<String, Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FileViewingStatistics {
    pub canvas_type: CanvasType,

    pub canvas_type_pretty: String,

    pub views: u64,

    /// Seconds
    pub viewtime: f64,

    #[serde(default)]
    pub last_viewed_timestamp: Option<f64>,
}

impl FileViewingStatistics {
    /// When the file was last viewed on this canvas
    pub fn last_viewed(&self) -> Option<DateTime<Utc>> {
        self.last_viewed_timestamp.and_then(timestamp_to_datetime)
    }
}

pub(crate) fn timestamp_to_datetime(ts: f64) -> Option<DateTime<Utc>> {
    let secs = ts.floor();
    let nanos = ((ts - secs) * 1_000_000_000.0) as u32;
    let secs = secs as i64;
    DateTime::from_timestamp(secs, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_file_requires_exactly_one_identifier() {
        assert!(matches!(
            single_file_params(None, None),
            Err(HydrusError::InvalidArgument(_))
        ));
        assert!(matches!(
            single_file_params(Some(1), Some("ab")),
            Err(HydrusError::InvalidArgument(_))
        ));
        let params = single_file_params(None, Some("ab")).unwrap();
        assert_eq!(Value::from(params), json!({"hash": "ab"}));
    }

    #[test]
    fn identifiers_only_metadata() {
        let resp: FileMetadataResponse = serde_json::from_value(json!({
            "metadata": [{"file_id": 123, "hash": "4c77267f93415de0bc33b7725b8c331a809a924084bee03ab2f5fae1c6019eb2"}]
        }))
        .unwrap();
        let file = &resp.metadata[0];
        assert_eq!(file.file_id, 123);
        assert!(file.tags.is_empty());
        assert!(file.width.is_none());
    }

    #[test]
    fn viewing_statistics_timestamp() {
        let stats: FileViewingStatistics = serde_json::from_value(json!({
            "canvas_type": 0,
            "canvas_type_pretty": "media viewer",
            "views": 3,
            "viewtime": 12.5,
            "last_viewed_timestamp": 1_700_000_000.5
        }))
        .unwrap();
        assert_eq!(stats.canvas_type, CanvasType::MediaViewer);
        let viewed = stats.last_viewed().unwrap();
        assert_eq!(viewed.timestamp(), 1_700_000_000);
        assert_eq!(viewed.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn negative_fractional_timestamp() {
        let dt = timestamp_to_datetime(-1.5).unwrap();
        assert_eq!(dt.timestamp(), -2);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }
}
