/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::ApiClient;
use crate::errors::HydrusError;
use crate::macros::push_options;
use crate::properties::NoteConflictResolution;
use crate::selector::FileSelector;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct NoteManager {
    api_client: Arc<ApiClient>,
}

impl NoteManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Adds or replaces notes on the selected files. `notes` maps note name to text.
    ///
    /// The response holds the notes as they were actually saved, which can differ
    /// from the request when the client merges or renames them.
    pub async fn set_notes(
        &self,
        files: &FileSelector,
        notes: &HashMap<String, String>,
        options: &SetNotesOptions,
    ) -> Result<NoteChanges, HydrusError> {
        let mut params = files.to_params()?;
        params.insert("notes", notes)?;
        push_options!(
            params,
            options,
            [
                merge_cleverly,
                extend_existing_note_if_possible,
                conflict_resolution,
            ]
        );
        self.api_client
            .post::<NoteChanges>("add_notes/set_notes", &params)
            .await
    }

    pub async fn delete_notes(
        &self,
        files: &FileSelector,
        note_names: &[&str],
    ) -> Result<(), HydrusError> {
        let mut params = files.to_params()?;
        params.insert("note_names", note_names)?;
        self.api_client
            .post_empty("add_notes/delete_notes", &params)
            .await
    }
}

#[derive(Debug, Default, Clone)]
pub struct SetNotesOptions {
    pub merge_cleverly: Option<bool>,
    pub extend_existing_note_if_possible: Option<bool>,
    pub conflict_resolution: Option<NoteConflictResolution>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NoteChanges {
    #[serde(default)]
    pub notes: HashMap<String, String>,
}
