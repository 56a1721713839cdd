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
use crate::properties::TagAction;
use crate::selector::FileSelector;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Tag editing, cleaning, searching and sibling/parent lookup
#[derive(Debug, Clone)]
pub struct TagManager {
    api_client: Arc<ApiClient>,
}

impl TagManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Applies a set of tag edits to the selected files
    pub async fn add_tags(&self, files: &FileSelector, edits: &TagEdits) -> Result<(), HydrusError> {
        if edits.is_empty() {
            return Err(HydrusError::InvalidArgument(
                "At least one tag mapping is required".to_string(),
            ));
        }

        let mut params = files.to_params()?;
        if !edits.service_keys_to_tags.is_empty() {
            params.insert("service_keys_to_tags", &edits.service_keys_to_tags)?;
        }
        if !edits.service_keys_to_actions_to_tags.is_empty() {
            params.insert(
                "service_keys_to_actions_to_tags",
                &edits.service_keys_to_actions_to_tags,
            )?;
        }
        params.insert_opt(
            "override_previously_deleted_mappings",
            edits.override_previously_deleted_mappings,
        )?;
        params.insert_opt(
            "create_new_deleted_mappings",
            edits.create_new_deleted_mappings,
        )?;
        self.api_client.post_empty("add_tags/add_tags", &params).await
    }

    /// Removes tags from the selected files on the given local tag service
    pub async fn delete_tags(
        &self,
        files: &FileSelector,
        service_key: &str,
        tags: &[&str],
    ) -> Result<(), HydrusError> {
        let mut edits = TagEdits::new();
        edits.action(service_key, TagAction::Delete, tags.iter().copied());
        self.add_tags(files, &edits).await
    }

    /// Asks the client how it would store the given tags
    pub async fn clean_tags(&self, tags: &[&str]) -> Result<CleanTagsResponse, HydrusError> {
        self.api_client
            .get::<CleanTagsResponse>("add_tags/clean_tags", Some(&single_param!("tags", tags)))
            .await
    }

    /// Cleans one tag. Returns `None` if the client discards it entirely.
    pub async fn clean_tag(&self, tag: &str) -> Result<Option<String>, HydrusError> {
        let resp = self.clean_tags(&[tag]).await?;
        Ok(resp.tags.into_iter().next())
    }

    /// Autocomplete style search for tags
    pub async fn search_tags(
        &self,
        search: &str,
        tag_service_key: Option<&str>,
        tag_display_type: Option<TagDisplayType>,
    ) -> Result<SearchTagsResponse, HydrusError> {
        let mut params = single_param!("search", search);
        params.insert_opt("tag_service_key", tag_service_key)?;
        params.insert_opt("tag_display_type", tag_display_type.map(TagDisplayType::as_str))?;
        self.api_client
            .get::<SearchTagsResponse>("add_tags/search_tags", Some(&params))
            .await
    }

    /// Gets sibling and parent relationships for the given tags on every tag service
    pub async fn siblings_and_parents(
        &self,
        tags: &[&str],
    ) -> Result<TagRelationshipsResponse, HydrusError> {
        self.api_client
            .get::<TagRelationshipsResponse>(
                "add_tags/get_siblings_and_parents",
                Some(&single_param!("tags", tags)),
            )
            .await
    }

    /// Relationships for a single tag, keyed by tag service key.
    ///
    /// The reply is keyed by the cleaned tag, so pass a tag that is already clean.
    pub async fn tag_siblings_and_parents(
        &self,
        tag: &str,
    ) -> Result<HashMap<String, TagDisplayInfo>, HydrusError> {
        let mut resp = self.siblings_and_parents(&[tag]).await?;
        resp.tags
            .remove(tag)
            .ok_or_else(|| HydrusError::deserialization::<TagRelationshipsResponse>(None))
    }
}

/// Tag changes for one [`TagManager::add_tags`] call.
///
/// ```rust
/// use hydrus::{TagAction, TagEdits};
///
/// let mut edits = TagEdits::new();
/// edits
///     .add("6c6f63616c2074616773", ["character:samus aran", "series:metroid"])
///     .action("6c6f63616c2074616773", TagAction::Delete, ["creator:unknown"]);
/// assert!(!edits.is_empty());
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TagEdits {
    service_keys_to_tags: BTreeMap<String, Vec<String>>,
    service_keys_to_actions_to_tags: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub override_previously_deleted_mappings: Option<bool>,
    pub create_new_deleted_mappings: Option<bool>,
}

impl TagEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds tags on a local tag service
    pub fn add<S: Into<String>>(
        &mut self,
        service_key: &str,
        tags: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.service_keys_to_tags
            .entry(service_key.to_string())
            .or_default()
            .extend(tags.into_iter().map(Into::into));
        self
    }

    /// Applies an explicit content action to tags on a service
    pub fn action<S: Into<String>>(
        &mut self,
        service_key: &str,
        action: TagAction,
        tags: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.service_keys_to_actions_to_tags
            .entry(service_key.to_string())
            .or_default()
            .entry(action.wire_key())
            .or_default()
            .extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.service_keys_to_tags.is_empty() && self.service_keys_to_actions_to_tags.is_empty()
    }
}

/// Whether tag searches see tags as stored or as displayed after siblings and parents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDisplayType {
    Storage,
    Display,
}

impl TagDisplayType {
    fn as_str(self) -> &'static str {
        match self {
            TagDisplayType::Storage => "storage",
            TagDisplayType::Display => "display",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CleanTagsResponse {
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub value: String,
    pub count: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchTagsResponse {
    pub tags: Vec<TagCount>,
}

/// How one tag is seen on one tag service
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagDisplayInfo {
    pub ideal_tag: String,

    #[serde(default)]
    pub siblings: Vec<String>,

    #[serde(default)]
    pub descendants: Vec<String>,

    #[serde(default)]
    pub ancestors: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TagRelationshipsResponse {
    #[serde(default)]
    pub services: HashMap<String, Service>,

    /// Tag to tag service key to relationship info
    pub tags: HashMap<String, HashMap<String, TagDisplayInfo>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edits_group_by_service_and_action() {
        let mut edits = TagEdits::new();
        edits
            .action("abc", TagAction::Pend, ["a"])
            .action("abc", TagAction::Pend, ["b"])
            .action("abc", TagAction::Petition, ["c"]);
        assert_eq!(
            serde_json::to_value(&edits.service_keys_to_actions_to_tags).unwrap(),
            json!({"abc": {"2": ["a", "b"], "4": ["c"]}})
        );
        assert!(edits.service_keys_to_tags.is_empty());
    }

    #[test]
    fn new_edits_are_empty() {
        assert!(TagEdits::new().is_empty());
    }
}
