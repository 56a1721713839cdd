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
use crate::properties::{PixelDuplicates, PotentialsSearchType, RelationshipType};
use crate::selector::FileSelector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Duplicate and alternate file relationships
#[derive(Debug, Clone)]
pub struct RelationshipManager {
    api_client: Arc<ApiClient>,
}

impl RelationshipManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Gets the duplicate group information of the selected files, keyed by hash
    pub async fn file_relationships(
        &self,
        files: &FileSelector,
        file_service_key: Option<&str>,
    ) -> Result<FileRelationshipsResponse, HydrusError> {
        let mut params = files.to_params()?;
        params.insert_opt("file_service_key", file_service_key)?;
        self.api_client
            .get::<FileRelationshipsResponse>(
                "manage_file_relationships/get_file_relationships",
                Some(&params),
            )
            .await
    }

    /// Counts the potential duplicate pairs a duplicates page with this search would show
    pub async fn potentials_count(
        &self,
        search: &PotentialsSearch,
    ) -> Result<PotentialsCount, HydrusError> {
        self.api_client
            .get::<PotentialsCount>(
                "manage_file_relationships/get_potentials_count",
                Some(&search.to_params()?),
            )
            .await
    }

    /// Gets a batch of potential duplicate pairs for filtering
    pub async fn potential_pairs(
        &self,
        search: &PotentialsSearch,
        max_num_pairs: Option<u32>,
    ) -> Result<PotentialPairs, HydrusError> {
        let mut params = search.to_params()?;
        params.insert_opt("max_num_pairs", max_num_pairs)?;
        self.api_client
            .get::<PotentialPairs>(
                "manage_file_relationships/get_potential_pairs",
                Some(&params),
            )
            .await
    }

    /// Gets a random group of files that are potential duplicates of each other
    pub async fn random_potentials(
        &self,
        search: &PotentialsSearch,
    ) -> Result<RandomPotentials, HydrusError> {
        self.api_client
            .get::<RandomPotentials>(
                "manage_file_relationships/get_random_potentials",
                Some(&search.to_params()?),
            )
            .await
    }

    /// Removes all potential pairs the selected files are part of
    pub async fn remove_potentials(&self, files: &FileSelector) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_file_relationships/remove_potentials",
                &files.to_params()?,
            )
            .await
    }

    pub async fn set_file_relationships(
        &self,
        relationships: &[FileRelationship],
    ) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_file_relationships/set_file_relationships",
                &single_param!("relationships", relationships),
            )
            .await
    }

    /// Makes each selected file the king of its duplicate group
    pub async fn set_kings(&self, files: &FileSelector) -> Result<(), HydrusError> {
        self.api_client
            .post_empty("manage_file_relationships/set_kings", &files.to_params()?)
            .await
    }
}

/// Search domain for potential duplicate queries. Unset fields use the client's defaults.
#[derive(Debug, Default, Clone)]
pub struct PotentialsSearch {
    pub file_service_key: Option<String>,
    pub tag_service_key_1: Option<String>,
    pub tags_1: Option<Vec<String>>,
    pub tag_service_key_2: Option<String>,
    pub tags_2: Option<Vec<String>>,
    pub potentials_search_type: Option<PotentialsSearchType>,
    pub pixel_duplicates: Option<PixelDuplicates>,
    pub max_hamming_distance: Option<u32>,
}

impl PotentialsSearch {
    fn to_params(&self) -> Result<ApiParams, HydrusError> {
        let mut params = ApiParams::new();
        push_options!(
            params,
            self,
            [
                file_service_key,
                tag_service_key_1,
                tags_1,
                tag_service_key_2,
                tags_2,
                potentials_search_type,
                pixel_duplicates,
                max_hamming_distance,
            ]
        );
        Ok(params)
    }
}

/// One relationship to set between two files
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FileRelationship {
    pub hash_a: String,

    pub hash_b: String,

    pub relationship: RelationshipType,

    pub do_default_content_merge: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_a: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_b: Option<bool>,
}

impl FileRelationship {
    pub fn new(hash_a: &str, hash_b: &str, relationship: RelationshipType) -> Self {
        Self {
            hash_a: hash_a.to_string(),
            hash_b: hash_b.to_string(),
            relationship,
            do_default_content_merge: true,
            delete_a: None,
            delete_b: None,
        }
    }
}

/// Where a file sits in its duplicate group.
///
/// The lists hold hashes of files in each relationship with this one.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RelationshipStatus {
    pub is_king: bool,

    #[serde(default)]
    pub king: Option<String>,

    #[serde(default)]
    pub king_is_on_file_domain: bool,

    #[serde(default)]
    pub king_is_local: bool,

    #[serde(rename = "0", default)]
    pub potential_duplicates: Vec<String>,

    #[serde(rename = "1", default)]
    pub false_positives: Vec<String>,

    #[serde(rename = "3", default)]
    pub alternates: Vec<String>,

    #[serde(rename = "8", default)]
    pub duplicates: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FileRelationshipsResponse {
    pub file_relationships: HashMap<String, RelationshipStatus>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotentialsCount {
    pub potential_duplicates_count: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PotentialPairs {
    pub potential_duplicate_pairs: Vec<(String, String)>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RandomPotentials {
    pub random_potential_duplicate_hashes: Vec<String>,
}
