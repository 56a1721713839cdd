/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::ApiClient;
use crate::errors::HydrusError;
use crate::selector::FileSelector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RatingManager {
    api_client: Arc<ApiClient>,
}

impl RatingManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Sets ratings on the selected files, keyed by rating service key
    pub async fn set_ratings(
        &self,
        files: &FileSelector,
        ratings: &HashMap<String, Rating>,
        prevent_space_ratings: Option<bool>,
    ) -> Result<RatingChanges, HydrusError> {
        if let Some(key) = ratings.iter().find_map(|(k, r)| (!r.is_finite()).then_some(k)) {
            return Err(HydrusError::InvalidArgument(format!(
                "Rating for {key} is not a finite number"
            )));
        }
        let mut params = files.to_params()?;
        params.insert("ratings", ratings)?;
        params.insert_opt("prevent_space_ratings", prevent_space_ratings)?;
        self.api_client
            .post::<RatingChanges>("add_ratings/set_rating", &params)
            .await
    }

    /// Clears the ratings the given services hold for the selected files
    pub async fn delete_ratings(
        &self,
        files: &FileSelector,
        service_keys: &[&str],
    ) -> Result<(), HydrusError> {
        let mut params = files.to_params()?;
        params.insert("service_keys", service_keys)?;
        self.api_client
            .post_empty("add_ratings/delete_ratings", &params)
            .await
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub rating: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_cap: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count_cap: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<f32>,
}

impl Rating {
    pub fn new(rating: f32) -> Self {
        Self {
            rating,
            rating_cap: None,
            rating_count_cap: None,
            shape: None,
        }
    }

    fn is_finite(&self) -> bool {
        self.rating.is_finite()
            && self.rating_cap.is_none_or(f32::is_finite)
            && self.shape.is_none_or(f32::is_finite)
    }

    pub fn with_cap(rating: f32, rating_cap: f32) -> Self {
        Self {
            rating_cap: Some(rating_cap),
            ..Self::new(rating)
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RatingChanges {
    #[serde(default)]
    pub ratings_added: HashMap<String, Rating>,
}
