/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::ApiClient;
use crate::errors::HydrusError;
use crate::macros::single_param;
use crate::properties::PageType;
use crate::selector::FileSelector;
use serde::Deserialize;
use std::sync::Arc;

/// The client's tabs ("pages") and their contents
#[derive(Debug, Clone)]
pub struct PageManager {
    api_client: Arc<ApiClient>,
}

impl PageManager {
    pub(crate) fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// Gets the whole page tree, starting from the top level notebook
    pub async fn pages(&self) -> Result<PagesResponse, HydrusError> {
        self.api_client
            .get::<PagesResponse>("manage_pages/get_pages", None)
            .await
    }

    pub async fn page_name(&self, page_key: &str) -> Result<PageName, HydrusError> {
        self.api_client
            .get::<PageName>(
                "manage_pages/get_page_name",
                Some(&single_param!("page_key", page_key)),
            )
            .await
    }

    /// Opens a new page and returns its key
    pub async fn add_page(
        &self,
        page_type: PageType,
        name: Option<&str>,
        sync_to_new_files: Option<bool>,
    ) -> Result<PageKey, HydrusError> {
        let mut params = single_param!("page_type", page_type);
        params.insert_opt("name", name)?;
        params.insert_opt("sync_to_new_files", sync_to_new_files)?;
        self.api_client
            .post::<PageKey>("manage_pages/add_page", &params)
            .await
    }

    pub async fn rename_page(&self, page_key: &str, name: &str) -> Result<(), HydrusError> {
        let mut params = single_param!("page_key", page_key);
        params.insert("name", name)?;
        self.api_client
            .post_empty("manage_pages/modify_page_name", &params)
            .await
    }

    pub async fn focus_page(&self, page_key: &str) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_pages/focus_page",
                &single_param!("page_key", page_key),
            )
            .await
    }

    /// Reruns the search of a file search page
    pub async fn refresh_page(&self, page_key: &str) -> Result<(), HydrusError> {
        self.api_client
            .post_empty(
                "manage_pages/refresh_page",
                &single_param!("page_key", page_key),
            )
            .await
    }

    /// Adds files to an existing media page
    pub async fn add_files(&self, page_key: &str, files: &FileSelector) -> Result<(), HydrusError> {
        let mut params = single_param!("page_key", page_key);
        params.insert_files(files)?;
        self.api_client
            .post_empty("manage_pages/add_files", &params)
            .await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PagesResponse {
    pub pages: Page,
}

/// A page, which may itself be a notebook of further pages
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Page {
    pub name: String,

    pub page_key: String,

    pub page_type: u8,

    #[serde(default)]
    pub page_state: Option<u8>,

    #[serde(default)]
    pub is_media_page: Option<bool>,

    #[serde(default)]
    pub selected: bool,

    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Page {
    /// The page type, if it is one this library knows
    pub fn kind(&self) -> Option<PageType> {
        PageType::try_from(self.page_type).ok()
    }

    /// Walks this page and every page below it, depth first
    pub fn iter(&self) -> PageIter<'_> {
        PageIter { stack: vec![self] }
    }

    pub fn find(&self, page_key: &str) -> Option<&Page> {
        self.iter().find(|p| p.page_key == page_key)
    }
}

pub struct PageIter<'a> {
    stack: Vec<&'a Page>,
}

impl<'a> Iterator for PageIter<'a> {
    type Item = &'a Page;

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.stack.pop()?;
        self.stack.extend(page.pages.iter().rev());
        Some(page)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageName {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageKey {
    pub page_key: String,
}
