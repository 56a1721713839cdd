/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::ApiClient;
use crate::errors::HydrusError;
use crate::options::HydrusOptions;
use crate::{
    AccessManager, CookieManager, DatabaseManager, FileManager, HeaderManager, NoteManager,
    PageManager, PopupManager, RatingManager, RelationshipManager, ServiceManager, TagManager,
    TimeManager, UrlManager,
};
use std::sync::Arc;

/// Entry point to the Client API.
///
/// Holds one shared transport and hands out a sub-client per group of endpoints.
/// Cloning is cheap and every clone talks through the same connection pool.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), hydrus::HydrusError> {
/// use hydrus::Client;
///
/// let client = Client::new("http://127.0.0.1:45869", "0f7990f1516a53b2...")?;
/// let version = client.access().api_version().await?;
/// println!("api v{} on hydrus v{}", version.version, version.hydrus_version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
    access: AccessManager,
    files: FileManager,
    tags: TagManager,
    ratings: RatingManager,
    notes: NoteManager,
    cookies: CookieManager,
    headers: HeaderManager,
    pages: PageManager,
    popups: PopupManager,
    relationships: RelationshipManager,
    services: ServiceManager,
    times: TimeManager,
    urls: UrlManager,
    database: DatabaseManager,
}

impl Client {
    /// Creates a client for the API at `base_url` using the given access key
    pub fn new(base_url: &str, access_key: &str) -> Result<Self, HydrusError> {
        Ok(Self::from_api_client(ApiClient::new(base_url, access_key)?))
    }

    pub fn from_options(options: &HydrusOptions) -> Result<Self, HydrusError> {
        Self::new(&options.base_url, &options.access_key)
    }

    /// Creates a client around a preconfigured [`reqwest::Client`], which must already
    /// send the access key header
    pub fn with_http_client(
        base_url: &str,
        http_client: reqwest::Client,
    ) -> Result<Self, HydrusError> {
        Ok(Self::from_api_client(ApiClient::with_http_client(
            base_url,
            http_client,
        )?))
    }

    pub fn from_api_client(api_client: ApiClient) -> Self {
        let api_client = Arc::new(api_client);
        Self {
            access: AccessManager::new(api_client.clone()),
            files: FileManager::new(api_client.clone()),
            tags: TagManager::new(api_client.clone()),
            ratings: RatingManager::new(api_client.clone()),
            notes: NoteManager::new(api_client.clone()),
            cookies: CookieManager::new(api_client.clone()),
            headers: HeaderManager::new(api_client.clone()),
            pages: PageManager::new(api_client.clone()),
            popups: PopupManager::new(api_client.clone()),
            relationships: RelationshipManager::new(api_client.clone()),
            services: ServiceManager::new(api_client.clone()),
            times: TimeManager::new(api_client.clone()),
            urls: UrlManager::new(api_client.clone()),
            database: DatabaseManager::new(api_client.clone()),
            api_client,
        }
    }

    /// Lower level access for requests this library has no method for
    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// Version, access key and service information
    pub fn access(&self) -> &AccessManager {
        &self.access
    }

    pub fn files(&self) -> &FileManager {
        &self.files
    }

    /// Tag editing, cleaning, searching and sibling/parent lookup
    pub fn tags(&self) -> &TagManager {
        &self.tags
    }

    pub fn ratings(&self) -> &RatingManager {
        &self.ratings
    }

    pub fn notes(&self) -> &NoteManager {
        &self.notes
    }

    pub fn cookies(&self) -> &CookieManager {
        &self.cookies
    }

    pub fn headers(&self) -> &HeaderManager {
        &self.headers
    }

    pub fn pages(&self) -> &PageManager {
        &self.pages
    }

    pub fn popups(&self) -> &PopupManager {
        &self.popups
    }

    /// Duplicate and alternate file relationships
    pub fn relationships(&self) -> &RelationshipManager {
        &self.relationships
    }

    /// Pending upload management for repository services
    pub fn services(&self) -> &ServiceManager {
        &self.services
    }

    /// File timestamps and viewing statistics
    pub fn times(&self) -> &TimeManager {
        &self.times
    }

    pub fn urls(&self) -> &UrlManager {
        &self.urls
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.database
    }
}
