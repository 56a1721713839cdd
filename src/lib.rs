/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Hydrus
//!
//! This library was created for working with the Client API of the
//! [hydrus network](https://hydrusnetwork.github.io/hydrus/) client.
//!
//! For further details on the Rest API refer to the [Client API Docs](https://hydrusnetwork.github.io/hydrus/developer_api.html)
//!
//! ## Features
//!
//! - Access keys, API version and service information
//! - Files
//!     - Import from a path or from bytes
//!     - Delete, undelete, archive and unarchive
//!     - Search, metadata, paths, downloads and rendering
//! - Tags, ratings and notes
//!     - Edit, clean, search and sibling/parent lookup for tags
//! - URLs, cookies and custom headers
//! - Pages and popups
//! - Duplicate file relationships
//! - Pending repository uploads, file times and database management
//! - Lower level interface for handling the raw communication
//!
//! *Every request carries the access key from the client's "review services"
//! dialog. Getting one, either by hand or through [`AccessManager::request_new_permissions`],
//! is left up to the consumer of this library*
//!
//! *If you want to use this library for more that is currently implemented, the
//! [`ApiClient`] is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! hydrus = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hydrus::{Client, FileMetadataOptions, FileSelector, HydrusOptions, SearchFilesOptions, TagEdits};
//!
//! async fn tag_inbox(new_tag: &str) -> anyhow::Result<()> {
//!     // Reads HYDRUS_API_URL and HYDRUS_ACCESS_KEY
//!     let client = Client::from_options(&HydrusOptions::from_env()?)?;
//!
//!     let found = client
//!         .files()
//!         .search_files(&["system:inbox"], &SearchFilesOptions::default())
//!         .await?;
//!     let Some(file_ids) = found.file_ids.filter(|ids| !ids.is_empty()) else {
//!         return Ok(());
//!     };
//!     let files = FileSelector::from_ids(file_ids)?;
//!
//!     let mut edits = TagEdits::new();
//!     edits.add("6c6f63616c2074616773", [new_tag]);
//!     client.tags().add_tags(&files, &edits).await?;
//!
//!     let metadata = client
//!         .files()
//!         .file_metadata(&files, &FileMetadataOptions::default())
//!         .await?;
//!     for file in metadata.metadata {
//!         println!("{} {:?}", file.hash, file.mime);
//!     }
//!     Ok(())
//! }
//! ```
//!
mod macros;
mod parsers;

pub mod access;
pub mod api;
pub mod client;
pub mod cookies;
pub mod database;
pub mod errors;
pub mod files;
pub mod headers;
pub mod notes;
pub mod options;
pub mod pages;
pub mod popups;
pub mod properties;
pub mod ratings;
pub mod relationships;
pub mod selector;
pub mod services;
pub mod tags;
pub mod times;
pub mod urls;

pub use access::*;
pub use api::*;
pub use client::*;
pub use cookies::*;
pub use database::*;
pub use errors::*;
pub use files::*;
pub use headers::*;
pub use notes::*;
pub use options::*;
pub use pages::*;
pub use popups::*;
pub use properties::*;
pub use ratings::*;
pub use relationships::*;
pub use selector::*;
pub use services::*;
pub use tags::*;
pub use times::*;
pub use urls::*;
