/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Fixed-value enumerations. The integer of each variant is what goes over the wire.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Viewer a file view is attributed to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum CanvasType {
    #[strum(to_string = "media viewer")]
    MediaViewer = 0,
    #[strum(to_string = "preview viewer")]
    PreviewViewer = 1,
    #[strum(to_string = "client api viewer")]
    ClientApiViewer = 4,
}

/// Kind of timestamp being edited
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum TimestampType {
    #[strum(to_string = "web domain modified time")]
    WebDomainModified = 0,
    #[strum(to_string = "file modified time")]
    FileModified = 1,
    #[strum(to_string = "import time")]
    Imported = 3,
    #[strum(to_string = "delete time")]
    Deleted = 4,
    #[strum(to_string = "archived time")]
    Archived = 5,
    #[strum(to_string = "last viewed")]
    LastViewed = 6,
    #[strum(to_string = "originally imported time")]
    OriginallyImported = 7,
}

/// Relationship to set between two files
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum RelationshipType {
    #[strum(to_string = "potential duplicates")]
    PotentialDuplicates = 0,
    #[strum(to_string = "false positives")]
    FalsePositives = 1,
    #[strum(to_string = "same quality")]
    SameQuality = 2,
    #[strum(to_string = "alternates")]
    Alternates = 3,
    #[strum(to_string = "A is better")]
    ABetter = 4,
    #[strum(to_string = "B is better")]
    BBetter = 7,
}

/// How the files of a potential pair have to match the two searches
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum PotentialsSearchType {
    #[strum(to_string = "one file matches search 1")]
    OneFileMatchesSearch1 = 0,
    #[strum(to_string = "both files match search 1")]
    BothFilesMatchSearch1 = 1,
    #[strum(to_string = "one file matches search 1, the other search 2")]
    OneMatchesSearch1OtherMatchesSearch2 = 2,
}

/// Whether a potential pair must, can or must not be pixel duplicates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum PixelDuplicates {
    #[strum(to_string = "must be pixel duplicates")]
    Required = 0,
    #[strum(to_string = "can be pixel duplicates")]
    Allowed = 1,
    #[strum(to_string = "must not be pixel duplicates")]
    Excluded = 2,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum PageType {
    #[strum(to_string = "gallery downloader")]
    GalleryDownloader = 1,
    #[strum(to_string = "simple downloader")]
    SimpleDownloader = 2,
    #[strum(to_string = "hard drive import")]
    HardDriveImport = 3,
    #[strum(to_string = "petitions")]
    Petitions = 5,
    #[strum(to_string = "file search")]
    FileSearch = 6,
    #[strum(to_string = "url downloader")]
    UrlDownloader = 7,
    #[strum(to_string = "duplicates")]
    Duplicates = 8,
    #[strum(to_string = "thread watcher")]
    ThreadWatcher = 9,
    #[strum(to_string = "page of pages")]
    PageOfPages = 10,
}

/// Classification the client gives a URL
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum UrlType {
    #[strum(to_string = "post url")]
    Post = 0,
    #[strum(to_string = "file url")]
    File = 2,
    #[strum(to_string = "gallery url")]
    Gallery = 3,
    #[strum(to_string = "watchable url")]
    Watchable = 4,
    #[strum(to_string = "unknown url")]
    Unknown = 5,
}

/// What to do when a new note has the same name as an existing one
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum NoteConflictResolution {
    Replace = 0,
    Ignore = 1,
    Append = 2,
    Rename = 3,
}

/// Content action applied to a tag mapping
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum TagAction {
    Add = 0,
    Delete = 1,
    Pend = 2,
    #[strum(to_string = "Rescind Pend")]
    RescindPend = 3,
    Petition = 4,
    #[strum(to_string = "Rescind Petition")]
    RescindPetition = 5,
}

impl TagAction {
    /// Key used for this action in `service_keys_to_actions_to_tags`
    pub fn wire_key(self) -> String {
        u8::from(self).to_string()
    }
}

/// Outcome of importing a file, or whether a URL's file is known
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum FileImportStatus {
    #[strum(to_string = "not in database")]
    NotInDatabase = 0,
    #[strum(to_string = "successfully imported")]
    Successful = 1,
    #[strum(to_string = "already in database")]
    AlreadyInDatabase = 2,
    #[strum(to_string = "previously deleted")]
    PreviouslyDeleted = 3,
    #[strum(to_string = "failed to import")]
    Failed = 4,
    #[strum(to_string = "vetoed")]
    Vetoed = 7,
}

/// Basic permissions an access key can be granted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum Permission {
    #[strum(to_string = "import and edit urls")]
    ImportAndEditUrls = 0,
    #[strum(to_string = "import and delete files")]
    ImportAndDeleteFiles = 1,
    #[strum(to_string = "edit file tags")]
    EditFileTags = 2,
    #[strum(to_string = "search for and fetch files")]
    SearchAndFetchFiles = 3,
    #[strum(to_string = "manage pages")]
    ManagePages = 4,
    #[strum(to_string = "manage cookies and headers")]
    ManageCookiesAndHeaders = 5,
    #[strum(to_string = "manage database")]
    ManageDatabase = 6,
    #[strum(to_string = "edit file notes")]
    EditFileNotes = 7,
    #[strum(to_string = "edit file relationships")]
    EditFileRelationships = 8,
    #[strum(to_string = "edit file ratings")]
    EditFileRatings = 9,
    #[strum(to_string = "manage popups")]
    ManagePopups = 10,
    #[strum(to_string = "edit file times")]
    EditFileTimes = 11,
    #[strum(to_string = "commit pending")]
    CommitPending = 12,
    #[strum(to_string = "see local paths")]
    SeeLocalPaths = 13,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enums_serialize_as_integers() {
        assert_eq!(serde_json::to_value(CanvasType::ClientApiViewer).unwrap(), json!(4));
        assert_eq!(serde_json::to_value(RelationshipType::BBetter).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(TimestampType::OriginallyImported).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(PageType::PageOfPages).unwrap(), json!(10));
    }

    #[test]
    fn enums_deserialize_from_integers() {
        let url_type: UrlType = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(url_type, UrlType::File);
        let status: FileImportStatus = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(status, FileImportStatus::PreviouslyDeleted);
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(serde_json::from_value::<UrlType>(json!(1)).is_err());
        assert!(serde_json::from_value::<CanvasType>(json!(2)).is_err());
        assert!(PixelDuplicates::try_from(3u8).is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(UrlType::Watchable.to_string(), "watchable url");
        let name: &'static str = CanvasType::MediaViewer.into();
        assert_eq!(name, "media viewer");
        assert_eq!(TagAction::RescindPend.wire_key(), "3");
    }
}
