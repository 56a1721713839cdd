/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// These run against a real client configured through HYDRUS_API_URL and
// HYDRUS_ACCESS_KEY, so they are disabled for ci/cd builds
#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use hydrus::SearchFilesOptions;

    #[ignore]
    #[tokio::test]
    async fn api_version() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        let version = client.access().api_version().await.unwrap();
        println!("Version: {:?}", version);
        assert!(version.version > 0);
    }

    #[ignore]
    #[tokio::test]
    async fn verify_access_key() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        let info = client.access().verify_access_key().await.unwrap();
        println!("Access key: {}", info.human_description);
    }

    #[ignore]
    #[tokio::test]
    async fn services_and_pending_counts() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        let services = client.access().services().await.unwrap();
        assert!(!services.services.is_empty());
        let pending = client.services().pending_counts().await.unwrap();
        println!("Pending: {:?}", pending.pending_counts);
    }

    #[ignore]
    #[tokio::test]
    async fn clean_tag() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        let tag = client.tags().clean_tag(" Character:Samus Aran ").await.unwrap();
        assert_eq!(tag.as_deref(), Some("character:samus aran"));
    }

    #[ignore]
    #[tokio::test]
    async fn search_and_fetch_metadata() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        let options = SearchFilesOptions {
            return_hashes: Some(true),
            ..Default::default()
        };
        let found = client
            .files()
            .search_files(&["system:limit=5"], &options)
            .await
            .unwrap();
        let Some(hashes) = found.hashes.filter(|h| !h.is_empty()) else {
            return;
        };
        let files = hydrus::FileSelector::from_hashes(hashes).unwrap();
        let metadata = client
            .files()
            .file_metadata(&files, &Default::default())
            .await
            .unwrap();
        for file in metadata.metadata {
            println!("{} {:?} {:?}", file.hash, file.mime, file.size);
        }
    }
}
