/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{ACCESS_KEY, MockHydrus};
    use axum::http::Method;
    use hydrus::{Client, FileSelector, HydrusError};
    use serde_json::json;

    #[tokio::test]
    async fn version_is_two_integers() {
        let mock = MockHydrus::start().await;
        mock.respond_json("api_version", json!({"version": 80, "hydrus_version": 612}));

        let version = mock.client().access().api_version().await.unwrap();
        assert_eq!(version.version, 80);
        assert_eq!(version.hydrus_version, 612);

        let req = mock.last_request();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "api_version");
        assert!(req.query.is_empty());
    }

    #[tokio::test]
    async fn access_key_sent_on_every_request() {
        let mock = MockHydrus::start().await;
        mock.respond_json("session_key", json!({"session_key": "f6e651e7467255ade6f7c66050f3d595ff06d6f3d3693a3a6fb1a9c2b278f800"}));
        let client = mock.client();

        client.access().session_key().await.unwrap();
        client.database().force_commit().await.unwrap();

        for req in mock.requests() {
            assert_eq!(req.header("hydrus-client-api-access-key"), Some(ACCESS_KEY));
        }
    }

    #[tokio::test]
    async fn base_url_without_trailing_slash() {
        let mock = MockHydrus::start().await;
        mock.respond_json("api_version", json!({"version": 80, "hydrus_version": 612}));

        let client = Client::new(mock.url.trim_end_matches('/'), ACCESS_KEY).unwrap();
        client.access().api_version().await.unwrap();
        assert_eq!(mock.last_request().path, "api_version");
    }

    #[tokio::test]
    async fn api_error_exposes_kind_and_message() {
        let mock = MockHydrus::start().await;
        mock.respond(
            "get_files/file_metadata",
            403,
            r#"{
                "error": "This access key does not have permission to search for files",
                "exception_type": "InsufficientCredentialsException",
                "status_code": 403,
                "version": 80,
                "hydrus_version": 612
            }"#,
        );

        let err = mock
            .client()
            .files()
            .file_metadata(&FileSelector::from_id(1), &Default::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), Some("InsufficientCredentialsException"));
        assert_eq!(
            err.message(),
            Some("This access key does not have permission to search for files")
        );
        match err {
            HydrusError::Api(body) => assert_eq!(body.status_code, Some(403)),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn side_effect_call_reports_api_error() {
        let mock = MockHydrus::start().await;
        mock.respond(
            "manage_pages/focus_page",
            404,
            r#"{"error": "Could not find that page!", "exception_type": "DataMissing", "status_code": 404}"#,
        );

        let err = mock.client().pages().focus_page("abc").await.unwrap_err();
        assert_eq!(err.kind(), Some("DataMissing"));
    }

    #[tokio::test]
    async fn unparsable_error_body() {
        let mock = MockHydrus::start().await;
        mock.respond("get_services", 500, "<html>Internal Server Error</html>");

        let err = mock.client().access().services().await.unwrap_err();
        match err {
            HydrusError::Deserialization { expected, source } => {
                assert!(expected.ends_with("ApiErrorBody"));
                assert!(source.is_some());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_success_body() {
        let mock = MockHydrus::start().await;
        mock.respond("get_services", 200, "");

        let err = mock.client().access().services().await.unwrap_err();
        match err {
            HydrusError::Deserialization { expected, source } => {
                assert!(expected.ends_with("ServicesResponse"));
                assert!(source.is_none());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn mismatched_success_body() {
        let mock = MockHydrus::start().await;
        mock.respond_json("api_version", json!({"unexpected": true}));

        let err = mock.client().access().api_version().await.unwrap_err();
        assert!(matches!(
            err,
            HydrusError::Deserialization { expected, .. } if expected.ends_with("ApiVersion")
        ));
        assert!(err.kind().is_none());
    }

    #[tokio::test]
    async fn binary_body_is_returned_untouched() {
        let mock = MockHydrus::start().await;
        mock.respond("get_files/file", 200, "\u{1}\u{2}raw");

        let data = mock
            .client()
            .files()
            .file(Some(12), None)
            .await
            .unwrap();
        assert_eq!(data.as_ref(), b"\x01\x02raw");
        assert_eq!(mock.last_request().query.get("file_id").map(String::as_str), Some("12"));
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_client() {
        let mock = MockHydrus::start().await;
        mock.respond_json("api_version", json!({"version": 80, "hydrus_version": 612}));
        mock.respond_json("session_key", json!({"session_key": "abc"}));
        mock.respond_json("get_services", json!({"services": {}}));
        let client = mock.client();
        let other = client.clone();

        let (version, session, services) = futures::join!(
            client.access().api_version(),
            other.access().session_key(),
            client.access().services(),
        );
        assert_eq!(version.unwrap().version, 80);
        assert_eq!(session.unwrap().session_key, "abc");
        assert!(services.unwrap().services.is_empty());
        assert_eq!(mock.requests().len(), 3);
    }

    #[tokio::test]
    async fn transport_error_is_propagated() {
        // Nothing listens on the discard port
        let client = Client::new("http://127.0.0.1:9/", ACCESS_KEY).unwrap();
        let err = client.access().api_version().await.unwrap_err();
        assert!(matches!(err, HydrusError::Request(_)));
    }

    #[test]
    fn invalid_base_url() {
        let err = Client::new("not a url", ACCESS_KEY).unwrap_err();
        assert!(matches!(err, HydrusError::UrlParsing(_)));
    }

    #[test]
    fn invalid_access_key() {
        let err = Client::new("http://127.0.0.1:45869/", "bad\nkey").unwrap_err();
        assert!(matches!(err, HydrusError::Configuration(_)));
    }
}
