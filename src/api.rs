/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::{ApiErrorBody, HydrusError};
use crate::selector::FileSelector;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

/// Header carrying the access key on every request
pub const ACCESS_KEY_HEADER: &str = "Hydrus-Client-API-Access-Key";

/// Address the Client API listens on out of the box
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:45869/";

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client for the API served at `base_url`, authenticating with `access_key`
    pub fn new(base_url: &str, access_key: &str) -> Result<Self, HydrusError> {
        let mut key = HeaderValue::from_str(access_key).map_err(|_| {
            HydrusError::Configuration("Access key is not a valid header value".to_string())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let name = HeaderName::from_bytes(ACCESS_KEY_HEADER.as_bytes())
            .map_err(|e| HydrusError::Configuration(e.to_string()))?;
        headers.insert(name, key);

        let https_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Self::with_http_client(base_url, https_client)
    }

    /// Wraps a preconfigured [`reqwest::Client`]. The caller is responsible for
    /// the access key header.
    pub fn with_http_client(
        base_url: &str,
        https_client: reqwest::Client,
    ) -> Result<Self, HydrusError> {
        // Endpoint paths are relative so the base must end in a slash to be joined onto
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self {
            base_url,
            https_client,
        })
    }

    /// Base address requests are made against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the full url for the endpoint with the params encoded into the query string
    pub fn endpoint_url(&self, path: &str, params: Option<&ApiParams>) -> Result<Url, HydrusError> {
        let mut req_url = self.base_url.join(path)?;
        if let Some(params) = params.filter(|p| !p.is_empty()) {
            req_url.set_query(Some(&params.to_query()));
        }
        Ok(req_url)
    }

    /// Performs a get request and decodes the JSON response
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams>,
    ) -> Result<T, HydrusError> {
        let req_url = self.endpoint_url(path, params)?;
        let (status, body) = self.send(self.https_client.get(req_url), path).await?;
        decode_response(status, &body)
    }

    /// Performs a get request returning the raw response body
    pub async fn get_bytes(
        &self,
        path: &str,
        params: Option<&ApiParams>,
    ) -> Result<Bytes, HydrusError> {
        let req_url = self.endpoint_url(path, params)?;
        let (status, body) = self.send(self.https_client.get(req_url), path).await?;
        check_response(status, &body)?;
        Ok(body)
    }

    /// Performs a post request with the params as the JSON body and decodes the JSON response
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ApiParams,
    ) -> Result<T, HydrusError> {
        let req_url = self.endpoint_url(path, None)?;
        let req = self.https_client.post(req_url).json(params.as_map());
        let (status, body) = self.send(req, path).await?;
        decode_response(status, &body)
    }

    /// Performs a post request for endpoints that do not return a payload
    pub async fn post_empty(&self, path: &str, params: &ApiParams) -> Result<(), HydrusError> {
        let req_url = self.endpoint_url(path, None)?;
        let req = self.https_client.post(req_url).json(params.as_map());
        let (status, body) = self.send(req, path).await?;
        check_response(status, &body)
    }

    /// Posts raw bytes to the endpoint and decodes the JSON response
    pub async fn post_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        data: Bytes,
    ) -> Result<T, HydrusError> {
        let req_url = self.endpoint_url(path, None)?;
        let req = self
            .https_client
            .post(req_url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data);
        let (status, body) = self.send(req, path).await?;
        decode_response(status, &body)
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<(StatusCode, Bytes), HydrusError> {
        let req = req.build()?;
        let method = req.method().clone();
        log::debug!("{} {}", method, path);

        let resp = self.https_client.execute(req).await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        log::trace!("{} {} -> {} ({} bytes)", method, path, status, body.len());
        Ok((status, body))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("access_key", &"xxx")
            .finish()
    }
}

/// Translates a response into the expected payload type.
///
/// Non-2xx responses are decoded as [`ApiErrorBody`]. A 2xx response whose body
/// is empty or does not match `T` is a [`HydrusError::Deserialization`] naming `T`.
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, HydrusError> {
    check_response(status, body)?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(HydrusError::deserialization::<T>(None));
    }
    serde_json::from_slice::<T>(body).map_err(|e| HydrusError::deserialization::<T>(Some(e)))
}

/// Succeeds on 2xx, otherwise converts the error body into a [`HydrusError`]
pub fn check_response(status: StatusCode, body: &[u8]) -> Result<(), HydrusError> {
    if status.is_success() {
        return Ok(());
    }
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(error) => Err(HydrusError::Api(error)),
        Err(err) => Err(HydrusError::deserialization::<ApiErrorBody>(Some(err))),
    }
}

/// Named parameters sent with a request.
///
/// Only parameters that were explicitly supplied are inserted so anything left
/// out never reaches the wire. Keys keep their insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApiParams {
    fields: Map<String, Value>,
}

impl ApiParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the value under `key`, replacing any previous value. A value that
    /// serializes to `null` is rejected.
    pub fn insert<V: Serialize>(&mut self, key: &str, value: V) -> Result<&mut Self, HydrusError> {
        let value = serde_json::to_value(value)
            .map_err(|e| HydrusError::JsonSerialization(format!("{key}: {e}")))?;
        // Non-finite floats serialize to null
        if value.is_null() {
            return Err(HydrusError::InvalidArgument(format!(
                "{key} has no JSON representation"
            )));
        }
        self.fields.insert(key.to_string(), value);
        Ok(self)
    }

    /// Inserts the value only if one was supplied
    pub fn insert_opt<V: Serialize>(
        &mut self,
        key: &str,
        value: Option<V>,
    ) -> Result<&mut Self, HydrusError> {
        match value {
            Some(v) => self.insert(key, v),
            None => Ok(self),
        }
    }

    /// Adds the wire fields identifying the selected files
    pub fn insert_files(&mut self, files: &FileSelector) -> Result<&mut Self, HydrusError> {
        files.write_params(self)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Encodes the params as a query string.
    ///
    /// Lists and objects are sent as percent-escaped JSON text, which is how the
    /// Client API expects collections in a query.
    pub fn to_query(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl From<ApiParams> for Value {
    fn from(params: ApiParams) -> Self {
        Value::Object(params.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug)]
    struct Version {
        version: u32,
    }

    #[test]
    fn query_encodes_collections_as_json() {
        let mut params = ApiParams::new();
        params.insert("tags", vec!["character:samus aran", "blue eyes"]).unwrap();
        params.insert("file_id", 42).unwrap();
        params.insert("only_in_view", true).unwrap();
        assert_eq!(
            params.to_query(),
            "tags=%5B%22character%3Asamus%20aran%22%2C%22blue%20eyes%22%5D&file_id=42&only_in_view=true"
        );
    }

    #[test]
    fn query_sends_strings_verbatim() {
        let mut params = ApiParams::new();
        params.insert("url", "https://example.com/a b?c=d").unwrap();
        assert_eq!(params.to_query(), "url=https%3A%2F%2Fexample.com%2Fa%20b%3Fc%3Dd");
    }

    #[test]
    fn insert_opt_skips_missing_values() {
        let mut params = ApiParams::new();
        params.insert_opt::<bool>("permits_everything", None).unwrap();
        params.insert_opt("name", Some("tagger")).unwrap();
        assert!(!params.contains_key("permits_everything"));
        assert_eq!(Value::from(params), json!({"name": "tagger"}));
    }

    #[test]
    fn insert_rejects_values_without_json_form() {
        let mut params = ApiParams::new();
        for value in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                params.insert("viewtime", value),
                Err(HydrusError::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            params.insert_opt("timestamp", Some(f64::NEG_INFINITY)),
            Err(HydrusError::InvalidArgument(_))
        ));
        assert!(params.is_empty());
    }

    #[test]
    fn endpoint_url_joins_under_base_path() {
        let client = ApiClient::with_http_client("http://localhost:45869/hydrus", reqwest::Client::new())
            .unwrap();
        let mut params = ApiParams::new();
        params.insert("hash", "abc").unwrap();
        let url = client.endpoint_url("get_files/file_path", Some(&params)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:45869/hydrus/get_files/file_path?hash=abc");

        let url = client.endpoint_url("api_version", Some(&ApiParams::new())).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn decode_success_body() {
        let v: Version = decode_response(StatusCode::OK, br#"{"version": 80}"#).unwrap();
        assert_eq!(v.version, 80);
    }

    #[test]
    fn decode_empty_success_body_names_expected_type() {
        let err = decode_response::<Version>(StatusCode::OK, b"").unwrap_err();
        match err {
            HydrusError::Deserialization { expected, source } => {
                assert!(expected.ends_with("Version"));
                assert!(source.is_none());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn decode_mismatched_success_body() {
        let err = decode_response::<Version>(StatusCode::OK, br#"{"session_key": "x"}"#).unwrap_err();
        assert!(matches!(err, HydrusError::Deserialization { source: Some(_), .. }));
    }

    #[test]
    fn decode_error_body() {
        let body = br#"{"error": "X", "exception_type": "Y", "status_code": 403, "version": 80, "hydrus_version": 600}"#;
        let err = decode_response::<Version>(StatusCode::FORBIDDEN, body).unwrap_err();
        assert_eq!(err.kind(), Some("Y"));
        assert_eq!(err.message(), Some("X"));
        match err {
            HydrusError::Api(body) => {
                assert_eq!(body.status_code, Some(403));
                assert_eq!(body.hydrus_version, Some(600));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn decode_unparsable_error_body() {
        let err = check_response(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>").unwrap_err();
        match err {
            HydrusError::Deserialization { expected, .. } => {
                assert!(expected.ends_with("ApiErrorBody"))
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
