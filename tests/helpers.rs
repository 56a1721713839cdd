/*
 * Copyright (c) 2025 Hydrus Client API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[allow(dead_code)]
pub(crate) const ACCESS_KEY: &str = "6a6e1f6b0ff1df4b7e9d3b9b21a3e6d4a2f1cd34b5e6f7a8b9c0d1e2f3a4b5c6";

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// Parses a query value that was sent as JSON text
    pub fn query_json(&self, key: &str) -> Option<Value> {
        self.query.get(key).map(|v| serde_json::from_str(v).unwrap())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the Client API.
///
/// Records every request and replays the canned response registered for its
/// path. Unregistered paths answer 200 with an empty body.
pub(crate) struct MockHydrus {
    pub url: String,
    state: MockState,
}

#[allow(dead_code)]
impl MockHydrus {
    pub async fn start() -> Self {
        init_logging();
        let state = MockState::default();
        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            url: format!("http://{addr}/"),
            state,
        }
    }

    /// Registers the response for `path`, given without a leading slash
    pub fn respond(&self, path: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
    }

    pub fn respond_json(&self, path: &str, body: Value) {
        self.respond(path, 200, &body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request was made")
    }

    pub fn client(&self) -> hydrus::Client {
        hydrus::Client::new(&self.url, ACCESS_KEY).unwrap()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/').to_string();
    let query = uri
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect::<HashMap<String, String>>()
        })
        .unwrap_or_default();

    let (status, resp_body) = state
        .responses
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or((StatusCode::OK, String::new()));

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path,
        query,
        headers,
        body,
    });

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        resp_body,
    )
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn live_client() -> anyhow::Result<hydrus::Client> {
    init_logging();
    let options = hydrus::HydrusOptions::from_env()?;
    Ok(hydrus::Client::from_options(&options)?)
}
