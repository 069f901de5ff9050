use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use client::ApiClient;
use serde_json::{json, Value};

/// One request as the mock backend received it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    /// Decoded query-string pairs, in order.
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub body: Value,
}

impl Recorded {
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    content_type: String,
    body: String,
}

#[derive(Clone, Default)]
struct Shared {
    routes: Arc<Mutex<HashMap<(String, String), Canned>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// A hospital backend stand-in listening on an ephemeral local port.
pub struct MockBackend {
    base_url: String,
    shared: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock backend stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            shared,
        }
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, "application/json", &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, content_type: &str, body: &str) {
        let canned = Canned {
            status: StatusCode::from_u16(status).expect("Invalid status code"),
            content_type: content_type.to_string(),
            body: body.to_string(),
        };
        self.shared
            .routes
            .lock()
            .expect("Route table poisoned")
            .insert((method.to_string(), path.to_string()), canned);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared
            .requests
            .lock()
            .expect("Request log poisoned")
            .clone()
    }

    /// The single request made to `path`. Panics when there were none or several.
    pub fn only_request(&self, path: &str) -> Recorded {
        let matching: Vec<Recorded> = self
            .requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect();
        assert_eq!(matching.len(), 1, "expected one request to {path}, got {matching:?}");
        matching.into_iter().next().expect("checked above")
    }
}

async fn handle(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    shared
        .requests
        .lock()
        .expect("Request log poisoned")
        .push(recorded);

    let canned = shared
        .routes
        .lock()
        .expect("Route table poisoned")
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    match canned {
        Some(c) => (c.status, [(header::CONTENT_TYPE, c.content_type)], c.body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json".to_string())],
            json!({"success": false, "message": "Not found"}).to_string(),
        )
            .into_response(),
    }
}
