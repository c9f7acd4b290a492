//! In-process stand-in for the quick-geocode API.
//!
//! Each test starts its own server on a random local port with a fixed table
//! of canned replies, then inspects the requests it recorded.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use quick_geocode::GeocodeClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

pub fn initialize_logger_once() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

#[allow(dead_code)]
impl Reply {
    pub fn json(body: Value) -> Self {
        Reply {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn status(status: StatusCode, body: Value) -> Self {
        Reply {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(body: &str) -> Self {
        Reply {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
    pub accept: Option<String>,
}

struct MockState {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockServer {
    pub url: String,
    state: Arc<MockState>,
}

#[allow(dead_code)]
impl MockServer {
    /// Starts a server answering `/health` as healthy plus the given routes.
    pub async fn start(routes: Vec<(&str, Reply)>) -> MockServer {
        let mut replies: HashMap<String, Reply> = HashMap::new();
        replies.insert("/health".to_string(), Reply::json(healthy_body()));
        for (path, reply) in routes {
            replies.insert(path.to_string(), reply);
        }
        Self::start_exact(replies).await
    }

    /// Starts a server that answers exactly the given routes and 404s the rest.
    pub async fn start_exact(replies: HashMap<String, Reply>) -> MockServer {
        initialize_logger_once();

        let state = Arc::new(MockState {
            replies,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer {
            url: format!("http://{}", addr),
            state,
        }
    }

    pub fn client(&self) -> GeocodeClient {
        GeocodeClient::new(&self.url).expect("mock server URL is valid")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The last recorded request for `path`.
    pub fn last_request(&self, path: &str) -> RecordedRequest {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.path == path)
            .unwrap_or_else(|| panic!("no request recorded for {}", path))
    }
}

async fn respond(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query,
        user_agent: header_value(header::USER_AGENT),
        accept: header_value(header::ACCEPT),
    });

    match state.replies.get(uri.path()) {
        Some(reply) => (
            reply.status,
            [(header::CONTENT_TYPE, "application/json")],
            reply.body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            json!({ "error": "Not found" }).to_string(),
        )
            .into_response(),
    }
}

pub fn healthy_body() -> Value {
    json!({ "success": true, "data": { "status": "ok", "service": "quick-geocode-api" } })
}

/// A URL on which nothing is listening.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn result_body(result: Value) -> Value {
    json!({ "success": true, "data": { "result": result } })
}
