// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process mock of the MMA Universe backend.
//!
//! Every request is recorded; the reply is chosen by a closure supplied by
//! the test.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use mma_universe_client::api::{ApiClient, RetryPolicy};
use mma_universe_client::config::Config;
use mma_universe_client::store::{AuthStore, KeyValueStore, MemoryStore};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One request as seen by the mock backend. `path` excludes `/api/v1`.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

#[allow(dead_code)]
impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn ok(body: serde_json::Value) -> Self {
        Self::json(200, body)
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Responder = Box<dyn Fn(&Recorded) -> Reply + Send + Sync>;

struct MockState {
    responder: Responder,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    /// Base URL including `/api/v1`
    pub base_url: String,
    state: Arc<MockState>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("at least one request")
    }

    /// Config pointing at this backend.
    pub fn config(&self) -> Config {
        Config::test_default(&self.base_url)
    }

    /// Client with the default attempt counts and a short retry delay.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config())
            .unwrap()
            .with_retry_policy(RetryPolicy::default().with_delay(Duration::from_millis(10)))
    }

    /// Auth store backed by memory, sharing `api`'s token slot.
    pub fn auth_store(&self, api: &ApiClient) -> (AuthStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let store = AuthStore::rehydrate(api.clone(), storage.clone() as Arc<dyn KeyValueStore>);
        (store, storage)
    }
}

async fn handle(State(state): State<Arc<MockState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    let header_str = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    let path = parts.uri.path();
    let recorded = Recorded {
        method: parts.method.to_string(),
        path: path.strip_prefix("/api/v1").unwrap_or(path).to_string(),
        query: parts.uri.query().map(str::to_owned),
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
        body: body.to_vec(),
    };

    let reply = (state.responder)(&recorded);
    state.requests.lock().unwrap().push(recorded);

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

/// Start a mock backend on an ephemeral port.
pub async fn spawn<F>(responder: F) -> MockBackend
where
    F: Fn(&Recorded) -> Reply + Send + Sync + 'static,
{
    let state = Arc::new(MockState {
        responder: Box::new(responder),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new().fallback(handle).with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}/api/v1", addr),
        state,
    }
}

/// A user record as the backend serializes it.
#[allow(dead_code)]
pub fn user_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("{}@mma.io", id),
        "displayName": format!("User {}", id),
        "username": id,
        "bio": "Fight fan",
        "isVerified": false,
        "followersCount": 3,
        "followingCount": 5,
        "postsCount": 1,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-06-01T00:00:00Z"
    })
}

#[allow(dead_code)]
pub fn user(id: &str) -> mma_universe_client::models::User {
    serde_json::from_value(user_json(id)).unwrap()
}
