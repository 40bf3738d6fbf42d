//! Shared helpers for integration tests: a stub helpdesk API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;

/// What the stub answers on its next request.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with the given JSON body
    Tickets(Value),
    /// Bare status code with an empty body
    Status(u16),
    /// 200 with a raw, possibly invalid, body
    Raw(&'static str),
    /// 200 with the given JSON body after a delay
    Slow(Duration, Value),
}

#[derive(Clone)]
struct StubState {
    reply: Arc<Mutex<Reply>>,
    hits: Arc<AtomicUsize>,
    tokens: Arc<Mutex<Vec<String>>>,
}

/// Helpdesk API stand-in listening on an ephemeral local port.
pub struct StubUpstream {
    /// Full URL of the ticket listing endpoint
    pub url: String,
    state: StubState,
}

impl StubUpstream {
    pub async fn start(reply: Reply) -> Self {
        let state = StubState {
            reply: Arc::new(Mutex::new(reply)),
            hits: Arc::new(AtomicUsize::new(0)),
            tokens: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/public/v1/tickets", get(tickets))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/public/v1/tickets", addr),
            state,
        }
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.state.reply.lock().unwrap() = reply;
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.state.tokens.lock().unwrap().clone()
    }
}

async fn tickets(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(token) = params.get("token") {
        state.tokens.lock().unwrap().push(token.clone());
    }

    let reply = state.reply.lock().unwrap().clone();
    match reply {
        Reply::Tickets(body) => Json(body).into_response(),
        Reply::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        Reply::Raw(body) => (StatusCode::OK, Body::from(body)).into_response(),
        Reply::Slow(delay, body) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
    }
}

/// Upstream listing from the dashboard scenario.
pub fn scenario_listing() -> Value {
    serde_json::json!([{
        "id": 1,
        "subject": "A",
        "status": "Open",
        "createdDate": "2024-01-01",
        "urgencyName": "High",
        "slaAgreement": "OK"
    }])
}

/// `count` minimal upstream tickets with ids starting at `first_id`.
pub fn listing(first_id: i64, count: i64) -> Value {
    Value::Array(
        (first_id..first_id + count)
            .map(|id| serde_json::json!({ "id": id, "subject": format!("ticket {}", id) }))
            .collect(),
    )
}

/// Polls `condition` every 10ms until it holds or `within` elapses.
pub async fn eventually(within: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + within;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
