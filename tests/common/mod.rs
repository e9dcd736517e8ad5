#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: String,
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Duration,
}

#[derive(Clone, Default)]
struct MockState {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process stand-in for the water server. Every request is recorded and
/// answered with the reply registered for its path (404 otherwise).
pub struct MockServer {
    pub base_url: String,
    state: MockState,
    task: tokio::task::JoinHandle<()>,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            task,
        }
    }

    pub fn reply(&self, path: &str, status: u16, body: &str) {
        self.reply_after(path, status, body, Duration::ZERO);
    }

    pub fn reply_after(&self, path: &str, status: u16, body: &str, delay: Duration) {
        self.state.replies.lock().unwrap().insert(
            path.to_string(),
            Reply {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.to_string(),
                delay,
            },
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn json_body(&self, index: usize) -> serde_json::Value {
        let requests = self.requests();
        serde_json::from_str(&requests[index].body).expect("request body is json")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn record(State(state): State<MockState>, method: Method, uri: Uri, body: String) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method,
        path: path.clone(),
        body,
    });

    let reply = state.replies.lock().unwrap().get(&path).cloned();
    match reply {
        Some(reply) => {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            (reply.status, reply.body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn pick_free_port() -> u16 {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
