//! In-process mock Ollama server for tests

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};

/// How the mock answers `POST /api/chat`
#[derive(Debug, Clone)]
pub enum Behavior {
    /// 200 with a fixed JSON body
    Reply(Value),
    /// Given status with a raw text body
    Status(StatusCode, String),
    /// 200 with a body that is not JSON
    Garbage(String),
    /// Reply with the user message content after a delay
    Echo(Duration),
}

#[derive(Clone)]
struct MockState {
    behavior: Behavior,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct MockOllama {
    pub url: String,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockOllama {
    pub async fn start(behavior: Behavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            behavior,
            calls: calls.clone(),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/api/chat", post(chat_handler))
            .layer(DefaultBodyLimit::disable())
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            url: format!("http://{}/api/chat", addr),
            calls,
            received,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Number of chat requests received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Body of the most recent chat request
    pub async fn last_request(&self) -> Option<Value> {
        self.received.lock().await.last().cloned()
    }
}

impl Drop for MockOllama {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn chat_handler(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.received.lock().await.push(body.clone());

    match state.behavior {
        Behavior::Reply(reply) => Json(reply).into_response(),
        Behavior::Status(status, text) => (status, text).into_response(),
        Behavior::Garbage(text) => (StatusCode::OK, text).into_response(),
        Behavior::Echo(delay) => {
            tokio::time::sleep(delay).await;
            let content = body["messages"][0]["content"].clone();
            Json(json!({
                "model": body["model"],
                "message": {"role": "assistant", "content": content},
                "done": true
            }))
            .into_response()
        }
    }
}

/// URL of a local port with nothing listening on it
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/chat", port)
}
