//! Mock recognition service
//!
//! Serves a plant.id-shaped identify endpoint on an ephemeral local port and
//! records every request it receives.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the mock answers to every request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with the given JSON body
    Json(Value),
    /// Given status with a plain error body
    Status(u16),
    /// 200 with a raw (possibly malformed) body
    Raw(String),
}

/// Request seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Running mock service; aborted on drop
pub struct MockService {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockService {
    pub async fn start(reply: MockReply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v2/identify", post(identify))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}/v2/identify", addr),
            requests,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn identify(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let api_key = headers
        .get("Api-Key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { api_key, body });

    match state.reply {
        MockReply::Json(value) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            value.to_string(),
        ),
        MockReply::Status(code) => (
            StatusCode::from_u16(code).unwrap(),
            [(header::CONTENT_TYPE, "text/plain")],
            "mock error".to_string(),
        ),
        MockReply::Raw(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        ),
    }
}

/// plant.id response body with a single suggestion
pub fn plant_id_body(name: &str, probability: f64) -> Value {
    let image_url = format!("https://images.example.org/{}.jpg", name.replace(' ', "_"));
    json!({
        "result": {
            "classification": {
                "suggestions": [
                    {
                        "name": name,
                        "probability": probability,
                        "similar_images": [
                            {"url": image_url}
                        ]
                    }
                ]
            }
        }
    })
}
