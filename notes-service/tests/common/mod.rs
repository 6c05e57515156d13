#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use notes_service::config::{GoogleConfig, ModelConfig, NotesConfig};
use secrecy::Secret;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-test";

/// How the stand-in Gemini endpoint answers.
#[derive(Clone)]
pub enum StubReply {
    Json(Value),
    Status(StatusCode, String),
    Hang(Duration),
}

/// A request captured by the stub.
#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct GeminiStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl GeminiStub {
    pub async fn spawn(reply: StubReply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v1beta/models/*action", post(generate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/v1beta", port),
            requests,
        }
    }

    /// Stub answering with a single candidate holding `text`.
    pub async fn replying(text: &str) -> Self {
        Self::spawn(StubReply::Json(text_response(text))).await
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> NotesConfig {
        notes_config(Some(TEST_API_KEY), &self.base_url, 5)
    }
}

async fn generate(
    State(state): State<StubState>,
    axum::extract::OriginalUri(uri): axum::extract::OriginalUri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(CapturedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        body,
    });

    match state.reply {
        StubReply::Json(value) => (StatusCode::OK, Json(value)).into_response(),
        StubReply::Status(status, message) => (status, message).into_response(),
        StubReply::Hang(duration) => {
            tokio::time::sleep(duration).await;
            (StatusCode::OK, Json(text_response("too late"))).into_response()
        }
    }
}

pub fn text_response(text: &str) -> Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160}
    })
}

pub fn notes_config(api_key: Option<&str>, api_base: &str, timeout_secs: u64) -> NotesConfig {
    NotesConfig {
        common: service_core::config::Config {
            port: 0,
            log_level: "debug".to_string(),
        },
        google: GoogleConfig {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
        },
        models: ModelConfig {
            text_model: TEST_MODEL.to_string(),
            api_base: api_base.to_string(),
            request_timeout_secs: timeout_secs,
        },
    }
}
