//! Test utilities for client testing
//!
//! In-process mock of the portfolio backend, implementing the same
//! HTTP/JSON contract: raw JSON bodies, `{error}` objects on failing
//! statuses, contact validation, and a newest-first inbox.

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use folio_core::ContactMessage;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Rejection used for short contact fields, as the real backend words it.
pub const CONTACT_REJECTED: &str = "Please fill all fields with valid values.";

/// Mock backend state
#[derive(Debug, Clone)]
pub struct MockBackendState {
    /// Stored portfolio config (may be partial, as the contract allows)
    pub config: Arc<Mutex<Value>>,
    /// Contact inbox, oldest first; served newest first
    pub messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl Default for MockBackendState {
    fn default() -> Self {
        Self {
            config: Arc::new(Mutex::new(json!({}))),
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockBackendState {
    /// Append a message directly, bypassing the contact endpoint.
    pub fn push_message(&self, name: &str, email: &str, message: &str) {
        let mut messages = self.messages.lock().unwrap();
        let id = messages.len() as i64 + 1;
        messages.push(ContactMessage {
            id,
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            created_at: format!("2024-05-01T10:{:02}:00+00:00", id % 60),
        });
    }
}

/// Mock backend implementation
#[derive(Debug, Default)]
pub struct MockBackend {
    state: MockBackendState,
    port: u16,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the mock backend and return its base URL.
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock backend error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
        }

        Ok((self, server_url))
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &MockBackendState {
        &self.state
    }

    fn create_router(&self) -> Router {
        Router::new()
            .route("/api/config", get(get_config_handler).post(save_config_handler))
            .route("/api/messages", get(messages_handler))
            .route("/api/contact", post(contact_handler))
            // Fixed-outcome routes for error-mapping tests
            .route("/api/reject", get(reject_handler))
            .route("/api/crash", get(crash_handler))
            .with_state(self.state.clone())
    }
}

// Handler functions

async fn get_config_handler(State(state): State<MockBackendState>) -> Json<Value> {
    Json(state.config.lock().unwrap().clone())
}

async fn save_config_handler(
    State(state): State<MockBackendState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !payload.is_object() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid JSON payload." })),
        ));
    }

    *state.config.lock().unwrap() = payload;
    Ok(Json(json!({ "ok": true })))
}

async fn messages_handler(State(state): State<MockBackendState>) -> Json<Vec<ContactMessage>> {
    let mut messages = state.messages.lock().unwrap().clone();
    messages.reverse();
    Json(messages)
}

async fn contact_handler(
    State(state): State<MockBackendState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let text = |key: &str| {
        payload
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string()
    };
    let name = text("name");
    let email = text("email");
    let message = text("message");

    if name.len() < 2 || email.len() < 5 || message.len() < 4 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": CONTACT_REJECTED })),
        ));
    }

    state.push_message(&name, &email, &message);
    Ok(Json(json!({ "ok": true, "message": "Message sent successfully." })))
}

async fn reject_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad name" })))
}

async fn crash_handler() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal failure")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend_startup() {
        let (backend, url) = MockBackend::new().start().await.unwrap();

        assert!(backend.port() > 0);
        assert!(url.contains(&backend.port().to_string()));

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/api/config", url))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_contact_validation_matches_backend_rules() {
        let (_backend, url) = MockBackend::new().start().await.unwrap();
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/api/contact", url))
            .json(&json!({ "name": "A", "email": "a@b.c", "message": "hello" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], CONTACT_REJECTED);
    }

    #[tokio::test]
    async fn test_messages_served_newest_first() {
        let (backend, url) = MockBackend::new().start().await.unwrap();
        backend.state().push_message("Ada", "ada@example.com", "one");
        backend.state().push_message("Grace", "grace@example.com", "two");

        let client = reqwest::Client::new();
        let messages: Vec<ContactMessage> = client
            .get(format!("{}/api/messages", url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(messages[0].name, "Grace");
        assert_eq!(messages[1].name, "Ada");
    }
}
