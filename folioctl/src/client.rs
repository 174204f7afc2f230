//! HTTP client for communicating with the portfolio backend.

use folio_core::{ConfigUpdate, ContactMessage, ContactRequest, FolioError, REQUEST_FAILED};
use reqwest::{header::CONTENT_TYPE, Client, Method};
use serde_json::Value;
use tracing::debug;

/// Normalize a server URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Thin JSON wrapper around the portfolio backend API.
///
/// Every request sends and expects JSON. The response body is parsed as
/// JSON regardless of HTTP status: a failing status yields a
/// [`FolioError::Api`] whose message is the body's `error` field when
/// present, else the generic fallback. No schema validation happens at
/// this layer; defaulting and merging are the caller's responsibility.
///
/// There are no retries, no timeouts, and no de-duplication of in-flight
/// requests. Failures surface immediately to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given server URL.
    pub fn new(server_url: &str) -> Result<Self, FolioError> {
        let http = Client::builder()
            .user_agent(concat!("folioctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FolioError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_url(server_url),
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a JSON request against an API path.
    ///
    /// Returns the parsed response body on a success status. On a failing
    /// status, fails with the body's `error` field when the body is a JSON
    /// object carrying one, else with the generic fallback message.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, FolioError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FolioError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FolioError::Transport(e.to_string()))?;

        let parsed: Option<Value> = serde_json::from_str(&text).ok();

        if !status.is_success() {
            let message = parsed
                .as_ref()
                .and_then(|v| v.get("error"))
                .and_then(Value::as_str)
                .unwrap_or(REQUEST_FAILED)
                .to_string();
            return Err(FolioError::Api(message));
        }

        parsed.ok_or_else(|| FolioError::Parse(format!("invalid JSON from {}", path)))
    }

    /// Fetch the stored portfolio config as a raw JSON value.
    ///
    /// The payload may be partial; merge it with
    /// [`folio_core::merge_with_defaults`] before rendering.
    pub async fn get_config(&self) -> Result<Value, FolioError> {
        self.request(Method::GET, "/api/config", None).await
    }

    /// Overwrite the stored config with a full replacement object.
    pub async fn save_config(&self, update: &ConfigUpdate) -> Result<(), FolioError> {
        let body = serde_json::to_value(update).map_err(|e| FolioError::Parse(e.to_string()))?;
        self.request(Method::POST, "/api/config", Some(&body))
            .await
            .map(|_| ())
    }

    /// Fetch the contact inbox, in the order the server lists it.
    pub async fn get_messages(&self) -> Result<Vec<ContactMessage>, FolioError> {
        let value = self.request(Method::GET, "/api/messages", None).await?;
        serde_json::from_value(value).map_err(|e| FolioError::Parse(e.to_string()))
    }

    /// Submit a visitor contact message.
    pub async fn send_contact(&self, contact: &ContactRequest) -> Result<(), FolioError> {
        let body = serde_json::to_value(contact).map_err(|e| FolioError::Parse(e.to_string()))?;
        self.request(Method::POST, "/api/contact", Some(&body))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockBackend;
    use serde_json::json;

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize_url("http://localhost:5000"),
            "http://localhost:5000"
        );
        assert_eq!(
            normalize_url("http://localhost:5000/"),
            "http://localhost:5000"
        );
        assert_eq!(
            normalize_url("http://localhost:5000///"),
            "http://localhost:5000"
        );
    }

    #[tokio::test]
    async fn test_error_body_message_is_surfaced_verbatim() {
        let (_backend, url) = MockBackend::new().start().await.unwrap();
        let client = ApiClient::new(&url).unwrap();

        let err = client
            .request(Method::GET, "/api/reject", None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "bad name");
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_generic_message() {
        let (_backend, url) = MockBackend::new().start().await.unwrap();
        let client = ApiClient::new(&url).unwrap();

        let err = client
            .request(Method::GET, "/api/crash", None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), REQUEST_FAILED);
    }

    #[tokio::test]
    async fn test_get_config_returns_raw_payload() {
        let (backend, url) = MockBackend::new().start().await.unwrap();
        let client = ApiClient::new(&url).unwrap();

        *backend.state().config.lock().unwrap() = json!({ "name": "Jo" });

        let value = client.get_config().await.unwrap();
        assert_eq!(value, json!({ "name": "Jo" }));
    }

    #[tokio::test]
    async fn test_sparse_stored_config_renders_through_the_full_path() {
        let (backend, url) = MockBackend::new().start().await.unwrap();
        let client = ApiClient::new(&url).unwrap();

        *backend.state().config.lock().unwrap() = json!({ "name": "Jo" });

        let merged = folio_core::merge_with_defaults(&client.get_config().await.unwrap());
        let mut view = crate::view::PortfolioView::new();
        crate::view::render(&merged, &mut view);

        assert_eq!(view.page_title, "Jo — Live Portfolio");
        assert_eq!(view.pfp_src, folio_core::DEFAULT_PFP);
    }

    #[tokio::test]
    async fn test_contact_round_trip_lands_in_inbox() {
        let (backend, url) = MockBackend::new().start().await.unwrap();
        let client = ApiClient::new(&url).unwrap();

        let contact = ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "lovely page".to_string(),
        };
        client.send_contact(&contact).await.unwrap();

        let messages = client.get_messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "Ada");
        assert_eq!(messages[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_rejected_contact_surfaces_backend_validation() {
        let (_backend, url) = MockBackend::new().start().await.unwrap();
        let client = ApiClient::new(&url).unwrap();

        let contact = ContactRequest::default();
        let err = client.send_contact(&contact).await.unwrap_err();

        assert_eq!(err.to_string(), "Please fill all fields with valid values.");
    }

    #[tokio::test]
    async fn test_transport_failure_when_nothing_listens() {
        // Port 9 (discard) is a safe nothing-listens target
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.get_config().await.unwrap_err();

        assert!(matches!(err, FolioError::Transport(_)));
    }
}
