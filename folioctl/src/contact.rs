//! Visitor contact form controller.

use crate::client::ApiClient;
use folio_core::{ContactRequest, FolioError};

/// Status line shown after a successful submission.
pub const SENT: &str = "✓ Message sent to the backend inbox.";

/// The contact form: three free-text fields and a status area.
///
/// No client-side validation is applied; empty strings are sent as-is and
/// the backend's verdict is surfaced in the status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form.
    ///
    /// Fields are trimmed on collection. On success the status reports it
    /// and the fields are cleared; on failure the status shows the failure
    /// message and the fields are left for another attempt.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<(), FolioError> {
        let payload = ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        match client.send_contact(&payload).await {
            Ok(()) => {
                self.status = SENT.to_string();
                self.name.clear();
                self.email.clear();
                self.message.clear();
                Ok(())
            }
            Err(e) => {
                self.status = format!("✗ {}", e);
                Err(e)
            }
        }
    }
}
