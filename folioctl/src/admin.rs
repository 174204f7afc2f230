//! Admin editing controller.
//!
//! The admin view edits the config through string-typed form fields:
//! scalars verbatim, skills as one comma-joined line, links and projects
//! as pretty-printed JSON text. [`AdminController`] owns the form, the
//! message inbox, and the shared status area, and drives the
//! load / edit / save round trip against the backend.

use crate::client::ApiClient;
use folio_core::{
    merge_with_defaults, ConfigUpdate, ContactMessage, FolioError, PortfolioConfig,
};

/// Status lines for the three explicit admin operations.
pub const SAVED: &str = "✓ Saved to backend.";
pub const RELOADED: &str = "✓ Reloaded config and inbox.";
pub const INBOX_REFRESHED: &str = "✓ Inbox refreshed.";

/// The editable admin form, all fields as the user sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub name: String,
    pub description: String,
    pub place: String,
    pub availability: String,
    pub pfp: String,
    pub music: String,
    pub accent_color: String,
    /// Comma-joined skill tags
    pub skills: String,
    /// Pretty-printed JSON array of links
    pub links: String,
    /// Pretty-printed JSON array of projects
    pub projects: String,
}

impl AdminForm {
    /// Populate every field from a merged config.
    pub fn fill(&mut self, config: &PortfolioConfig) {
        self.name = config.name.clone();
        self.description = config.description.clone();
        self.place = config.place.clone();
        self.availability = config.availability.clone();
        self.pfp = config.pfp.clone();
        self.music = config.music.clone();
        self.accent_color = config.accent_color.clone();
        self.skills = config.skills.join(", ");
        self.links = serde_json::to_string_pretty(&config.links).unwrap_or_default();
        self.projects = serde_json::to_string_pretty(&config.projects).unwrap_or_default();
    }

    /// Set a single field by its form name.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), FolioError> {
        match field {
            "name" => self.name = value.to_string(),
            "description" => self.description = value.to_string(),
            "place" => self.place = value.to_string(),
            "availability" => self.availability = value.to_string(),
            "pfp" => self.pfp = value.to_string(),
            "music" => self.music = value.to_string(),
            "accentColor" => self.accent_color = value.to_string(),
            "skills" => self.skills = value.to_string(),
            "links" => self.links = value.to_string(),
            "projects" => self.projects = value.to_string(),
            _ => {
                return Err(FolioError::InvalidField {
                    field: field.to_string(),
                    reason: "unknown form field".to_string(),
                })
            }
        }
        Ok(())
    }

    /// Read the form back into a full replacement object.
    ///
    /// Scalars are trimmed. Skills are comma-split with entries trimmed
    /// and empties dropped. Links and projects are JSON-decoded; a decode
    /// failure fails the whole collection and names the offending field.
    pub fn collect(&self) -> Result<ConfigUpdate, FolioError> {
        let links =
            serde_json::from_str(&self.links).map_err(|e| FolioError::invalid_field("links", e))?;
        let projects = serde_json::from_str(&self.projects)
            .map_err(|e| FolioError::invalid_field("projects", e))?;

        Ok(ConfigUpdate {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            place: self.place.trim().to_string(),
            availability: self.availability.trim().to_string(),
            pfp: self.pfp.trim().to_string(),
            music: self.music.trim().to_string(),
            accent_color: self.accent_color.trim().to_string(),
            skills: self
                .skills
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            links,
            projects,
        })
    }
}

/// Orchestrates the admin-mode lifecycle.
#[derive(Default)]
pub struct AdminController {
    pub form: AdminForm,
    pub inbox: Vec<ContactMessage>,
    pub status: String,
}

impl AdminController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch config and messages, populating the form and the inbox.
    ///
    /// The config fetch fully completes before the message fetch begins.
    /// Errors propagate to the caller, which owns the status reporting.
    pub async fn load_all(&mut self, client: &ApiClient) -> Result<(), FolioError> {
        let fetched = client.get_config().await?;
        let merged = merge_with_defaults(&fetched);
        self.form.fill(&merged);

        self.inbox = client.get_messages().await?;
        Ok(())
    }

    /// Collect the form and post the full object back.
    ///
    /// A collect failure means no request is sent and the form stays as
    /// typed. The in-memory view is not updated from the response; a
    /// reload shows the server's canonical state.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<(), FolioError> {
        let update = match self.form.collect() {
            Ok(update) => update,
            Err(e) => {
                self.status = format!("✗ {}", e);
                return Err(e);
            }
        };

        match client.save_config(&update).await {
            Ok(()) => {
                self.status = SAVED.to_string();
                Ok(())
            }
            Err(e) => {
                self.status = format!("✗ {}", e);
                Err(e)
            }
        }
    }

    /// Re-run the full load, reporting the outcome in the status.
    pub async fn reload_config(&mut self, client: &ApiClient) -> Result<(), FolioError> {
        match self.load_all(client).await {
            Ok(()) => {
                self.status = RELOADED.to_string();
                Ok(())
            }
            Err(e) => {
                self.status = format!("✗ {}", e);
                Err(e)
            }
        }
    }

    /// Re-fetch only the message inbox, independent of config state.
    pub async fn refresh_messages(&mut self, client: &ApiClient) -> Result<(), FolioError> {
        match client.get_messages().await {
            Ok(messages) => {
                self.inbox = messages;
                self.status = INBOX_REFRESHED.to_string();
                Ok(())
            }
            Err(e) => {
                self.status = format!("✗ {}", e);
                Err(e)
            }
        }
    }
}
