//! Wire payloads for the portfolio backend API
//!
//! Request and response models exchanged with the backend. The config
//! itself travels as a raw JSON object on fetch (merging is the caller's
//! job, see [`crate::config::merge_with_defaults`]); these are the typed
//! shapes for everything else.

use crate::config::{PortfolioLink, PortfolioProject};
use serde::{Deserialize, Serialize};

/// A visitor message submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A contact message as listed in the admin inbox.
///
/// Created server-side, listed newest first, never mutated or deleted by
/// the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

/// The full replacement object posted by the admin editor.
///
/// Exactly the ten fields the admin form edits; `video` is not editable
/// and is intentionally absent from the update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    pub name: String,
    pub description: String,
    pub place: String,
    pub availability: String,
    pub pfp: String,
    pub music: String,
    #[serde(rename = "accentColor")]
    pub accent_color: String,
    pub skills: Vec<String>,
    pub links: Vec<PortfolioLink>,
    pub projects: Vec<PortfolioProject>,
}
