//! Folio CLI Library
//!
//! Client for a remote "live portfolio" backend, with a public portfolio
//! view and an admin editing view over the same HTTP/JSON API.
//!
//! # Public API
//!
//! The primary public API is [`client::ApiClient`], the thin JSON wrapper
//! around the backend, plus the controllers that drive the two views:
//! [`view`] for the public projection, [`contact::ContactForm`] and
//! [`admin::AdminController`] for the mutating flows.
//!
//! ```no_run
//! use folioctl::client::ApiClient;
//! use folio_core::merge_with_defaults;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ApiClient::new("http://localhost:5000")?;
//! let config = merge_with_defaults(&client.get_config().await?);
//! println!("{}", config.name);
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for communicating with the portfolio backend.
pub mod client;

/// Configuration types for the CLI tool.
pub mod config;

/// Admin editing controller: form fill/collect and the save round trip.
pub mod admin;

/// Background-music toggle state machine.
pub mod audio;

/// Visitor contact form controller.
pub mod contact;

/// View mode resolution from a navigation path.
pub mod mode;

/// Projection of a config into the public view bindings.
pub mod view;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;
