//! Projection of a portfolio config into the public view bindings.
//!
//! The surrounding surface owns a set of logical fields (name, tagline,
//! skill tags, link anchors, and so on). [`PortfolioView`] is that set,
//! constructed once and handed to [`render`], which projects a config into
//! it. The projection is pure and idempotent: rendering the same config
//! twice leaves the view in an identical state.

use folio_core::{PortfolioConfig, DEFAULT_PFP};
use serde::Serialize;

/// Links always open a new top-level browsing context.
pub const LINK_TARGET: &str = "_blank";

/// Applied to every link: no referrer leakage, no opener access.
pub const LINK_REL: &str = "noopener noreferrer";

/// Anchor text used when a link has no label.
pub const LINK_FALLBACK_TEXT: &str = "Link";

/// A showcased project as bound to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectBinding {
    pub title: String,
    pub description: String,
}

/// An anchor element as bound to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkBinding {
    pub href: String,
    pub text: String,
    pub target: String,
    pub rel: String,
}

/// View-binding structure for the public portfolio page.
///
/// `accent_color` is only ever written with a non-empty value; rendering a
/// config without one leaves whatever was applied before untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioView {
    pub name: String,
    pub description: String,
    pub place: String,
    pub availability: String,
    pub pfp_src: String,
    pub page_title: String,
    pub accent_color: Option<String>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectBinding>,
    pub links: Vec<LinkBinding>,
}

impl PortfolioView {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Project a config into the view bindings.
pub fn render(config: &PortfolioConfig, view: &mut PortfolioView) {
    view.name = config.name.clone();
    view.description = config.description.clone();
    view.place = format!("📍 {}", config.place);
    view.availability = config.availability.clone();
    // Empty pfp falls back at render time, independent of the merge
    view.pfp_src = if config.pfp.is_empty() {
        DEFAULT_PFP.to_string()
    } else {
        config.pfp.clone()
    };
    view.page_title = format!("{} — Live Portfolio", config.name);
    if !config.accent_color.is_empty() {
        view.accent_color = Some(config.accent_color.clone());
    }

    view.skills = config.skills.clone();

    view.projects = config
        .projects
        .iter()
        .map(|project| ProjectBinding {
            title: project.title.clone(),
            description: project.description.clone(),
        })
        .collect();

    view.links = config
        .links
        .iter()
        .map(|link| LinkBinding {
            href: if link.url.is_empty() {
                "#".to_string()
            } else {
                link.url.clone()
            },
            text: if link.label.is_empty() {
                LINK_FALLBACK_TEXT.to_string()
            } else {
                link.label.clone()
            },
            target: LINK_TARGET.to_string(),
            rel: LINK_REL.to_string(),
        })
        .collect();
}
