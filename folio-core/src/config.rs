//! Portfolio configuration model
//!
//! The configuration is the sole persistent entity of the system. The
//! backend may return a partial object; [`merge_with_defaults`] fills any
//! missing top-level key from the hardcoded default instance.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Fallback profile image path, used when a config carries an empty `pfp`.
pub const DEFAULT_PFP: &str = "/static/assets/pfp.svg";

/// An external link shown on the portfolio page, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioLink {
    pub label: String,
    pub url: String,
}

/// A showcased project, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioProject {
    pub title: String,
    pub description: String,
}

/// The full set of editable portfolio content fields.
///
/// JSON uses `accentColor`; everything else maps 1:1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Display name
    pub name: String,
    /// Tagline
    pub description: String,
    /// Location label
    pub place: String,
    /// Status label
    pub availability: String,
    /// Profile image URL/path; empty falls back to [`DEFAULT_PFP`] at render time
    pub pfp: String,
    /// Optional media URL, declared but unused by rendering
    pub video: String,
    /// Optional audio URL; empty disables the music toggle
    pub music: String,
    /// CSS color value; empty means no theme override
    #[serde(rename = "accentColor")]
    pub accent_color: String,
    /// External links, in display order
    pub links: Vec<PortfolioLink>,
    /// Skill tags, in display order
    pub skills: Vec<String>,
    /// Showcased projects, in display order
    pub projects: Vec<PortfolioProject>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            name: "Hade".to_string(),
            description:
                "Cinematic web creator building immersive interfaces and premium digital vibes."
                    .to_string(),
            place: "Morocco".to_string(),
            availability: "AVAILABLE NOW".to_string(),
            pfp: DEFAULT_PFP.to_string(),
            video: String::new(),
            music: String::new(),
            accent_color: "#8e77ff".to_string(),
            links: vec![
                PortfolioLink {
                    label: "Instagram".to_string(),
                    url: "#".to_string(),
                },
                PortfolioLink {
                    label: "GitHub".to_string(),
                    url: "#".to_string(),
                },
            ],
            skills: vec![
                "UI/UX".to_string(),
                "Motion".to_string(),
                "Frontend".to_string(),
                "Branding".to_string(),
                "Creative Coding".to_string(),
            ],
            projects: vec![PortfolioProject {
                title: "Cinematic Identity Landing".to_string(),
                description: "Dark visual-first personal page with premium interactions."
                    .to_string(),
            }],
        }
    }
}

/// Shallow-merge a fetched config payload over the default instance.
///
/// Any top-level key present in `fetched` replaces the default for that
/// key, even if falsy (an empty string or empty array wins over the
/// default). Missing keys fall back. This is NOT a deep merge: a
/// partially-specified `links` array wholly replaces the default links.
///
/// A non-object payload yields the defaults. A key whose value does not
/// fit the field's type also falls back to the default for that key.
pub fn merge_with_defaults(fetched: &Value) -> PortfolioConfig {
    let defaults = PortfolioConfig::default();
    let Some(obj) = fetched.as_object() else {
        return defaults;
    };

    PortfolioConfig {
        name: field(obj, "name", defaults.name),
        description: field(obj, "description", defaults.description),
        place: field(obj, "place", defaults.place),
        availability: field(obj, "availability", defaults.availability),
        pfp: field(obj, "pfp", defaults.pfp),
        video: field(obj, "video", defaults.video),
        music: field(obj, "music", defaults.music),
        accent_color: field(obj, "accentColor", defaults.accent_color),
        links: field(obj, "links", defaults.links),
        skills: field(obj, "skills", defaults.skills),
        projects: field(obj, "projects", defaults.projects),
    }
}

fn field<T: DeserializeOwned>(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    default: T,
) -> T {
    match obj.get(key) {
        Some(value) => serde_json::from_value(value.clone()).unwrap_or(default),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let merged = merge_with_defaults(&json!({ "name": "Jo" }));
        let defaults = PortfolioConfig::default();

        assert_eq!(merged.name, "Jo");
        assert_eq!(merged.description, defaults.description);
        assert_eq!(merged.place, defaults.place);
        assert_eq!(merged.accent_color, defaults.accent_color);
        assert_eq!(merged.links, defaults.links);
        assert_eq!(merged.skills, defaults.skills);
        assert_eq!(merged.projects, defaults.projects);
    }

    #[test]
    fn test_present_keys_override_even_when_falsy() {
        let merged = merge_with_defaults(&json!({
            "pfp": "",
            "accentColor": "",
            "skills": [],
        }));

        assert_eq!(merged.pfp, "");
        assert_eq!(merged.accent_color, "");
        assert!(merged.skills.is_empty());
    }

    #[test]
    fn test_array_fields_replace_wholesale() {
        // Shallow merge: one fetched link replaces both default links
        let merged = merge_with_defaults(&json!({
            "links": [{ "label": "Mastodon", "url": "https://example.com/@jo" }],
        }));

        assert_eq!(merged.links.len(), 1);
        assert_eq!(merged.links[0].label, "Mastodon");
        assert_eq!(merged.links[0].url, "https://example.com/@jo");
    }

    #[test]
    fn test_non_object_payload_yields_defaults() {
        assert_eq!(merge_with_defaults(&json!(null)), PortfolioConfig::default());
        assert_eq!(merge_with_defaults(&json!([1, 2])), PortfolioConfig::default());
        assert_eq!(merge_with_defaults(&json!("nope")), PortfolioConfig::default());
    }

    #[test]
    fn test_type_mismatched_key_falls_back() {
        let merged = merge_with_defaults(&json!({ "skills": 42, "name": "Jo" }));

        assert_eq!(merged.name, "Jo");
        assert_eq!(merged.skills, PortfolioConfig::default().skills);
    }

    #[test]
    fn test_partial_link_entries_default_missing_text() {
        let merged = merge_with_defaults(&json!({
            "links": [{ "url": "https://example.com" }, { "label": "Blog" }],
        }));

        assert_eq!(merged.links[0].label, "");
        assert_eq!(merged.links[0].url, "https://example.com");
        assert_eq!(merged.links[1].label, "Blog");
        assert_eq!(merged.links[1].url, "");
    }

    #[test]
    fn test_accent_color_round_trips_as_camel_case() {
        let value = serde_json::to_value(PortfolioConfig::default()).unwrap();
        assert!(value.get("accentColor").is_some());
        assert!(value.get("accent_color").is_none());
    }
}
