//! Header configuration
//!
//! Branding, routes and notification copy. Every field has a default, so a
//! partial JSON document only needs the keys it overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Title shown next to the logo
    pub brand_title: String,
    /// Target of the branding link
    pub home_route: String,
    /// Target of "View Profile"
    pub profile_route: String,
    pub messages: HeaderMessages,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            brand_title: "TaskBuddy".to_string(),
            home_route: "/dashboard".to_string(),
            profile_route: "/profile".to_string(),
            messages: HeaderMessages::default(),
        }
    }
}

/// Notification and diagnostic copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderMessages {
    pub logout_success: String,
    pub logout_failure: String,
    pub logout_error_prefix: String,
}

impl Default for HeaderMessages {
    fn default() -> Self {
        Self {
            logout_success: "Logged out successfully!".to_string(),
            logout_failure: "Failed to log out. Please try again.".to_string(),
            logout_error_prefix: "Error logging out:".to_string(),
        }
    }
}

impl HeaderConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse header configuration")
    }

    /// Load from a JSON file.
    /// Returns defaults on any I/O or parse error.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Header config unreadable, using defaults");
                return Self::default();
            }
        };

        Self::from_json(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Header config invalid, using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_header_copy() {
        let config = HeaderConfig::default();
        assert_eq!(config.brand_title, "TaskBuddy");
        assert_eq!(config.home_route, "/dashboard");
        assert_eq!(config.profile_route, "/profile");
        assert_eq!(config.messages.logout_success, "Logged out successfully!");
        assert_eq!(
            config.messages.logout_failure,
            "Failed to log out. Please try again."
        );
        assert_eq!(config.messages.logout_error_prefix, "Error logging out:");
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config =
            HeaderConfig::from_json(r#"{"brand_title":"Acme","messages":{"logout_success":"Bye"}}"#)
                .unwrap();

        assert_eq!(config.brand_title, "Acme");
        assert_eq!(config.profile_route, "/profile");
        assert_eq!(config.messages.logout_success, "Bye");
        assert_eq!(config.messages.logout_error_prefix, "Error logging out:");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(HeaderConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header.json");
        std::fs::write(&path, r#"{"profile_route":"/me"}"#).unwrap();

        let config = HeaderConfig::load(&path);
        assert_eq!(config.profile_route, "/me");
    }

    #[test]
    fn test_load_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let missing = HeaderConfig::load(&dir.path().join("missing.json"));
        assert_eq!(missing, HeaderConfig::default());

        let broken_path = dir.path().join("broken.json");
        std::fs::write(&broken_path, "[1, 2").unwrap();
        assert_eq!(HeaderConfig::load(&broken_path), HeaderConfig::default());
    }
}
