//! Document API configuration.

use serde::{Deserialize, Serialize};

fn default_api_base_url() -> String {
    "https://docs.googleapis.com/v1".to_string()
}

fn default_title_prefix() -> String {
    "Gemini Quiz Questions".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Base URL of the document API (no trailing slash).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Title prefix for the target document; the creation date is appended.
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            title_prefix: default_title_prefix(),
        }
    }
}

impl DocsConfig {
    /// `api_base_url` without any trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_google_docs() {
        let config = DocsConfig::default();
        assert_eq!(config.base_url(), "https://docs.googleapis.com/v1");
        assert_eq!(config.title_prefix, "Gemini Quiz Questions");
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = DocsConfig {
            api_base_url: "http://localhost:8080/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8080");
    }
}
