//! Credential provider configuration.

use serde::{Deserialize, Serialize};

const fn default_interactive() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Static bearer token. Useful for CI or short manual sessions.
    #[serde(default)]
    pub token: String,

    /// Command that prints a fresh bearer token on stdout
    /// (e.g. `gcloud auth print-access-token`). Takes priority over `token`.
    #[serde(default)]
    pub token_command: String,

    /// Let the token command talk to the terminal so the identity system can
    /// ask the user for consent.
    #[serde(default = "default_interactive")]
    pub interactive: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            token_command: String::new(),
            interactive: default_interactive(),
        }
    }
}

impl AuthConfig {
    /// Whether any credential source is configured.
    pub fn is_configured(&self) -> bool {
        !self.token_command.trim().is_empty() || !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AuthConfig::default();
        assert!(!config.is_configured());
        assert!(config.interactive);
    }

    #[test]
    fn configured_with_command() {
        let config = AuthConfig {
            token_command: "gcloud auth print-access-token".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn blank_command_is_not_configured() {
        let config = AuthConfig {
            token_command: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
