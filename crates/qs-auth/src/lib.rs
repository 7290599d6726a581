//! # qs-auth
//!
//! Short-lived bearer tokens for the document API.
//!
//! A token is acquired fresh for every network phase of a save and is never
//! cached or persisted. Two sources are supported:
//! - an external command that prints a token (`gcloud auth print-access-token`),
//!   optionally attached to the terminal so the identity system can prompt
//! - a static token from configuration

pub mod command;
pub mod error;
pub mod provider;
pub mod token;

use std::sync::Arc;

pub use command::CommandTokenProvider;
pub use error::AuthError;
pub use provider::{StaticTokenProvider, TokenProvider};
pub use token::BearerToken;

/// Pick the credential source described by `config`.
///
/// Priority: `token_command` → `token`.
///
/// # Errors
///
/// Returns `AuthError::NotConfigured` when neither source is set.
pub fn provider_from_config(
    config: &qs_config::AuthConfig,
) -> Result<Arc<dyn TokenProvider>, AuthError> {
    if !config.token_command.trim().is_empty() {
        let provider = CommandTokenProvider::parse(&config.token_command)?
            .interactive(config.interactive);
        return Ok(Arc::new(provider));
    }
    if !config.token.is_empty() {
        return Ok(Arc::new(StaticTokenProvider::new(config.token.clone())));
    }
    Err(AuthError::NotConfigured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_is_an_error() {
        let config = qs_config::AuthConfig::default();
        assert!(matches!(
            provider_from_config(&config),
            Err(AuthError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn static_token_is_used_when_no_command() {
        let config = qs_config::AuthConfig {
            token: "ya29.static".into(),
            ..Default::default()
        };
        let provider = provider_from_config(&config).unwrap();
        let token = provider.get_token().await.unwrap();
        assert_eq!(token.secret(), "ya29.static");
    }
}
