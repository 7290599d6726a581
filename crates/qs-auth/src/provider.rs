use async_trait::async_trait;

use crate::error::AuthError;
use crate::token::BearerToken;

/// Source of short-lived bearer tokens.
///
/// Every call may hit the identity provider; callers must not assume two
/// calls return the same token.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Acquire a token for one network phase.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Denied` if the provider refuses or the user
    /// cancels, `AuthError::Unavailable` if it cannot be reached.
    async fn get_token(&self) -> Result<BearerToken, AuthError>;
}

/// Provider returning a fixed token from configuration.
pub struct StaticTokenProvider {
    token: BearerToken,
}

impl StaticTokenProvider {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: BearerToken::new(token),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self) -> Result<BearerToken, AuthError> {
        Ok(self.token.clone())
    }
}
