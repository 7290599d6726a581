use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no credential source configured; set QUIZSAVER_AUTH__TOKEN_COMMAND or QUIZSAVER_AUTH__TOKEN")]
    NotConfigured,

    /// The identity provider refused or cancelled token issuance.
    #[error("credential denied: {0}")]
    Denied(String),

    /// The identity provider could not be reached at all.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}
