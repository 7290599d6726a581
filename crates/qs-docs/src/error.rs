//! Document API error types.

use qs_auth::AuthError;
use thiserror::Error;

/// Errors from a single document API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors from the persisted key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of a save, grouped by what went wrong from the user's view.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The identity provider refused or failed to issue a token.
    #[error(transparent)]
    Credential(#[from] AuthError),

    /// The target document could not be created or fetched.
    #[error("document unavailable: {0}")]
    DocumentUnavailable(#[source] ApiError),

    /// The batched edit was rejected.
    #[error("edit rejected: {0}")]
    EditRejected(#[source] ApiError),

    /// The document has no content blocks to anchor an insertion.
    #[error("document {id} has no content")]
    EmptyDocument { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
