//! Cross-cutting error types for quiz-saver.
//!
//! Component errors (`AuthError`, `DocsError`, ...) live in their own crates.
//! A unified error is deferred to `qs-cli`, where everything converges.

use thiserror::Error;

/// Errors that can be raised while building core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required capture field was empty after trimming.
    #[error("incomplete capture: {field} is empty")]
    IncompleteCapture { field: &'static str },
}
