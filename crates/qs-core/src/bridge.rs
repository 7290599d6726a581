//! Message contract between the page-side watcher and the privileged saver.
//!
//! Request: `{ "action": "saveQuiz", "data": { question, answer, explanation } }`
//! Response: `{ "success": true }` or `{ "success": false, "error": "..." }`

use serde::{Deserialize, Serialize};

use crate::capture::QuizCapture;

/// A request sent across the bridge. One request per accepted capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "camelCase")]
pub enum BridgeRequest {
    SaveQuiz(QuizCapture),
}

/// The single response delivered for every [`BridgeRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    /// User-facing notification text for this outcome.
    #[must_use]
    pub fn notification(&self) -> String {
        if self.success {
            "Saved successfully!".to_string()
        } else {
            format!(
                "Failed to save: {}",
                self.error.as_deref().unwrap_or("unknown error")
            )
        }
    }
}
