use async_trait::async_trait;
use qs_core::QuizCapture;

use super::{Consent, ConsentUi};

/// Non-interactive UI that accepts every prompt. Outcomes go to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConsentUi;

impl AutoConsentUi {
    #[must_use]
    pub const fn accepting() -> Self {
        Self
    }
}

#[async_trait]
impl ConsentUi for AutoConsentUi {
    async fn prompt_for_consent(&self, capture: &QuizCapture) -> Consent {
        tracing::info!(question = %capture.question, "auto-accepted save prompt");
        Consent::Accepted
    }

    async fn notify(&self, message: &str) {
        tracing::info!(%message, "save outcome");
    }
}
