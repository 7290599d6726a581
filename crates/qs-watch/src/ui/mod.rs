//! Consent prompt and outcome notifications.
//!
//! [`ConsentUi`] is the seam between the pipeline and whatever renders it:
//! a terminal ([`TerminalUi`]), a non-interactive run ([`AutoConsentUi`]), or
//! an embedding front end ([`ChannelUi`]).

mod auto;
mod channel;
mod slot;
mod terminal;

use async_trait::async_trait;
use qs_core::QuizCapture;

pub use auto::AutoConsentUi;
pub use channel::{ChannelUi, UiEvent};
pub use slot::PromptSlot;
pub use terminal::TerminalUi;

/// How a consent prompt was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

#[async_trait]
pub trait ConsentUi: Send + Sync {
    /// Show a blocking save/skip prompt for `capture` and wait for the answer.
    ///
    /// At most one prompt is live at a time; showing a new one removes any
    /// prompt still open.
    async fn prompt_for_consent(&self, capture: &QuizCapture) -> Consent;

    /// Show a transient message that dismisses itself. Must not block.
    async fn notify(&self, message: &str);
}
