use std::time::Duration;

use async_trait::async_trait;
use qs_core::QuizCapture;
use tokio::sync::mpsc;

use super::{Consent, ConsentUi, PromptSlot};

/// What an embedding front end should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Show the save/skip modal; answer with [`ChannelUi::resolve`].
    Prompt(QuizCapture),
    /// Show a toast for `lifetime`, then remove it.
    Notification { message: String, lifetime: Duration },
}

/// UI that forwards rendering to another component over a channel.
pub struct ChannelUi {
    events: mpsc::UnboundedSender<UiEvent>,
    slot: PromptSlot,
    notification_lifetime: Duration,
}

impl ChannelUi {
    #[must_use]
    pub fn new(notification_lifetime: Duration) -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let ui = Self {
            events,
            slot: PromptSlot::new(),
            notification_lifetime,
        };
        (ui, rx)
    }

    /// Answer the live prompt. Returns `false` if none is open.
    pub fn resolve(&self, consent: Consent) -> bool {
        self.slot.resolve(consent)
    }
}

#[async_trait]
impl ConsentUi for ChannelUi {
    async fn prompt_for_consent(&self, capture: &QuizCapture) -> Consent {
        let answer = self.slot.open();
        if self.events.send(UiEvent::Prompt(capture.clone())).is_err() {
            tracing::warn!("no front end listening; declining prompt");
            self.slot.resolve(Consent::Declined);
        }
        answer.await.unwrap_or(Consent::Declined)
    }

    async fn notify(&self, message: &str) {
        let _ = self.events.send(UiEvent::Notification {
            message: message.to_string(),
            lifetime: self.notification_lifetime,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn prompt_waits_for_front_end() {
        let (ui, mut events) = ChannelUi::new(Duration::from_secs(3));
        let ui = Arc::new(ui);
        let capture = QuizCapture::new("2+2?", "4", None).unwrap();

        let prompting = {
            let ui = Arc::clone(&ui);
            let capture = capture.clone();
            tokio::spawn(async move { ui.prompt_for_consent(&capture).await })
        };

        assert_eq!(events.recv().await, Some(UiEvent::Prompt(capture)));
        assert!(ui.resolve(Consent::Accepted));
        assert_eq!(prompting.await.unwrap(), Consent::Accepted);
    }

    #[tokio::test]
    async fn prompt_without_front_end_declines() {
        let (ui, events) = ChannelUi::new(Duration::from_secs(3));
        drop(events);
        let capture = QuizCapture::new("2+2?", "4", None).unwrap();
        assert_eq!(ui.prompt_for_consent(&capture).await, Consent::Declined);
    }

    #[tokio::test]
    async fn notification_carries_lifetime() {
        let (ui, mut events) = ChannelUi::new(Duration::from_secs(3));
        ui.notify("Saved successfully!").await;
        assert_eq!(
            events.recv().await,
            Some(UiEvent::Notification {
                message: "Saved successfully!".into(),
                lifetime: Duration::from_secs(3),
            })
        );
    }
}
