use std::time::Duration;

use async_trait::async_trait;
use console::{Term, style};
use dialoguer::{Confirm, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use qs_core::QuizCapture;
use tokio::sync::Mutex;

use super::{Consent, ConsentUi};

/// Prompts on stderr with `dialoguer`; notifications are `indicatif` messages
/// cleared after their lifetime.
pub struct TerminalUi {
    notification_lifetime: Duration,
    // Serializes prompts; the terminal shows one at a time.
    prompt_lock: Mutex<()>,
}

impl TerminalUi {
    #[must_use]
    pub fn new(notification_lifetime: Duration) -> Self {
        Self {
            notification_lifetime,
            prompt_lock: Mutex::new(()),
        }
    }
}

fn ask(capture: &QuizCapture) -> Result<bool, dialoguer::Error> {
    let term = Term::stderr();
    term.write_line(&format!("\n{}", style("Save Quiz Question?").bold()))?;
    term.write_line(&format!("  {} {}", style("Q:").dim(), capture.question))?;
    term.write_line(&format!("  {} {}", style("A:").dim(), capture.answer))?;
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Would you like to save this question and answer to the quiz document?")
        .default(true)
        .interact_on(&term)
}

#[async_trait]
impl ConsentUi for TerminalUi {
    async fn prompt_for_consent(&self, capture: &QuizCapture) -> Consent {
        let _guard = self.prompt_lock.lock().await;
        let capture = capture.clone();
        match tokio::task::spawn_blocking(move || ask(&capture)).await {
            Ok(Ok(true)) => Consent::Accepted,
            Ok(Ok(false)) => Consent::Declined,
            Ok(Err(error)) => {
                tracing::warn!(%error, "consent prompt failed; treating as skip");
                Consent::Declined
            }
            Err(error) => {
                tracing::warn!(%error, "consent prompt task failed; treating as skip");
                Consent::Declined
            }
        }
    }

    async fn notify(&self, message: &str) {
        let toast = ProgressBar::new_spinner();
        toast.set_style(
            ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        toast.set_message(message.to_string());
        toast.tick();

        let lifetime = self.notification_lifetime;
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            toast.finish_and_clear();
        });
    }
}
