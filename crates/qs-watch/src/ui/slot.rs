use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

use super::Consent;

/// Holds the one live prompt.
///
/// Opening a prompt removes the previous one; the removed prompt resolves as
/// [`Consent::Declined`].
#[derive(Debug, Default)]
pub struct PromptSlot {
    live: Mutex<Option<oneshot::Sender<Consent>>>,
}

impl PromptSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new prompt and return the receiver its answer arrives on.
    pub fn open(&self) -> oneshot::Receiver<Consent> {
        let (tx, rx) = oneshot::channel();
        if let Some(previous) = self.live().replace(tx) {
            tracing::debug!("replacing an open consent prompt");
            let _ = previous.send(Consent::Declined);
        }
        rx
    }

    /// Resolve the live prompt. Returns `false` if no prompt was open.
    pub fn resolve(&self, consent: Consent) -> bool {
        self.live()
            .take()
            .is_some_and(|tx| tx.send(consent).is_ok())
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.live().as_ref().is_some_and(|tx| !tx.is_closed())
    }

    fn live(&self) -> MutexGuard<'_, Option<oneshot::Sender<Consent>>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
