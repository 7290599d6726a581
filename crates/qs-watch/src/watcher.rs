//! Pipeline driver: change feed → extraction machine → consent → bridge →
//! notification.
//!
//! One task owns the machine. Prompts and saves run as spawned tasks that
//! report back over an internal channel, so the feed keeps draining while
//! the user decides or a save is in flight.

use std::sync::Arc;
use std::time::Duration;

use qs_bridge::BridgeClient;
use qs_core::{BridgeRequest, QuizCapture, SaveResponse};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::feed::MutationBatch;
use crate::machine::ExtractionMachine;
use crate::page::PageNode;
use crate::ui::{Consent, ConsentUi};

/// Counts of what happened during one watch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WatchReport {
    pub prompted: usize,
    pub saved: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Debug)]
enum PipelineEvent {
    Consent(Consent),
    Saved(SaveResponse),
}

pub struct Watcher {
    machine: ExtractionMachine,
    ui: Arc<dyn ConsentUi>,
    bridge: BridgeClient,
    recheck_delay: Duration,
    page: Option<PageNode>,
    report: WatchReport,
}

impl Watcher {
    #[must_use]
    pub fn new(machine: ExtractionMachine, ui: Arc<dyn ConsentUi>, bridge: BridgeClient) -> Self {
        Self {
            machine,
            ui,
            bridge,
            recheck_delay: Duration::from_secs(1),
            page: None,
            report: WatchReport::default(),
        }
    }

    /// Delay of the one-time re-check that catches a question answered
    /// before the first change notification.
    #[must_use]
    pub const fn with_recheck_delay(mut self, delay: Duration) -> Self {
        self.recheck_delay = delay;
        self
    }

    /// Run until the feed closes, the re-check has fired, and no prompt or
    /// save is pending.
    pub async fn run(mut self, mut feed: mpsc::Receiver<MutationBatch>) -> WatchReport {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let recheck = tokio::time::sleep(self.recheck_delay);
        tokio::pin!(recheck);
        let mut rechecked = false;
        let mut feed_open = true;

        loop {
            if !feed_open && rechecked && self.machine.is_idle() {
                break;
            }

            tokio::select! {
                batch = feed.recv(), if feed_open => match batch {
                    Some(batch) => self.on_batch(batch, &events_tx),
                    None => {
                        tracing::debug!("change feed closed");
                        feed_open = false;
                    }
                },
                () = &mut recheck, if !rechecked => {
                    rechecked = true;
                    self.recheck(&events_tx);
                }
                Some(event) = events_rx.recv() => self.on_event(event, &events_tx).await,
            }
        }

        self.report
    }

    fn on_batch(&mut self, batch: MutationBatch, events: &mpsc::UnboundedSender<PipelineEvent>) {
        let detected = self.machine.on_mutations(&batch);
        self.page = Some(batch.document);
        if let Some(capture) = detected {
            self.prompt(capture, events);
        }
    }

    fn recheck(&mut self, events: &mpsc::UnboundedSender<PipelineEvent>) {
        let detected = match &self.page {
            Some(page) => self.machine.evaluate(page),
            None => None,
        };
        if let Some(capture) = detected {
            tracing::debug!("delayed re-check found an answered question");
            self.prompt(capture, events);
        }
    }

    fn prompt(&mut self, capture: QuizCapture, events: &mpsc::UnboundedSender<PipelineEvent>) {
        self.report.prompted += 1;
        let ui = Arc::clone(&self.ui);
        let events = events.clone();
        tokio::spawn(async move {
            let consent = ui.prompt_for_consent(&capture).await;
            let _ = events.send(PipelineEvent::Consent(consent));
        });
    }

    async fn on_event(&mut self, event: PipelineEvent, events: &mpsc::UnboundedSender<PipelineEvent>) {
        match event {
            PipelineEvent::Consent(Consent::Accepted) => {
                let Some(capture) = self.machine.accept() else {
                    return;
                };
                let bridge = self.bridge.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let response = bridge.send(BridgeRequest::SaveQuiz(capture)).await;
                    let _ = events.send(PipelineEvent::Saved(response));
                });
            }
            PipelineEvent::Consent(Consent::Declined) => {
                self.machine.decline();
                self.report.skipped += 1;
            }
            PipelineEvent::Saved(response) => {
                self.machine.complete();
                if response.success {
                    self.report.saved += 1;
                } else {
                    self.report.failed += 1;
                }
                self.ui.notify(&response.notification()).await;
            }
        }
    }
}
