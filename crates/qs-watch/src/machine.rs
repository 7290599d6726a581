//! Extraction state machine.
//!
//! `Idle → Prompted → (Saving | Skipped) → Idle`. Detection happens inside
//! [`ExtractionMachine::evaluate`] and moves straight to `Prompted`.
//!
//! The latch is set when a prompt is shown and cleared when the question
//! settles (declined, or save completed either way). While it is set every
//! evaluation is a no-op, so one answered question yields one prompt.
//!
//! A settled question is remembered until the marker leaves the page, so a
//! still-visible answered question does not prompt again after it settles.

use qs_core::QuizCapture;

use crate::extract::{Extraction, QuizSelectors};
use crate::feed::MutationBatch;
use crate::page::PageNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineState {
    Idle,
    Prompted(QuizCapture),
    Saving(QuizCapture),
}

#[derive(Debug)]
pub struct ExtractionMachine {
    selectors: QuizSelectors,
    state: MachineState,
    latch: bool,
    settled_question: Option<String>,
}

impl ExtractionMachine {
    #[must_use]
    pub const fn new(selectors: QuizSelectors) -> Self {
        Self {
            selectors,
            state: MachineState::Idle,
            latch: false,
            settled_question: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &MachineState {
        &self.state
    }

    #[must_use]
    pub const fn latch(&self) -> bool {
        self.latch
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, MachineState::Idle)
    }

    /// Handle one change notification. Batches that inserted nothing are ignored.
    pub fn on_mutations(&mut self, batch: &MutationBatch) -> Option<QuizCapture> {
        if !batch.has_added_nodes() {
            return None;
        }
        self.evaluate(&batch.document)
    }

    /// Re-evaluate `document`. Returns the capture to prompt for when a new
    /// answered question is detected.
    pub fn evaluate(&mut self, document: &PageNode) -> Option<QuizCapture> {
        if self.latch {
            return None;
        }

        match self.selectors.extract(document) {
            Extraction::NoMarker => {
                if let Some(question) = self.settled_question.take() {
                    tracing::debug!(%question, "answered question left the page");
                }
                None
            }
            Extraction::Incomplete => None,
            Extraction::Ready(capture) => {
                if self.settled_question.as_deref() == Some(capture.question.as_str()) {
                    return None;
                }
                tracing::debug!(question = %capture.question, answer = %capture.answer, "detected answered question");
                self.latch = true;
                self.state = MachineState::Prompted(capture.clone());
                Some(capture)
            }
        }
    }

    /// User accepted the prompt: `Prompted → Saving`.
    ///
    /// Returns the capture to forward, or `None` if nothing was prompted.
    pub fn accept(&mut self) -> Option<QuizCapture> {
        let MachineState::Prompted(capture) = &self.state else {
            tracing::debug!(state = ?self.state, "accept ignored outside Prompted");
            return None;
        };
        let capture = capture.clone();
        self.state = MachineState::Saving(capture.clone());
        Some(capture)
    }

    /// User declined the prompt: `Prompted → Idle`, no save.
    pub fn decline(&mut self) {
        if let MachineState::Prompted(capture) = &self.state {
            let question = capture.question.clone();
            self.settle(question);
        }
    }

    /// The save finished, successfully or not: `Saving → Idle`.
    pub fn complete(&mut self) {
        if let MachineState::Saving(capture) = &self.state {
            let question = capture.question.clone();
            self.settle(question);
        }
    }

    fn settle(&mut self, question: String) {
        tracing::debug!(%question, "question settled");
        self.settled_question = Some(question);
        self.latch = false;
        self.state = MachineState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qs_config::SelectorConfig;

    use super::*;

    fn machine() -> ExtractionMachine {
        ExtractionMachine::new(QuizSelectors::from_config(&SelectorConfig::default()).unwrap())
    }

    fn markdown(text: &str) -> PageNode {
        PageNode::element("div")
            .with_class("markdown")
            .with_child(PageNode::element("p").with_text(text))
    }

    fn answered(question: &str, answer: &str) -> PageNode {
        PageNode::element("body")
            .with_child(
                PageNode::element("div")
                    .with_class("question-text-container")
                    .with_child(markdown(question)),
            )
            .with_child(
                PageNode::element("div")
                    .with_class("option")
                    .with_class("answered-correct")
                    .with_child(
                        PageNode::element("div")
                            .with_class("option-text-container")
                            .with_child(markdown(answer)),
                    ),
            )
    }

    fn unanswered(question: &str) -> PageNode {
        PageNode::element("body").with_child(
            PageNode::element("div")
                .with_class("question-text-container")
                .with_child(markdown(question)),
        )
    }

    fn batch(document: PageNode) -> MutationBatch {
        MutationBatch::inserted(PageNode::element("span"), document)
    }

    #[test]
    fn repeated_batches_prompt_once() {
        let mut machine = machine();
        let prompts = (0..5)
            .filter_map(|_| machine.on_mutations(&batch(answered("2+2?", "4"))))
            .count();
        assert_eq!(prompts, 1);
        assert!(machine.latch());
    }

    #[test]
    fn detection_moves_to_prompted() {
        let mut machine = machine();
        let capture = machine.on_mutations(&batch(answered("2+2?", "4"))).unwrap();
        assert_eq!(capture, QuizCapture::new("2+2?", "4", None).unwrap());
        assert_eq!(machine.state(), &MachineState::Prompted(capture));
    }

    #[test]
    fn incomplete_capture_stays_idle() {
        let mut machine = machine();
        assert!(machine.on_mutations(&batch(answered("2+2?", "  "))).is_none());
        assert!(machine.is_idle());
        assert!(!machine.latch());
    }

    #[test]
    fn batches_without_insertions_are_ignored() {
        let mut machine = machine();
        let quiet = MutationBatch {
            records: Vec::new(),
            document: answered("2+2?", "4"),
        };
        assert!(machine.on_mutations(&quiet).is_none());
        assert!(machine.is_idle());
    }

    #[test]
    fn saving_guards_reentry() {
        let mut machine = machine();
        machine.on_mutations(&batch(answered("2+2?", "4")));
        machine.accept().unwrap();
        assert!(machine.on_mutations(&batch(answered("3+3?", "6"))).is_none());
        assert!(matches!(machine.state(), MachineState::Saving(_)));
    }

    #[test]
    fn skip_then_next_question_prompts_once() {
        let mut machine = machine();
        machine.on_mutations(&batch(answered("2+2?", "4")));
        machine.decline();
        assert!(machine.is_idle());
        assert!(!machine.latch());

        // Same answered question still on screen.
        assert!(machine.on_mutations(&batch(answered("2+2?", "4"))).is_none());

        let next = (0..3)
            .filter_map(|_| machine.on_mutations(&batch(answered("3+3?", "6"))))
            .collect::<Vec<_>>();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].question, "3+3?");
    }

    #[test]
    fn completed_save_resets_and_allows_next_question() {
        let mut machine = machine();
        machine.on_mutations(&batch(answered("2+2?", "4")));
        assert_eq!(machine.accept().unwrap().answer, "4");
        machine.complete();
        assert!(machine.is_idle());
        assert!(!machine.latch());

        assert!(machine.on_mutations(&batch(answered("2+2?", "4"))).is_none());
        assert!(machine.on_mutations(&batch(answered("5+5?", "10"))).is_some());
    }

    #[test]
    fn marker_leaving_page_forgets_settled_question() {
        let mut machine = machine();
        machine.on_mutations(&batch(answered("2+2?", "4")));
        machine.decline();

        assert!(machine.on_mutations(&batch(unanswered("2+2?"))).is_none());
        assert!(machine.on_mutations(&batch(answered("2+2?", "4"))).is_some());
    }

    #[test]
    fn accept_outside_prompted_is_ignored() {
        let mut machine = machine();
        assert!(machine.accept().is_none());
        machine.complete();
        machine.decline();
        assert!(machine.is_idle());
    }
}
