use qs_config::SelectorConfig;
use qs_core::QuizCapture;

use crate::page::{PageNode, Selector, SelectorError};

/// Compiled selectors for the quiz page.
#[derive(Debug, Clone)]
pub struct QuizSelectors {
    marker: Selector,
    question: Selector,
    answer: Selector,
    explanation: Selector,
}

/// Result of looking at one page snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// No option is marked as the selected correct answer.
    NoMarker,
    /// Marker present but question or answer text is not rendered yet.
    Incomplete,
    Ready(QuizCapture),
}

impl QuizSelectors {
    /// # Errors
    ///
    /// Returns [`SelectorError`] if any configured selector is unsupported.
    pub fn from_config(config: &SelectorConfig) -> Result<Self, SelectorError> {
        Ok(Self {
            marker: config.marker.parse()?,
            question: config.question.parse()?,
            answer: config.answer.parse()?,
            explanation: config.explanation.parse()?,
        })
    }

    /// Extract the answered question from `document`.
    ///
    /// The question is looked up from the document root; answer and
    /// explanation only among the marked option's descendants.
    #[must_use]
    pub fn extract(&self, document: &PageNode) -> Extraction {
        let Some(marker) = self.marker.locate(document) else {
            return Extraction::NoMarker;
        };

        let question = self
            .question
            .query(document)
            .map(PageNode::text_content)
            .unwrap_or_default();
        let answer = self
            .answer
            .query_within(&marker)
            .map(PageNode::text_content)
            .unwrap_or_default();
        let explanation = self.explanation.query_within(&marker).map(PageNode::text_content);

        QuizCapture::new(&question, &answer, explanation.as_deref())
            .map_or(Extraction::Incomplete, Extraction::Ready)
    }
}
