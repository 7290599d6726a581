use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Placeholder stored when the page shows no explanation for the answer.
pub const NO_EXPLANATION: &str = "No explanation provided";

/// One answered quiz question as extracted from the page.
///
/// All fields are trimmed. `question` and `answer` are never empty; construct
/// through [`QuizCapture::new`] to keep that guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCapture {
    pub question: String,
    pub answer: String,
    pub explanation: String,
}

impl QuizCapture {
    /// Build a capture from raw page text.
    ///
    /// A missing or blank explanation falls back to [`NO_EXPLANATION`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IncompleteCapture`] if `question` or `answer` is
    /// blank after trimming.
    pub fn new(
        question: &str,
        answer: &str,
        explanation: Option<&str>,
    ) -> Result<Self, CoreError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(CoreError::IncompleteCapture { field: "question" });
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(CoreError::IncompleteCapture { field: "answer" });
        }
        let explanation = explanation
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(NO_EXPLANATION);

        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            explanation: explanation.to_string(),
        })
    }

    /// Render the capture as the text block appended to the target document.
    #[must_use]
    pub fn to_entry(&self) -> String {
        format!(
            "Question: {}\nAnswer: {}\nExplanation: {}\n\n",
            self.question, self.answer, self.explanation
        )
    }
}
