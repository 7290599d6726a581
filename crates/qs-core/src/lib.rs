//! # qs-core
//!
//! Core types shared across all quiz-saver crates:
//! - [`QuizCapture`]: the question/answer/explanation triple for one answered question
//! - [`TargetDocumentRef`]: identifier of the document every capture is appended to
//! - Bridge message contract between the page-side watcher and the privileged saver
//! - Cross-cutting error types

pub mod bridge;
pub mod capture;
pub mod document;
pub mod errors;

pub use bridge::{BridgeRequest, SaveResponse};
pub use capture::{NO_EXPLANATION, QuizCapture};
pub use document::TargetDocumentRef;
pub use errors::CoreError;
