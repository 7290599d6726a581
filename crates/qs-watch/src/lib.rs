//! # qs-watch
//!
//! Page side of quiz-saver. Watches a structural change feed for an answered
//! question, extracts it once, asks the user, and forwards accepted captures
//! over the bridge.

pub mod extract;
pub mod feed;
pub mod machine;
pub mod page;
pub mod ui;
pub mod watcher;

pub use extract::{Extraction, QuizSelectors};
pub use feed::{FeedError, MutationBatch, MutationRecord, forward_jsonl};
pub use machine::{ExtractionMachine, MachineState};
pub use page::{Located, PageNode, Selector, SelectorError};
pub use ui::{AutoConsentUi, ChannelUi, Consent, ConsentUi, PromptSlot, TerminalUi, UiEvent};
pub use watcher::{WatchReport, Watcher};
