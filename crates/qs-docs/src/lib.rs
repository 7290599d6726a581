//! # qs-docs
//!
//! Persistence side of quiz-saver: the document API client, the persisted
//! target-document reference, and the privileged save path.
//!
//! A save is two independent network phases, each acquiring its own token:
//! 1. [`DocumentLocator::resolve_target`] returns the persisted document id,
//!    or creates the document and persists its id exactly once
//! 2. [`AppendEngine::append_capture`] fetches the document for its end
//!    offset and inserts the formatted capture there
//!
//! [`SaveService`] wraps both behind the bridge's
//! [`SaveHandler`](qs_bridge::SaveHandler) contract.

pub mod append;
pub mod client;
pub mod error;
pub mod locator;
pub mod model;
pub mod service;
pub mod store;

mod http;

pub use append::AppendEngine;
pub use client::DocsClient;
pub use error::{ApiError, DocsError, StoreError};
pub use locator::DocumentLocator;
pub use service::SaveService;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, TARGET_DOC_KEY};
