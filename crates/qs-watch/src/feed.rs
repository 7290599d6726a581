//! Structural change feed.
//!
//! Each [`MutationBatch`] is one notification from the page: the records of
//! what was inserted, plus a snapshot of the document after the change.

use serde::{Deserialize, Serialize};
use serde_jsonlines::AsyncJsonLinesReader;
use thiserror::Error;
use tokio::io::AsyncBufRead;
use tokio::sync::mpsc;

use crate::page::PageNode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    #[serde(default)]
    pub added_nodes: Vec<PageNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationBatch {
    #[serde(default)]
    pub records: Vec<MutationRecord>,
    pub document: PageNode,
}

impl MutationBatch {
    /// Batch with a single record inserting `added`.
    #[must_use]
    pub fn inserted(added: PageNode, document: PageNode) -> Self {
        Self {
            records: vec![MutationRecord {
                added_nodes: vec![added],
            }],
            document,
        }
    }

    /// Whether any record in the batch inserted nodes.
    #[must_use]
    pub fn has_added_nodes(&self) -> bool {
        self.records.iter().any(|r| !r.added_nodes.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("change feed I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Forward JSON Lines batches from `reader` into `tx`.
///
/// Lines that are not valid batches are logged and skipped. Stops at end of
/// input or when the receiver is dropped. Returns the number of batches sent.
///
/// # Errors
///
/// Returns [`FeedError::Io`] if the underlying reader fails.
pub async fn forward_jsonl<R>(reader: R, tx: mpsc::Sender<MutationBatch>) -> Result<usize, FeedError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = AsyncJsonLinesReader::new(reader);
    let mut sent = 0;
    loop {
        match lines.read::<MutationBatch>().await {
            Ok(Some(batch)) => {
                if tx.send(batch).await.is_err() {
                    tracing::debug!("watcher stopped; closing change feed");
                    break;
                }
                sent += 1;
            }
            Ok(None) => break,
            Err(error) if is_malformed_line(&error) => {
                tracing::warn!(%error, "skipping malformed change feed line");
            }
            Err(error) => return Err(error.into()),
        }
    }
    Ok(sent)
}

// Blank and truncated lines surface as `UnexpectedEof`, bad syntax as
// `InvalidData`; both wrap the decoder error.
fn is_malformed_line(error: &std::io::Error) -> bool {
    error
        .get_ref()
        .is_some_and(|inner| inner.is::<serde_json::Error>())
}
