use std::sync::Arc;

use qs_auth::TokenProvider;
use qs_core::{QuizCapture, TargetDocumentRef};

use crate::client::DocsClient;
use crate::error::DocsError;
use crate::model::EditRequest;

/// Appends formatted captures to the end of the target document.
///
/// Read-then-write with no lock across the gap: an edit made by someone else
/// between the fetch and the insert can shift the real end offset.
pub struct AppendEngine {
    client: DocsClient,
    tokens: Arc<dyn TokenProvider>,
}

impl AppendEngine {
    #[must_use]
    pub fn new(client: DocsClient, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { client, tokens }
    }

    /// Insert `capture` just before the document's trailing structural marker.
    ///
    /// Acquires its own token, fetches the document to find the end offset,
    /// then issues one batched insert. Success means the edit call returned a
    /// success status; nothing is read back.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Credential`] before any request if no token is
    /// issued, [`DocsError::DocumentUnavailable`] if the fetch fails,
    /// [`DocsError::EmptyDocument`] if there is nothing to anchor on, and
    /// [`DocsError::EditRejected`] if the edit fails.
    pub async fn append_capture(
        &self,
        target: &TargetDocumentRef,
        capture: &QuizCapture,
    ) -> Result<(), DocsError> {
        let token = self.tokens.get_token().await?;

        let document = self
            .client
            .get_document(&token, &target.id)
            .await
            .map_err(DocsError::DocumentUnavailable)?;
        let index = document
            .append_index()
            .ok_or_else(|| DocsError::EmptyDocument {
                id: target.id.clone(),
            })?;

        let text = capture.to_entry();
        tracing::debug!(document_id = %target.id, index, chars = text.chars().count(), "inserting capture");
        self.client
            .batch_update(&token, &target.id, vec![EditRequest::insert_text(index, text)])
            .await
            .map_err(DocsError::EditRejected)?;

        tracing::info!(document_id = %target.id, "appended capture");
        Ok(())
    }
}
