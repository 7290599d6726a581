use std::sync::Arc;

use qs_auth::TokenProvider;
use qs_core::TargetDocumentRef;

use crate::client::DocsClient;
use crate::error::DocsError;
use crate::store::{KeyValueStore, TARGET_DOC_KEY};

/// Resolves the single target document, creating it on first use.
pub struct DocumentLocator {
    client: DocsClient,
    tokens: Arc<dyn TokenProvider>,
    store: Arc<dyn KeyValueStore>,
    title_prefix: String,
}

impl DocumentLocator {
    #[must_use]
    pub fn new(
        client: DocsClient,
        tokens: Arc<dyn TokenProvider>,
        store: Arc<dyn KeyValueStore>,
        title_prefix: impl Into<String>,
    ) -> Self {
        Self {
            client,
            tokens,
            store,
            title_prefix: title_prefix.into(),
        }
    }

    /// Return the persisted target, or create and persist a new document.
    ///
    /// The fast path makes no network call. On the slow path nothing is
    /// persisted unless creation succeeds, so a failed attempt is simply
    /// retried from scratch on the next save.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Credential`] if no token can be acquired,
    /// [`DocsError::DocumentUnavailable`] if creation fails, and
    /// [`DocsError::Store`] if the persisted state cannot be read or written.
    pub async fn resolve_target(&self) -> Result<TargetDocumentRef, DocsError> {
        if let Some(id) = self.store.get(TARGET_DOC_KEY)?
            && !id.is_empty()
        {
            tracing::debug!(document_id = %id, "using persisted target document");
            return Ok(TargetDocumentRef::new(id));
        }

        let token = self.tokens.get_token().await?;
        let title = self.document_title();
        let document = self
            .client
            .create_document(&token, &title)
            .await
            .map_err(DocsError::DocumentUnavailable)?;

        self.store.set(TARGET_DOC_KEY, &document.document_id)?;
        tracing::info!(document_id = %document.document_id, title = %document.title, "created target document");
        Ok(TargetDocumentRef::new(document.document_id))
    }

    /// `"{prefix} - {YYYY-MM-DD}"` using the local creation date.
    fn document_title(&self) -> String {
        document_title(&self.title_prefix, chrono::Local::now().date_naive())
    }
}

pub(crate) fn document_title(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{prefix} - {}", date.format("%Y-%m-%d"))
}
