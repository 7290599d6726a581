//! Privileged boundary: turns bridge requests into saves and every outcome
//! into a [`SaveResponse`].

use std::sync::Arc;

use async_trait::async_trait;
use qs_auth::TokenProvider;
use qs_bridge::SaveHandler;
use qs_core::{BridgeRequest, QuizCapture, SaveResponse};

use crate::append::AppendEngine;
use crate::client::DocsClient;
use crate::error::DocsError;
use crate::locator::DocumentLocator;
use crate::store::KeyValueStore;

pub struct SaveService {
    locator: DocumentLocator,
    engine: AppendEngine,
}

impl SaveService {
    #[must_use]
    pub const fn new(locator: DocumentLocator, engine: AppendEngine) -> Self {
        Self { locator, engine }
    }

    /// Build the locator and append engine over one client, token source, and store.
    #[must_use]
    pub fn from_parts(
        client: DocsClient,
        tokens: Arc<dyn TokenProvider>,
        store: Arc<dyn KeyValueStore>,
        title_prefix: impl Into<String>,
    ) -> Self {
        Self::new(
            DocumentLocator::new(client.clone(), Arc::clone(&tokens), store, title_prefix),
            AppendEngine::new(client, tokens),
        )
    }

    #[must_use]
    pub const fn locator(&self) -> &DocumentLocator {
        &self.locator
    }

    /// Resolve the target document, then append `capture` to it. One attempt.
    ///
    /// # Errors
    ///
    /// Propagates any [`DocsError`] from the locator or the append engine.
    pub async fn save(&self, capture: &QuizCapture) -> Result<(), DocsError> {
        let target = self.locator.resolve_target().await?;
        self.engine.append_capture(&target, capture).await
    }
}

#[async_trait]
impl SaveHandler for SaveService {
    async fn handle(&self, request: BridgeRequest) -> SaveResponse {
        let BridgeRequest::SaveQuiz(capture) = request;
        match self.save(&capture).await {
            Ok(()) => SaveResponse::ok(),
            Err(error) => {
                tracing::warn!(%error, question = %capture.question, "save failed");
                SaveResponse::failed(error.to_string())
            }
        }
    }
}
