#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use qs_auth::{AuthError, BearerToken, TokenProvider};
use qs_docs::{DocsClient, KeyValueStore, MemoryStore, SaveService};
use serde_json::json;
use wiremock::MockServer;

pub const TOKEN: &str = "ya29.test-token";

/// Hands out the same token and counts how often it was asked.
#[derive(Default)]
pub struct CountingTokens {
    pub calls: AtomicUsize,
}

impl CountingTokens {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for CountingTokens {
    async fn get_token(&self) -> Result<BearerToken, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(BearerToken::new(TOKEN))
    }
}

/// Identity provider that always refuses.
pub struct DenyingTokens;

#[async_trait]
impl TokenProvider for DenyingTokens {
    async fn get_token(&self) -> Result<BearerToken, AuthError> {
        Err(AuthError::Denied("user cancelled consent".into()))
    }
}

pub fn client(server: &MockServer) -> DocsClient {
    DocsClient::new(&server.uri())
}

pub fn service(
    server: &MockServer,
    tokens: Arc<dyn TokenProvider>,
    store: Arc<MemoryStore>,
) -> SaveService {
    let store: Arc<dyn KeyValueStore> = store;
    SaveService::from_parts(client(server), tokens, store, "Gemini Quiz Questions")
}

/// Minimal document body whose last block ends at `end_index`.
pub fn document_json(id: &str, end_index: u64) -> serde_json::Value {
    json!({
        "documentId": id,
        "title": "Gemini Quiz Questions - 2026-10-16",
        "body": {
            "content": [
                { "endIndex": 1, "sectionBreak": {} },
                { "startIndex": 1, "endIndex": end_index, "paragraph": { "elements": [] } }
            ]
        }
    })
}
