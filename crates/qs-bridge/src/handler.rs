use async_trait::async_trait;
use qs_core::{BridgeRequest, SaveResponse};

/// Privileged side of the bridge.
///
/// Implementations must turn every failure into `SaveResponse::failed`; the
/// bridge has no error channel of its own.
#[async_trait]
pub trait SaveHandler: Send + Sync {
    async fn handle(&self, request: BridgeRequest) -> SaveResponse;
}
