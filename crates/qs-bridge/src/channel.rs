use std::sync::Arc;

use qs_core::{BridgeRequest, SaveResponse};
use tokio::sync::{mpsc, oneshot};

use crate::handler::SaveHandler;

struct Envelope {
    request: BridgeRequest,
    reply: oneshot::Sender<SaveResponse>,
}

/// Page-side handle. Cheap to clone.
#[derive(Clone)]
pub struct BridgeClient {
    tx: mpsc::Sender<Envelope>,
}

/// Privileged-side receiver. Drive it with [`BridgeServer::serve`].
pub struct BridgeServer {
    rx: mpsc::Receiver<Envelope>,
}

/// Create a connected client/server pair.
#[must_use]
pub fn channel(capacity: usize) -> (BridgeClient, BridgeServer) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (BridgeClient { tx }, BridgeServer { rx })
}

impl BridgeClient {
    /// Send one request and wait for its response.
    ///
    /// Never fails: a missing server or a dropped reply becomes a failed
    /// response.
    pub async fn send(&self, request: BridgeRequest) -> SaveResponse {
        let (reply, response) = oneshot::channel();
        if self.tx.send(Envelope { request, reply }).await.is_err() {
            tracing::warn!("bridge request sent with no saver listening");
            return SaveResponse::failed("saver is not running");
        }
        response.await.unwrap_or_else(|_| {
            tracing::warn!("saver dropped a bridge request without responding");
            SaveResponse::failed("saver dropped the request without responding")
        })
    }
}

impl BridgeServer {
    /// Handle requests one at a time until every client is dropped.
    ///
    /// Returns the number of requests handled.
    pub async fn serve<H>(mut self, handler: Arc<H>) -> usize
    where
        H: SaveHandler + ?Sized,
    {
        let mut handled = 0;
        while let Some(Envelope { request, reply }) = self.rx.recv().await {
            let response = handler.handle(request).await;
            if reply.send(response).is_err() {
                tracing::debug!("bridge client went away before the response");
            }
            handled += 1;
        }
        handled
    }
}
