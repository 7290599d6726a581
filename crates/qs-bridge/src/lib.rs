//! # qs-bridge
//!
//! Transport between the page-side watcher and the privileged component that
//! holds credentials and performs network calls.
//!
//! Every request gets exactly one [`SaveResponse`](qs_core::SaveResponse),
//! even when the server side is gone, so the watcher can always release its
//! latch. Nothing is retried.

mod channel;
mod handler;

pub use channel::{BridgeClient, BridgeServer, channel};
pub use handler::SaveHandler;
