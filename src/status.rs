//! Lock-free publication of the hub's serialized status payload
//!
//! Status queries arrive frequently and from arbitrary tasks, so the
//! current payload lives behind an atomically swappable pointer rather
//! than a lock shared with the aggregation path. The cycle serializes a
//! complete payload and swaps it in; readers grab the current pointer
//! without ever blocking the writer or each other.

use arc_swap::ArcSwap;
use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The record exposed to status queries
///
/// Kept deliberately small; the wire field is named `clients` for
/// compatibility with the fleet tooling that polls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub clients: usize,
}

/// Single-writer, multi-reader store for the serialized status payload
///
/// `publish` replaces the visible payload atomically; a concurrent `read`
/// observes either the previous complete payload or the new one, never a
/// partial write. Cloning the publisher yields another handle to the same
/// store, so readers can be handed their own copy.
#[derive(Clone)]
pub struct StatusPublisher {
    current: Arc<ArcSwap<Vec<u8>>>,
}

impl StatusPublisher {
    /// Creates a publisher whose initial payload reports zero clients
    pub fn new() -> Self {
        let initial = serde_json::to_vec(&StatusPayload { clients: 0 })
            .unwrap_or_else(|_| b"{\"clients\":0}".to_vec());
        Self {
            current: Arc::new(ArcSwap::from_pointee(initial)),
        }
    }

    /// Serializes and atomically publishes a new status payload
    ///
    /// On a serialization failure the error is logged and the previously
    /// published payload stays visible; a partial payload is never stored.
    pub fn publish(&self, payload: StatusPayload) {
        match serde_json::to_vec(&payload) {
            Ok(bytes) => self.current.store(Arc::new(bytes)),
            Err(e) => error!("failed to serialize status payload: {}", e),
        }
    }

    /// Returns the most recently published payload
    ///
    /// Wait-free: never blocks `publish` or other readers. Before the first
    /// publish this is the initial zero-client payload.
    pub fn read(&self) -> Arc<Vec<u8>> {
        self.current.load_full()
    }
}

impl Default for StatusPublisher {
    fn default() -> Self {
        Self::new()
    }
}
