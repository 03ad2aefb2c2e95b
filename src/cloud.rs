//! Interface to the external cloud service and its failure taxonomy
//!
//! The cloud service keeps a persistent leaderboard per server instance and
//! a fleet-wide directory of player counts. Both calls are best effort from
//! the hub's point of view: failures are logged with enough context to
//! diagnose and then dropped, because the next cycle resubmits the full
//! current state anyway.

use async_trait::async_trait;
use log::info;
use std::collections::HashMap;
use thiserror::Error;

/// Why a cloud operation failed
///
/// Every variant is terminal where it occurs: callers log it and move on,
/// nothing here ever aborts an aggregation cycle.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The outgoing payload could not be encoded
    #[error("failed to encode {operation} payload: {source}")]
    Serialization {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The service was unreachable or rejected the request
    #[error("cloud rejected {operation}: {reason}")]
    Service {
        operation: &'static str,
        reason: String,
    },
}

/// Client for the external leaderboard and fleet-registry service
///
/// `update_leaderboard` replaces the stored leaderboard snapshot for this
/// instance wholesale; it is not a delta. `update_server_count` reports the
/// instance's live player count to the fleet directory. Implementations are
/// shared across tasks, so they take `&self` and must be `Send + Sync`.
#[async_trait]
pub trait CloudClient: Send + Sync {
    async fn update_leaderboard(&self, scores: HashMap<String, i32>) -> Result<(), CloudError>;

    async fn update_server_count(&self, count: usize) -> Result<(), CloudError>;
}

/// Offline cloud client that logs what would have been sent
///
/// The default wiring when no real cloud service is configured. Useful for
/// local servers and for watching the telemetry cycle in the log.
#[derive(Debug, Default)]
pub struct LoggingCloud;

#[async_trait]
impl CloudClient for LoggingCloud {
    async fn update_leaderboard(&self, scores: HashMap<String, i32>) -> Result<(), CloudError> {
        info!("leaderboard update: {} scored players", scores.len());
        Ok(())
    }

    async fn update_server_count(&self, count: usize) -> Result<(), CloudError> {
        info!("fleet registry update: {} clients", count);
        Ok(())
    }
}
