//! The hub: registry ownership and the periodic telemetry cycle
//!
//! One hub instance is the in-process authority over the live participant
//! set for this server. A periodic trigger (the binary's interval timer)
//! drives `cloud_cycle`, which walks the registry once and fans the derived
//! state out three ways: a fire-and-forget leaderboard update, an atomic
//! status publish for local pollers, and a synchronous player-count report
//! to the fleet registry.

use crate::cloud::CloudClient;
use crate::registry::ClientRegistry;
use crate::snapshot::{aggregate, HubSnapshot};
use crate::status::{StatusPayload, StatusPublisher};
use log::{debug, error};
use std::sync::Arc;

/// Owns the session registry and the telemetry publication paths
pub struct Hub {
    clients: ClientRegistry,
    cloud: Arc<dyn CloudClient>,
    status: StatusPublisher,
}

impl Hub {
    pub fn new(cloud: Arc<dyn CloudClient>) -> Self {
        Self {
            clients: ClientRegistry::new(),
            cloud,
            status: StatusPublisher::new(),
        }
    }

    /// Read access to the live participant set
    pub fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    /// Mutable access for the connection and gameplay paths
    ///
    /// All registry mutation funnels through the hub's single control path;
    /// the telemetry cycle itself never mutates entries.
    pub fn clients_mut(&mut self) -> &mut ClientRegistry {
        &mut self.clients
    }

    /// Hands out a status handle for concurrent pollers
    ///
    /// Reads through the returned handle are wait-free and safe to perform
    /// from any task while cycles are running.
    pub fn status_reader(&self) -> StatusPublisher {
        self.status.clone()
    }

    /// Runs one aggregation and publication cycle
    ///
    /// Traverses the registry once, then:
    /// 1. dispatches the score table to the leaderboard without waiting —
    ///    the spawned task logs its own failure since nothing awaits it;
    /// 2. atomically publishes the serialized status payload;
    /// 3. reports the client count to the fleet registry and waits for it,
    ///    accepting that call's latency as part of the cycle period.
    ///
    /// No failure on any of the three paths aborts the cycle or the next
    /// one; a failed submission is simply superseded by the next cycle's
    /// full snapshot. Two slow leaderboard dispatches can complete out of
    /// order and the later-finishing one wins at the service, even if it
    /// carried the older snapshot.
    pub async fn cloud_cycle(&self) {
        debug!("running cloud update cycle");

        let HubSnapshot {
            client_count,
            scores,
        } = aggregate(&self.clients);

        let cloud = Arc::clone(&self.cloud);
        tokio::spawn(async move {
            if let Err(e) = cloud.update_leaderboard(scores).await {
                error!("leaderboard update failed: {}", e);
            }
        });

        self.status.publish(StatusPayload {
            clients: client_count,
        });

        if let Err(e) = self.cloud.update_server_count(client_count).await {
            error!("server count update failed: {}", e);
        }
    }
}
