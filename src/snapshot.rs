//! Aggregation pass deriving publishable telemetry from the live registry
//!
//! A single forward walk over the registry produces everything the hub
//! publishes per cycle: the count of network-connected players and a
//! name-to-score table for the leaderboard. The pass is pure; callers hand
//! it any iterator of entries and get a fresh snapshot back.

use crate::registry::{ClientEntry, ClientKind};
use std::collections::HashMap;

/// Derived state from one aggregation pass
///
/// Built fresh each cycle and fully supersedes the previous snapshot; there
/// is no incremental merge. `client_count` covers socket clients only, and
/// `scores` holds only strictly positive socket-client scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubSnapshot {
    pub client_count: usize,
    pub scores: HashMap<String, i32>,
}

/// Walks the given entries once and builds a [`HubSnapshot`]
///
/// Bots never count and never reach the score table. Player names are not
/// unique, so the count cannot be recovered from the table; it is tallied
/// separately. On a duplicate name the occurrence later in traversal order
/// wins, regardless of which score is larger. An empty input yields the
/// zero snapshot, which is valid, not an error.
pub fn aggregate<'a, I>(entries: I) -> HubSnapshot
where
    I: IntoIterator<Item = &'a ClientEntry>,
{
    let mut snapshot = HubSnapshot::default();

    for entry in entries {
        if entry.kind == ClientKind::Socket {
            snapshot.client_count += 1;
            if entry.player.score > 0 {
                snapshot
                    .scores
                    .insert(entry.player.name.clone(), entry.player.score);
            }
        }
    }

    snapshot
}
