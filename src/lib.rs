//! # Game Hub Library
//!
//! Session registry and telemetry publication core for one multiplayer
//! server instance. The hub holds the authoritative list of connected
//! participants and periodically derives aggregate state from it — a
//! player count and a per-name score table — publishing both without
//! stalling the server's tick cadence.
//!
//! ## Publication paths
//!
//! Each cycle fans out three ways:
//! - **Leaderboard**: the score table goes to the external cloud service
//!   on a spawned task the cycle never waits for. Failures are logged in
//!   the task and absorbed; the next cycle resubmits the full snapshot.
//! - **Status**: the client count is serialized and swapped into a
//!   lock-free store that concurrent status pollers read wait-free.
//! - **Fleet registry**: the client count is reported synchronously; that
//!   call's latency is accepted as part of the cycle period.
//!
//! ## Module Organization
//!
//! - [`registry`]: the ordered participant collection (insert, O(1)
//!   remove, insertion-order traversal) and the per-connection entry type.
//! - [`snapshot`]: the pure single-pass aggregation from registry
//!   traversal to publishable snapshot.
//! - [`status`]: the atomically replaceable serialized status payload.
//! - [`cloud`]: the cloud service interface, its error taxonomy, and the
//!   offline logging implementation.
//! - [`hub`]: ties the pieces together and runs the periodic cycle.
//!
//! ## Concurrency
//!
//! Registry mutation and aggregation share one control path, so a cycle
//! never races gameplay over entry state. The only long-lived shared state
//! is the status store, which is a copy-on-write pointer swap: one writer,
//! any number of wait-free readers, no tearing.

pub mod cloud;
pub mod hub;
pub mod registry;
pub mod snapshot;
pub mod status;
