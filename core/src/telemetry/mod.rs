//! telemetry/mod.rs
//! Per-session counters and immutable snapshots.
//!
//! - Counters are owned by the session and mutated only on successful calls.
//! - Snapshots are `Copy` values, safe to hand out at any time.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
