//! Per-worker generator seeding
//!
//! Every worker builds its own `SmallRng` once, at parallel-region entry,
//! from a time-based value combined with its worker index. Generators are
//! never shared, so the sampling loop needs no locking.

use std::time::{SystemTime, UNIX_EPOCH};

/// Nanoseconds since the Unix epoch
///
/// Returns 0 if the system clock reads earlier than the epoch.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Seed for worker `worker` given a shared base value
///
/// `SmallRng::seed_from_u64` scrambles its input through SplitMix64, so
/// the plain XOR here is enough for adjacent workers to follow unrelated
/// streams even when launched within the same clock tick.
#[inline]
pub fn worker_seed(base: u64, worker: usize) -> u64 {
    base ^ worker as u64
}
