//! Operation counters for DEPQ containers.
//!
//! Compiled only with the `metrics` feature. Counters are plain integers
//! updated inside the container's critical section, so they need no
//! atomics; [`Depq::metrics`](crate::Depq::metrics) copies them out under
//! the lock.

use std::fmt;

/// Counters describing how a DEPQ has been driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct DepqMetrics {
    /// Entries added by `insert`, `addfirst` or `addlast`.
    pub inserts: u64,
    /// Entries placed directly at the front (new highest priority).
    pub front_pushes: u64,
    /// Entries placed directly at the back (new lowest priority).
    pub back_pushes: u64,
    /// Insertions that needed the rotating search.
    pub rotations: u64,
    /// Total elements stepped over by rotations (search + restore).
    pub rotate_steps: u64,
    /// Entries dropped to honor `max_length`.
    pub evictions: u64,
    /// Entries returned by `popfirst` / `poplast`.
    pub pops: u64,
    /// Entries removed by identity (`remove`, `elim`, ...).
    pub removals: u64,
    /// `addlast` calls ignored because the queue was full.
    pub rejected: u64,
}

impl DepqMetrics {
    /// Average rotation steps per rotating insertion.
    pub fn mean_rotate_steps(&self) -> f64 {
        if self.rotations == 0 {
            0.0
        } else {
            self.rotate_steps as f64 / self.rotations as f64
        }
    }
}

impl fmt::Display for DepqMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepqMetrics {{ inserts: {}, front_pushes: {}, back_pushes: {}, rotations: {}, \
             rotate_steps: {} ({:.2}/rotation), evictions: {}, pops: {}, removals: {}, rejected: {} }}",
            self.inserts,
            self.front_pushes,
            self.back_pushes,
            self.rotations,
            self.rotate_steps,
            self.mean_rotate_steps(),
            self.evictions,
            self.pops,
            self.removals,
            self.rejected
        )
    }
}
