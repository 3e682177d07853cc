//! The shared best-score atomic, published with take-max semantics.

use std::sync::atomic::{AtomicI64, Ordering};

/// Sentinel the global best starts at — `-∞` in practice.
pub const SENTINEL_BEST_SCORE: i64 = -9999;

/// A lock-free running maximum, read by every worker's upper-bound prune
/// and written by every worker's terminal-node improvement.
///
/// Uses an explicit load/compare/compare_exchange loop over the `fetch_max`
/// combinator, kept for clarity at the one call site that needs it.
pub struct GlobalBest(AtomicI64);

impl GlobalBest {
    pub fn new(initial: i64) -> GlobalBest {
        GlobalBest(AtomicI64::new(initial))
    }

    /// Relaxed load — a stale-low read only costs a few extra expansions,
    /// never an incorrect prune, because the bound inequality is monotone.
    #[inline]
    pub fn load(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Publish `candidate` if it improves on the current value. Safe to
    /// call concurrently from any number of workers.
    pub fn publish(&self, candidate: i64) {
        let mut current = self.0.load(Ordering::Relaxed);
        while candidate > current {
            match self.0.compare_exchange_weak(current, candidate, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }
}
