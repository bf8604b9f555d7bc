//! Injectable randomness seam for pool selection.
//!
//! The engine picks greeting and fallback strings pseudo-randomly from
//! fixed pools. Routing the pick through a trait lets tests force a
//! deterministic index.

use rand::Rng;

/// Source of uniform pseudo-random indices.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production randomness backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}
