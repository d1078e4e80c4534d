//! Seedable RNG wrapper used for world generation.
//!
//! # Determinism strategy
//!
//! The swarm owns exactly one `SimRng`.  Every random draw (rescuer offsets,
//! speeds, placeholder ETAs) comes from it in a fixed order, so a fixed seed
//! reproduces the same rescuers on every run and across resets.  Without a
//! seed the RNG is drawn from OS entropy and every episode looks different.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for rescuer generation.
///
/// Used only from the single thread that owns the swarm.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is given, `from_entropy()` otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Uniform draw from `[lo, hi)`; returns `lo` when the range is empty.
    #[inline]
    pub fn uniform(&mut self, [lo, hi]: [f64; 2]) -> f64 {
        if hi > lo { self.0.gen_range(lo..hi) } else { lo }
    }

    /// Uniform draw from `[-half, half]`.
    #[inline]
    pub fn symmetric(&mut self, half: f64) -> f64 {
        if half > 0.0 { self.0.gen_range(-half..=half) } else { 0.0 }
    }
}
