//! Deterministic per-replication RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each replication gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (replication * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive replication indices across the seed space.
//! This means:
//!
//! - Replications never share RNG state, so they can run on any thread in
//!   any order and still produce the same numbers.
//! - Changing the replication count does not disturb the streams of the
//!   replications that were already there.
//! - Nothing reads a process-wide RNG; two evaluations with the same seed
//!   are bit-identical.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation RNG: one per replication, owned by whoever drives it.
///
/// Used only in single-threaded contexts.  Parallel replications each build
/// their own with [`SimRng::for_replication`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the evaluation's global seed and a
    /// replication index.
    pub fn for_replication(global_seed: u64, replication: usize) -> Self {
        let seed = global_seed ^ (replication as u64).wrapping_mul(MIXING_CONSTANT);
        SimRng::new(seed)
    }

    /// Derive a child `SimRng` with a different seed offset.
    ///
    /// Used to split one replication's stream between the call generator and
    /// the engine so that adding draws to one does not shift the other.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand_distr` distribution
    /// types (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
