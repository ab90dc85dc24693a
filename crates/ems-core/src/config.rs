//! Top-level evaluation configuration.

use crate::time::MINUTES_PER_DAY;
use crate::{EmsError, EmsResult};

/// Settings shared by every replication of a policy evaluation.
///
/// `Default` reproduces the reference setup: seed 31, three replications, a
/// seven-day warm-up, a nine-minute coverage threshold and a 35-minute mean
/// hospital hand-off.  Applications typically load this from JSON (with the
/// `serde` feature) and override individual fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical metrics.
    pub seed: u64,

    /// Number of independent replications averaged into one fitness score.
    pub iterations: usize,

    /// Calls arriving before this many minutes are simulated but not
    /// measured (no travel samples, no lost-call counts).
    pub warmup_minutes: f64,

    /// A travel-time sample at or below this value counts as "covered".
    pub coverage_threshold_minutes: f64,

    /// Mean of the exponential hospital hand-off duration.
    pub handoff_mean_minutes: f64,

    /// Worker thread count for parallel replications.  `None` uses Rayon's
    /// global pool.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                       31,
            iterations:                 3,
            warmup_minutes:             7.0 * MINUTES_PER_DAY,
            coverage_threshold_minutes: 9.0,
            handoff_mean_minutes:       35.0,
            num_threads:                None,
        }
    }
}

impl SimConfig {
    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> EmsResult<()> {
        if self.iterations == 0 {
            return Err(EmsError::Config("iterations must be at least 1".into()));
        }
        if !self.warmup_minutes.is_finite() || self.warmup_minutes < 0.0 {
            return Err(EmsError::Config(format!(
                "warmup_minutes must be finite and non-negative, got {}",
                self.warmup_minutes
            )));
        }
        if !self.coverage_threshold_minutes.is_finite() {
            return Err(EmsError::Config(format!(
                "coverage_threshold_minutes must be finite, got {}",
                self.coverage_threshold_minutes
            )));
        }
        if !(self.handoff_mean_minutes.is_finite() && self.handoff_mean_minutes > 0.0) {
            return Err(EmsError::Config(format!(
                "handoff_mean_minutes must be positive, got {}",
                self.handoff_mean_minutes
            )));
        }
        if self.num_threads == Some(0) {
            return Err(EmsError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
