//! Reducing observations to metrics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ems_sim::RunObservations;

/// Median reported when a replication has no travel samples.
pub const EMPTY_MEDIAN: f64 = 999.0;

/// Metrics of one replication.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplicationMetrics {
    /// Median of the recorded travel legs, or [`EMPTY_MEDIAN`].
    pub median_response_time: f64,
    /// Share of travel legs at or below the coverage threshold.
    pub coverage:             f64,
    pub lost_calls:           u64,
}

impl ReplicationMetrics {
    pub fn from_observations(obs: &RunObservations, coverage_threshold_minutes: f64) -> Self {
        Self {
            median_response_time: median(&obs.travel_times).unwrap_or(EMPTY_MEDIAN),
            coverage:             coverage(&obs.travel_times, coverage_threshold_minutes),
            lost_calls:           obs.lost_calls,
        }
    }
}

/// Evaluation result: per-field mean over replications.
///
/// Serialises with exactly the field names `median_response_time`,
/// `coverage` and `lost_calls`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub median_response_time: f64,
    pub coverage:             f64,
    pub lost_calls:           f64,
}

impl Metrics {
    /// What an evaluation with no data reports.
    pub const EMPTY: Metrics = Metrics {
        median_response_time: EMPTY_MEDIAN,
        coverage:             0.0,
        lost_calls:           0.0,
    };

    /// The three metrics keyed by field name.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("median_response_time", self.median_response_time),
            ("coverage", self.coverage),
            ("lost_calls", self.lost_calls),
        ])
    }
}

/// Mean of each field.  An empty slice gives [`Metrics::EMPTY`].
pub fn aggregate(replications: &[ReplicationMetrics]) -> Metrics {
    if replications.is_empty() {
        return Metrics::EMPTY;
    }
    let n = replications.len() as f64;
    let (median, coverage, lost) = replications.iter().fold((0.0, 0.0, 0.0), |(m, c, l), r| {
        (m + r.median_response_time, c + r.coverage, l + r.lost_calls as f64)
    });
    Metrics {
        median_response_time: median / n,
        coverage:             coverage / n,
        lost_calls:           lost / n,
    }
}

/// Median with the mean of the two middle values for even lengths.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Fraction of samples `<= threshold`; 0 for no samples.
pub fn coverage(samples: &[f64], threshold: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let covered = samples.iter().filter(|&&s| s <= threshold).count();
    covered as f64 / samples.len() as f64
}
