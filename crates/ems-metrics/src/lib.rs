//! `ems-metrics` — from replications to a fitness score.
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`summary`]  | `ReplicationMetrics`, `Metrics`, `aggregate`, median/coverage |
//! | [`evaluate`] | `evaluate_policy`, `evaluate_replications`, `run_replication`, `fitness_function` |
//! | [`csv`]      | `MetricsCsvWriter` (one row per replication)                  |
//! | [`error`]    | `MetricsError`, `MetricsResult<T>`                            |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs replications on Rayon's thread pool.  Results are    |
//! |            | identical to the sequential path.                         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ems_metrics::fitness_function;
//!
//! let policy = [6, 13, 1, 10, 16];
//! let metrics = fitness_function(&policy, 4, 16, 17, 3, 31)?;
//! println!("{}", metrics.median_response_time);
//! ```

pub mod csv;
pub mod error;
pub mod evaluate;
pub mod summary;


pub use csv::MetricsCsvWriter;
pub use error::{MetricsError, MetricsResult};
pub use evaluate::{
    PolicyRequest, evaluate_policy, evaluate_replications, fitness_function, run_replication,
};
pub use summary::{EMPTY_MEDIAN, Metrics, ReplicationMetrics, aggregate, coverage, median};
