//! Error types for ems-metrics.

use thiserror::Error;

use ems_core::EmsError;
use ems_sim::SimError;

/// Errors that can occur while evaluating a policy or exporting results.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(transparent)]
    Core(#[from] EmsError),

    #[error("replication failed: {0}")]
    Sim(#[from] SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Alias for `Result<T, MetricsError>`.
pub type MetricsResult<T> = Result<T, MetricsError>;
