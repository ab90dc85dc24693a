//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EmsError` as one
//! variant via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

use crate::{AmbulanceId, StationId};

/// The top-level error type for `ems-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EmsError {
    #[error("ambulance {0} not found")]
    AmbulanceNotFound(AmbulanceId),

    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ems-*` crates.
pub type EmsResult<T> = Result<T, EmsError>;
