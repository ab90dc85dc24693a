use ems_core::{AmbulanceId, EmsError, StationId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] EmsError),

    /// A free event named a unit the fleet does not have.  Only the run
    /// schedules free events, so this indicates corrupted state.
    #[error("free event for unknown ambulance {0}")]
    UnknownAmbulance(AmbulanceId),

    /// A reposition policy returned a station outside the service area.
    #[error("reposition target {0} is not a station of this area")]
    UnknownStation(StationId),
}

pub type SimResult<T> = Result<T, SimError>;
