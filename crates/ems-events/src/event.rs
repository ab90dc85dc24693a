//! The two event kinds the engine resolves.

use ems_core::{AmbulanceId, GeoPoint, SimTime};

/// An emergency call, produced by the call generator and consumed exactly
/// once by the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallEvent {
    /// Arrival time.
    pub time:               SimTime,
    /// On-scene treatment duration in minutes.
    pub treatment_minutes:  f64,
    pub location:           GeoPoint,
    /// Whether the patient is taken to the nearest hospital afterwards.
    pub hospital_required:  bool,
}

/// A dispatched ambulance finishing its full cycle and returning to service.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreeEvent {
    pub time:      SimTime,
    pub ambulance: AmbulanceId,
}

/// A pending event.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    Call(CallEvent),
    Free(FreeEvent),
}

impl Event {
    #[inline]
    pub fn time(&self) -> SimTime {
        match self {
            Event::Call(c) => c.time,
            Event::Free(f) => f.time,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Call(_) => "call",
            Event::Free(_) => "free",
        }
    }
}

impl From<CallEvent> for Event {
    fn from(c: CallEvent) -> Self {
        Event::Call(c)
    }
}

impl From<FreeEvent> for Event {
    fn from(f: FreeEvent) -> Self {
        Event::Free(f)
    }
}
