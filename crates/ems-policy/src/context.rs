//! Read-only simulation state passed to every policy callback.

use ems_core::SimTime;
use ems_fleet::{FleetState, ServiceArea};

/// A read-only snapshot handed to [`Dispatcher`][crate::Dispatcher] and
/// [`RepositionPolicy`][crate::RepositionPolicy].
///
/// Built by ems-sim for each decision.  Policies never mutate the fleet; the
/// run applies whatever they return.
pub struct DecisionContext<'a> {
    /// Time of the event being resolved.
    pub now: SimTime,

    /// Stations, hospitals, home bases.
    pub area: &'a ServiceArea,

    /// Current per-unit availability and location.
    pub fleet: &'a FleetState,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(now: SimTime, area: &'a ServiceArea, fleet: &'a FleetState) -> Self {
        Self { now, area, fleet }
    }
}
