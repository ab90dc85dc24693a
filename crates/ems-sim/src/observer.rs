//! Run observer trait for progress reporting and data collection.

use ems_core::{AmbulanceId, SimTime, StationId};
use ems_events::CallEvent;
use ems_policy::Response;

use crate::RunObservations;

/// Callbacks invoked by [`SimulationRun::step`][crate::SimulationRun::step]
/// as events resolve.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  `measured` is `true` when the call arrived
/// at or after the warm-up boundary.
///
/// # Example — lost-call logger
///
/// ```rust,ignore
/// struct LostCalls(Vec<SimTime>);
///
/// impl RunObserver for LostCalls {
///     fn on_call_lost(&mut self, call: &CallEvent, measured: bool) {
///         if measured {
///             self.0.push(call.time);
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// A unit was sent.  `response.completes_at` is when its free event
    /// fires.
    fn on_dispatch(&mut self, _call: &CallEvent, _response: &Response, _measured: bool) {}

    /// No unit was available for `call`.
    fn on_call_lost(&mut self, _call: &CallEvent, _measured: bool) {}

    /// `ambulance` returned to service; `available` includes it.
    fn on_release(&mut self, _at: SimTime, _ambulance: AmbulanceId, _available: usize) {}

    /// `ambulance` was moved to `station` right after its release.
    fn on_reposition(&mut self, _at: SimTime, _ambulance: AmbulanceId, _station: StationId) {}

    /// Called once when the queue has drained.
    fn on_run_end(&mut self, _observations: &RunObservations) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
