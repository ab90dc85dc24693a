//! `SimulationRun` and its event loop.

use ems_core::{AmbulanceId, SimConfig, SimRng, SimTime};
use ems_events::{CallEvent, Event, EventQueue, FreeEvent};
use ems_fleet::{FleetState, ServiceArea};
use ems_policy::{DecisionContext, Dispatcher, RepositionPolicy, ResponsePlanner};

use crate::{RunObserver, SimError, SimResult};

// ── Observations ──────────────────────────────────────────────────────────────

/// Raw per-run output, reduced to metrics by ems-metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunObservations {
    /// Scene and hospital travel legs of measured calls, in dispatch order.
    pub travel_times:        Vec<f64>,
    /// Measured calls that found no unit available.
    pub lost_calls:          u64,
    /// Every call resolved, measured or not.
    pub calls_handled:       u64,
    /// Every dispatch, measured or not.
    pub calls_dispatched:    u64,
    pub repositions:         u64,
    /// Dispatches where the pool fell back to the whole fleet.
    pub fallback_dispatches: u64,
}

// ── SimulationRun ─────────────────────────────────────────────────────────────

/// One replication: a fleet, a loaded event queue, and the policies that
/// drive it.
///
/// Each [`step`](Self::step) pops the earliest event and resolves it:
///
/// - **Call** — if no unit is available the call is lost; otherwise the
///   dispatcher picks a unit, the planner times the response, the unit goes
///   busy at the scene and a free event is scheduled at the completion time.
/// - **Free** — the unit becomes available, then the reposition policy may
///   teleport it to a station.
///
/// Only calls arriving at or after `config.warmup_minutes` contribute travel
/// samples and lost-call counts.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct SimulationRun<D: Dispatcher, P: RepositionPolicy> {
    /// Evaluation settings (warm-up boundary, seed, …).
    pub config: SimConfig,

    /// Stations, hospitals, home bases.  Read-only for the whole run.
    pub area: ServiceArea,

    /// Per-unit state; mutated only by this loop.
    pub fleet: FleetState,

    /// Pending call and free events.
    pub queue: EventQueue,

    pub dispatcher: D,

    pub reposition: P,

    pub(crate) planner:      ResponsePlanner,
    pub(crate) rng:          SimRng,
    pub(crate) now:          SimTime,
    pub(crate) observations: RunObservations,
}

impl<D: Dispatcher, P: RepositionPolicy> SimulationRun<D, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Resolve events until the queue is empty.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.step(observer)? {}

        let obs = &self.observations;
        tracing::debug!(
            calls = obs.calls_handled,
            dispatched = obs.calls_dispatched,
            lost = obs.lost_calls,
            samples = obs.travel_times.len(),
            repositions = obs.repositions,
            end = %self.now,
            "run drained",
        );
        observer.on_run_end(&self.observations);
        Ok(())
    }

    /// Resolve the earliest pending event.  Returns `false` once the queue
    /// is empty.
    ///
    /// Useful for tests and incremental stepping.
    pub fn step<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let Some(event) = self.queue.pop() else {
            return Ok(false);
        };
        self.now = event.time();
        match event {
            Event::Call(call) => self.resolve_call(call, observer)?,
            Event::Free(free) => self.resolve_free(free, observer)?,
        }
        Ok(true)
    }

    /// Time of the most recently resolved event.
    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn observations(&self) -> &RunObservations {
        &self.observations
    }

    /// Consume the run and keep only what it observed.
    pub fn into_observations(self) -> RunObservations {
        self.observations
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn resolve_call<O: RunObserver>(&mut self, call: CallEvent, observer: &mut O) -> SimResult<()> {
        self.observations.calls_handled += 1;
        let measured = call.time.minutes() >= self.config.warmup_minutes;

        if self.fleet.available_count() == 0 {
            self.lose(&call, measured, observer);
            return Ok(());
        }

        // Decide with read-only borrows, then apply.
        let ctx = DecisionContext::new(self.now, &self.area, &self.fleet);
        let Some(selection) = self.dispatcher.select(&call, &ctx) else {
            self.lose(&call, measured, observer);
            return Ok(());
        };
        let response = self.planner.plan(&call, &selection, &ctx, &mut self.rng);

        self.fleet.dispatch(selection.ambulance, call.location)?;
        self.queue.push(FreeEvent {
            time:      response.completes_at,
            ambulance: selection.ambulance,
        });

        let obs = &mut self.observations;
        obs.calls_dispatched += 1;
        if selection.fallback {
            obs.fallback_dispatches += 1;
        }
        if measured {
            obs.travel_times.extend(response.travel_samples());
        }
        observer.on_dispatch(&call, &response, measured);
        Ok(())
    }

    fn resolve_free<O: RunObserver>(&mut self, free: FreeEvent, observer: &mut O) -> SimResult<()> {
        let id = free.ambulance;
        let available = self
            .fleet
            .release(id)
            .map_err(|_| SimError::UnknownAmbulance(id))?;
        observer.on_release(free.time, id, available);

        let from = self.location_of(id)?;
        let ctx = DecisionContext::new(self.now, &self.area, &self.fleet);
        let Some(station_id) = self.reposition.target(from, available, &ctx) else {
            return Ok(());
        };

        let station = self
            .area
            .station(station_id)
            .ok_or(SimError::UnknownStation(station_id))?;
        self.fleet.relocate(id, station.location)?;
        self.observations.repositions += 1;

        tracing::trace!(ambulance = %id, station = %station_id, available, at = %free.time, "reposition");
        observer.on_reposition(free.time, id, station_id);
        Ok(())
    }

    fn lose<O: RunObserver>(&mut self, call: &CallEvent, measured: bool, observer: &mut O) {
        if measured {
            self.observations.lost_calls += 1;
        }
        observer.on_call_lost(call, measured);
    }

    fn location_of(&self, id: AmbulanceId) -> SimResult<ems_core::GeoPoint> {
        self.fleet
            .get(id)
            .map(|a| a.location)
            .ok_or(SimError::UnknownAmbulance(id))
    }
}
