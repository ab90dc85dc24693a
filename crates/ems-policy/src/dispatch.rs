//! The `Dispatcher` trait and response planning.
//!
//! Dispatch is split the same way as every other decision in the engine:
//!
//! 1. **Select** — a [`Dispatcher`] looks at the read-only
//!    [`DecisionContext`] and names a unit.
//! 2. **Plan** — [`ResponsePlanner::plan`] turns the selection into travel
//!    legs and a completion time (this is where the RNG is drawn).
//! 3. **Apply** — ems-sim mutates the fleet, schedules the free event and
//!    records observations.

use ems_core::{
    AmbulanceId, EmsError, EmsResult, GeoPoint, HospitalId, SimRng, SimTime, TravelTimeModel,
};
use ems_events::CallEvent;
use ems_fleet::Ambulance;
use rand_distr::{Distribution, Exp};

use crate::DecisionContext;

// ── Selection ─────────────────────────────────────────────────────────────────

/// The unit chosen for a call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Selection {
    pub ambulance:   AmbulanceId,
    /// Great-circle distance from the unit's pre-dispatch location to the
    /// call site.
    pub distance_km: f64,
    /// `true` if the pool degraded to the whole fleet because no unit was
    /// flagged available.
    pub fallback:    bool,
}

/// Pluggable assignment policy.
///
/// Called only when the fleet reports at least one available unit; the run
/// handles the "nobody free" case as a lost call before asking.
///
/// # Example
///
/// ```rust,ignore
/// struct LowestIdFirst;
///
/// impl Dispatcher for LowestIdFirst {
///     fn select(&self, call: &CallEvent, ctx: &DecisionContext<'_>) -> Option<Selection> {
///         let amb = ctx.fleet.available().next()?;
///         Some(Selection {
///             ambulance:   amb.id,
///             distance_km: amb.location.distance_km(call.location),
///             fallback:    false,
///         })
///     }
/// }
/// ```
pub trait Dispatcher: Send + Sync {
    /// Pick the unit to send to `call`.  `None` means the call cannot be
    /// served (only possible with an empty fleet).
    fn select(&self, call: &CallEvent, ctx: &DecisionContext<'_>) -> Option<Selection>;
}

impl<T: Dispatcher + ?Sized> Dispatcher for &T {
    fn select(&self, call: &CallEvent, ctx: &DecisionContext<'_>) -> Option<Selection> {
        (**self).select(call, ctx)
    }
}

// ── NearestAvailable ──────────────────────────────────────────────────────────

/// Send the available unit closest to the call, ties to the lowest id.
///
/// If the fleet's counter says units are free but none is flagged available,
/// the whole fleet becomes the pool.  `FleetState` keeps the two in lockstep,
/// so this path is not expected to run; it is kept so a scoring run never
/// aborts on bookkeeping.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestAvailable;

impl Dispatcher for NearestAvailable {
    fn select(&self, call: &CallEvent, ctx: &DecisionContext<'_>) -> Option<Selection> {
        if let Some((ambulance, distance_km)) = nearest(ctx.fleet.available(), call.location) {
            return Some(Selection { ambulance, distance_km, fallback: false });
        }

        let (ambulance, distance_km) = nearest(ctx.fleet.iter(), call.location)?;
        tracing::warn!(
            available = ctx.fleet.available_count(),
            %ambulance,
            at = %ctx.now,
            "no ambulance flagged available; dispatching from the whole fleet",
        );
        Some(Selection { ambulance, distance_km, fallback: true })
    }
}

/// Closest unit in `pool` to `site`; the first one wins on equal distance.
fn nearest<'a>(
    pool: impl Iterator<Item = &'a Ambulance>,
    site: GeoPoint,
) -> Option<(AmbulanceId, f64)> {
    let mut best: Option<(AmbulanceId, f64)> = None;
    for amb in pool {
        let d = amb.location.distance_km(site);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((amb.id, d));
        }
    }
    best
}

// ── Response planning ─────────────────────────────────────────────────────────

/// Timing of one dispatched response.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Response {
    pub ambulance:         AmbulanceId,
    /// Minutes from the unit's position to the scene.
    pub scene_minutes:     f64,
    /// Minutes from the scene to the nearest hospital, when transporting.
    pub hospital_minutes:  Option<f64>,
    pub hospital:          Option<HospitalId>,
    /// Sampled hand-off duration at the hospital (0 without transport).
    pub handoff_minutes:   f64,
    /// When the unit returns to service.
    pub completes_at:      SimTime,
}

impl Response {
    /// Travel legs to record as response-time samples, scene leg first.
    pub fn travel_samples(&self) -> impl Iterator<Item = f64> {
        std::iter::once(self.scene_minutes).chain(self.hospital_minutes)
    }
}

/// Converts a [`Selection`] into travel legs and a completion time.
#[derive(Clone, Debug)]
pub struct ResponsePlanner {
    travel:  TravelTimeModel,
    handoff: Exp<f64>,
}

impl ResponsePlanner {
    /// `handoff_mean_minutes` must be positive and finite.
    pub fn new(travel: TravelTimeModel, handoff_mean_minutes: f64) -> EmsResult<Self> {
        if !(handoff_mean_minutes.is_finite() && handoff_mean_minutes > 0.0) {
            return Err(EmsError::Config(format!(
                "handoff mean must be positive, got {handoff_mean_minutes}"
            )));
        }
        let handoff = Exp::new(1.0 / handoff_mean_minutes)
            .map_err(|e| EmsError::Config(format!("handoff distribution: {e}")))?;
        Ok(Self { travel, handoff })
    }

    /// Compute the legs of `call` served by `selection`.
    ///
    /// Hospital transport goes to the nearest hospital.  An area without
    /// hospitals skips the transport leg and draws no hand-off.
    pub fn plan(
        &self,
        call:      &CallEvent,
        selection: &Selection,
        ctx:       &DecisionContext<'_>,
        rng:       &mut SimRng,
    ) -> Response {
        let scene_minutes = self.travel.minutes(selection.distance_km);
        let mut completes_at = call.time + scene_minutes + call.treatment_minutes;

        let mut hospital = None;
        let mut hospital_minutes = None;
        let mut handoff_minutes = 0.0;

        if call.hospital_required {
            if let Some((h, d)) = ctx.area.nearest_hospital(call.location) {
                let leg = self.travel.minutes(d);
                handoff_minutes = self.handoff.sample(rng.inner());
                completes_at = completes_at + leg + handoff_minutes;
                hospital = Some(h.id);
                hospital_minutes = Some(leg);
            }
        }

        Response {
            ambulance: selection.ambulance,
            scene_minutes,
            hospital_minutes,
            hospital,
            handoff_minutes,
            completes_at,
        }
    }
}
