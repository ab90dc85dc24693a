//! Fluent builder for constructing a [`SimulationRun`].

use ems_core::{SimConfig, SimRng, SimTime, TravelTimeModel};
use ems_events::{CallEvent, EventQueue};
use ems_fleet::ServiceArea;
use ems_policy::{Dispatcher, RepositionPolicy, ResponsePlanner};

use crate::{RunObservations, SimResult, SimulationRun};

/// Fluent builder for [`SimulationRun<D, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — warm-up, hand-off mean, seed
/// - [`ServiceArea`] — stations, hospitals, home bases
/// - the call stream for this replication
/// - `D: Dispatcher` and `P: RepositionPolicy`
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                        |
/// |--------------------|--------------------------------|
/// | `.rng(r)`          | `SimRng::new(config.seed)`     |
/// | `.travel_model(m)` | `TravelTimeModel::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut run = SimBuilder::new(config, area, calls, NearestAvailable, NoReposition)
///     .rng(SimRng::for_replication(seed, r))
///     .build()?;
/// run.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: Dispatcher, P: RepositionPolicy> {
    config:     SimConfig,
    area:       ServiceArea,
    calls:      Vec<CallEvent>,
    dispatcher: D,
    reposition: P,
    rng:        Option<SimRng>,
    travel:     TravelTimeModel,
}

impl<D: Dispatcher, P: RepositionPolicy> SimBuilder<D, P> {
    pub fn new(
        config:     SimConfig,
        area:       ServiceArea,
        calls:      Vec<CallEvent>,
        dispatcher: D,
        reposition: P,
    ) -> Self {
        Self {
            config,
            area,
            calls,
            dispatcher,
            reposition,
            rng:    None,
            travel: TravelTimeModel::default(),
        }
    }

    /// RNG for the hand-off draws.  Pass
    /// [`SimRng::for_replication`] when running several replications.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Override the distance → minutes regression.
    pub fn travel_model(mut self, travel: TravelTimeModel) -> Self {
        self.travel = travel;
        self
    }

    /// Validate and assemble.  Every unit starts available at its home base.
    pub fn build(self) -> SimResult<SimulationRun<D, P>> {
        self.config.validate()?;
        let planner = ResponsePlanner::new(self.travel, self.config.handoff_mean_minutes)?;
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let fleet = self.area.fleet();
        let queue = EventQueue::from_events(self.calls);

        Ok(SimulationRun {
            config:       self.config,
            area:         self.area,
            fleet,
            queue,
            dispatcher:   self.dispatcher,
            reposition:   self.reposition,
            planner,
            rng,
            now:          SimTime::default(),
            observations: RunObservations::default(),
        })
    }
}
