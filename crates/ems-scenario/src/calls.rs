//! Call streams.
//!
//! [`SyntheticCalls`] reproduces the reference demand model: a
//! piecewise-constant Poisson process whose rate depends on the shift
//! (time of day) and the day of week, with uniformly scattered call
//! locations.  [`RecordedCalls`] replays a fixed stream, e.g. one loaded
//! with [`ems_events::load_calls_csv`].

use std::path::Path;

use rand_distr::{Distribution, Exp1};

use ems_core::{EmsError, EmsResult, GeoPoint, SimRng, SimTime};
use ems_events::{CallEvent, EventResult, load_calls_csv};

/// Produces the calls for one replication.
///
/// The returned calls need not be sorted; the event queue orders them.
pub trait CallSource: Send + Sync {
    fn calls(&self, rng: &mut SimRng) -> EmsResult<Vec<CallEvent>>;
}

impl<T: CallSource + ?Sized> CallSource for &T {
    fn calls(&self, rng: &mut SimRng) -> EmsResult<Vec<CallEvent>> {
        (**self).calls(rng)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Half-open lat/lon rectangle that synthetic call locations are drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Greater Edmonton.
    pub const EDMONTON: BoundingBox = BoundingBox {
        min_lat: 53.35,
        max_lat: 53.70,
        min_lon: -113.75,
        max_lon: -113.25,
    };

    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lat..self.max_lat).contains(&p.lat) && (self.min_lon..self.max_lon).contains(&p.lon)
    }

    fn sample(&self, rng: &mut SimRng) -> GeoPoint {
        let lat = rng.gen_range(self.min_lat..self.max_lat);
        let lon = rng.gen_range(self.min_lon..self.max_lon);
        GeoPoint::new(lat, lon)
    }
}

// ── SyntheticCalls ────────────────────────────────────────────────────────────

/// Shift boundaries in minutes after midnight: shift 1 is 05:00–13:00,
/// shift 2 is 13:00–21:00, shift 3 is the night.
const SHIFT_1_START: f64 = 5.0 * 60.0;
const SHIFT_2_START: f64 = 13.0 * 60.0;
const SHIFT_3_START: f64 = 21.0 * 60.0;

/// Non-homogeneous Poisson call generator.
///
/// Arrivals are generated sequentially: at time `t` the rate is
/// `shift_rates[shift(t)] * day_multipliers[day(t) % 7]` (day 0 is a
/// Monday) and the next call comes `Exp(rate)` minutes later.  The rate is
/// sampled at the previous arrival only, so a gap that spans a shift change
/// keeps the old rate.  Generation stops once `t` reaches the horizon; the
/// final call may land slightly past it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyntheticCalls {
    /// Length of the generated stream.
    pub days: u32,

    /// Calls per minute for shifts 1, 2 and 3.
    pub shift_rates: [f64; 3],

    /// Rate multiplier per weekday, Monday first.
    pub day_multipliers: [f64; 7],

    pub bounds: BoundingBox,

    /// Mean on-scene treatment time.
    pub treatment_mean_minutes: f64,

    /// Probability that a call needs transport to a hospital.
    pub hospital_probability: f64,
}

impl Default for SyntheticCalls {
    fn default() -> Self {
        Self {
            days:                   35,
            shift_rates:            [0.2967, 0.2967, 0.1483],
            day_multipliers:        [1.0, 0.8, 0.8, 1.0, 1.2, 1.2, 1.0],
            bounds:                 BoundingBox::EDMONTON,
            treatment_mean_minutes: 1.0 / 15.0,
            hospital_probability:   0.7,
        }
    }
}

impl SyntheticCalls {
    /// End of the generation window.
    pub fn horizon(&self) -> SimTime {
        SimTime::from_days(self.days as f64)
    }

    /// Arrival rate (calls per minute) in effect at `t`.
    pub fn rate_at(&self, t: SimTime) -> f64 {
        let minute = t.minute_of_day();
        let shift = if (SHIFT_1_START..SHIFT_2_START).contains(&minute) {
            0
        } else if (SHIFT_2_START..SHIFT_3_START).contains(&minute) {
            1
        } else {
            2
        };
        let weekday = (t.day_index() % 7) as usize;
        self.shift_rates[shift] * self.day_multipliers[weekday]
    }

    /// Reject settings that would stall or corrupt generation.
    pub fn validate(&self) -> EmsResult<()> {
        for (i, &r) in self.shift_rates.iter().enumerate() {
            if !(r.is_finite() && r > 0.0) {
                return Err(EmsError::Config(format!("shift {} rate must be positive, got {r}", i + 1)));
            }
        }
        for (i, &m) in self.day_multipliers.iter().enumerate() {
            if !(m.is_finite() && m > 0.0) {
                return Err(EmsError::Config(format!("day {i} multiplier must be positive, got {m}")));
            }
        }
        let b = &self.bounds;
        if !(b.min_lat < b.max_lat && b.min_lon < b.max_lon) {
            return Err(EmsError::Config(format!("empty bounding box {b:?}")));
        }
        if !(self.treatment_mean_minutes.is_finite() && self.treatment_mean_minutes >= 0.0) {
            return Err(EmsError::Config(format!(
                "treatment_mean_minutes must be non-negative, got {}",
                self.treatment_mean_minutes
            )));
        }
        if !(0.0..=1.0).contains(&self.hospital_probability) {
            return Err(EmsError::Config(format!(
                "hospital_probability must be in [0, 1], got {}",
                self.hospital_probability
            )));
        }
        Ok(())
    }
}

impl CallSource for SyntheticCalls {
    fn calls(&self, rng: &mut SimRng) -> EmsResult<Vec<CallEvent>> {
        self.validate()?;
        let horizon = self.horizon();

        let mut calls = Vec::new();
        let mut t = SimTime::default();
        while t < horizon {
            let gap: f64 = Exp1.sample(rng.inner());
            t = t + gap / self.rate_at(t);

            let unit: f64 = Exp1.sample(rng.inner());
            calls.push(CallEvent {
                time:              t,
                treatment_minutes: unit * self.treatment_mean_minutes,
                location:          self.bounds.sample(rng),
                hospital_required: rng.gen_bool(self.hospital_probability),
            });
        }

        tracing::trace!(calls = calls.len(), days = self.days, "generated synthetic calls");
        Ok(calls)
    }
}

// ── RecordedCalls ─────────────────────────────────────────────────────────────

/// Replays the same calls in every replication.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedCalls {
    calls: Vec<CallEvent>,
}

impl RecordedCalls {
    pub fn new(calls: Vec<CallEvent>) -> Self {
        Self { calls }
    }

    /// Load from a CSV file in the loader's column layout.
    pub fn from_csv(path: &Path) -> EventResult<Self> {
        load_calls_csv(path).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl CallSource for RecordedCalls {
    fn calls(&self, _rng: &mut SimRng) -> EmsResult<Vec<CallEvent>> {
        Ok(self.calls.clone())
    }
}
