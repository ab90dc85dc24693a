//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: `SimTime` holds simulated minutes since the start of
//! the call stream as an `f64`.  Events land at arbitrary fractional minutes
//! (exponential inter-arrivals, travel times), so a tick grid would only add
//! rounding.
//!
//! `f64` is not `Ord`, but the event queue needs a total order.  `SimTime`
//! implements `Ord` through [`f64::total_cmp`], which orders every finite
//! value the obvious way.  Constructors never produce NaN from finite input.

use std::cmp::Ordering;
use std::fmt;

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const MINUTES_PER_DAY: f64 = 24.0 * MINUTES_PER_HOUR;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in minutes.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn from_days(days: f64) -> SimTime {
        SimTime(days * MINUTES_PER_DAY)
    }

    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// Return the instant `minutes` after `self`.
    #[inline]
    pub fn offset(self, minutes: f64) -> SimTime {
        SimTime(self.0 + minutes)
    }

    /// Whole days elapsed since time zero (0 = first day).
    #[inline]
    pub fn day_index(self) -> u64 {
        (self.0.max(0.0) / MINUTES_PER_DAY) as u64
    }

    /// Minutes elapsed since the most recent midnight.
    #[inline]
    pub fn minute_of_day(self) -> f64 {
        self.0.rem_euclid(MINUTES_PER_DAY)
    }

    /// Break the instant into (day, hour, minute) for human-readable logs.
    pub fn dhm(self) -> (u64, u32, u32) {
        let in_day = self.minute_of_day();
        let hours = (in_day / MINUTES_PER_HOUR) as u32;
        let minutes = (in_day % MINUTES_PER_HOUR) as u32;
        (self.day_index(), hours, minutes)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.dhm();
        write!(f, "t={:.2} (day {} {:02}:{:02})", self.0, d, h, m)
    }
}
