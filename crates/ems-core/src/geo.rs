//! Geographic coordinate type, great-circle distance, and the empirical
//! ambulance travel-time model.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Travel times are derived from
//! straight-line distance only; there is no road graph behind them.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push `a` a hair outside [0, 1] for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Travel-time model ─────────────────────────────────────────────────────────

/// Empirical distance → minutes conversion.
///
/// ```text
/// d ≤ on_site_km     → 0
/// d ≤ regime_km      → md = 2.42 · √d
/// otherwise          → md = 2.46 + 0.596 · d
/// cd                 = √(b0(b2+1) + b1(b2+1)·md + b2·md²) / md
/// minutes            = md · exp(cd)
/// ```
///
/// The two regimes meet at `regime_km` with the linear branch very slightly
/// above the square-root one, so the result is non-decreasing in `d`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelTimeModel {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    /// Distances at or below this are treated as "already on site".
    pub on_site_km: f64,
    /// Switch point between the square-root and linear regimes.
    pub regime_km: f64,
}

impl Default for TravelTimeModel {
    fn default() -> Self {
        Self {
            b0:         0.336,
            b1:         0.000_058,
            b2:         0.038_8,
            on_site_km: 0.1,
            regime_km:  4.13,
        }
    }
}

impl TravelTimeModel {
    /// Travel time in minutes for a straight-line distance of `d_km`.
    pub fn minutes(&self, d_km: f64) -> f64 {
        if d_km <= self.on_site_km {
            return 0.0;
        }
        let md = if d_km <= self.regime_km {
            2.42 * d_km.sqrt()
        } else {
            2.46 + 0.596 * d_km
        };
        let Self { b0, b1, b2, .. } = *self;
        let cd = (b0 * (b2 + 1.0) + b1 * (b2 + 1.0) * md + b2 * md * md).sqrt() / md;
        md * cd.exp()
    }
}

/// [`TravelTimeModel::minutes`] with the default coefficients.
#[inline]
pub fn travel_time_minutes(d_km: f64) -> f64 {
    TravelTimeModel::default().minutes(d_km)
}
