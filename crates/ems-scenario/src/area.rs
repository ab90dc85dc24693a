//! Service-area fixtures.

use ems_core::{EmsError, EmsResult, GeoPoint};
use ems_fleet::{ServiceArea, ServiceAreaBuilder};

/// Builds the service area for one replication.
pub trait AreaSource: Send + Sync {
    /// An area with the first `stations` stations and `ambulances` units at
    /// their home bases.
    fn service_area(&self, ambulances: usize, stations: usize) -> EmsResult<ServiceArea>;
}

impl<T: AreaSource + ?Sized> AreaSource for &T {
    fn service_area(&self, ambulances: usize, stations: usize) -> EmsResult<ServiceArea> {
        (**self).service_area(ambulances, stations)
    }
}

// ── Edmonton ──────────────────────────────────────────────────────────────────

/// Station coordinates, station 1 first.
const STATIONS: [(f64, f64); 17] = [
    (53.560819, -113.493309),
    (53.459373, -113.591074),
    (53.596919, -113.420168),
    (53.458361, -113.393060),
    (53.540513, -113.593065),
    (53.524711, -113.456783),
    (53.501455, -113.628936),
    (53.616200, -113.539335),
    (53.576052, -113.459060),
    (53.496447, -113.517286),
    (53.599942, -113.465073),
    (53.548177, -113.565264),
    (53.491966, -113.494986),
    (53.493017, -113.417560),
    (53.553621, -113.525529),
    (53.548412, -113.500589),
    (53.570662, -113.407889),
];

const HOSPITALS: [(f64, f64); 5] = [
    (53.55696, -113.496566),
    (53.52071, -113.523769),
    (53.60444, -113.417621),
    (53.461583, -113.429724),
    (53.521115, -113.613514),
];

/// Home station number of each ambulance, unit 0 first.
const HOME_STATIONS: [usize; 16] = [3, 3, 4, 5, 5, 7, 8, 8, 9, 9, 10, 12, 13, 14, 14, 16];

/// Edmonton fixture: 17 stations, 5 hospitals, up to 16 ambulances.
///
/// Home bases always use the full station table, so an area truncated to
/// fewer stations can still have units based at stations it does not list.
#[derive(Copy, Clone, Debug, Default)]
pub struct EdmontonArea;

impl EdmontonArea {
    pub const MAX_STATIONS: usize = STATIONS.len();
    pub const MAX_AMBULANCES: usize = HOME_STATIONS.len();
    pub const HOSPITALS: usize = HOSPITALS.len();

    /// The full area: every station and ambulance.
    pub fn full() -> EmsResult<ServiceArea> {
        EdmontonArea.service_area(Self::MAX_AMBULANCES, Self::MAX_STATIONS)
    }

    /// Location of station `number` (1-based) in the full table.
    pub fn station_location(number: usize) -> Option<GeoPoint> {
        let &(lat, lon) = STATIONS.get(number.checked_sub(1)?)?;
        Some(GeoPoint::new(lat, lon))
    }
}

impl AreaSource for EdmontonArea {
    fn service_area(&self, ambulances: usize, stations: usize) -> EmsResult<ServiceArea> {
        if ambulances > Self::MAX_AMBULANCES {
            return Err(EmsError::Config(format!(
                "at most {} ambulances have a home station, got {ambulances}",
                Self::MAX_AMBULANCES
            )));
        }
        if stations > Self::MAX_STATIONS {
            return Err(EmsError::Config(format!(
                "at most {} stations are defined, got {stations}",
                Self::MAX_STATIONS
            )));
        }

        let mut b = ServiceAreaBuilder::new();
        for &(lat, lon) in &STATIONS[..stations] {
            b.add_station(GeoPoint::new(lat, lon));
        }
        for &(lat, lon) in &HOSPITALS {
            b.add_hospital(GeoPoint::new(lat, lon));
        }
        for &number in &HOME_STATIONS[..ambulances] {
            let (lat, lon) = STATIONS[number - 1];
            b.add_ambulance(GeoPoint::new(lat, lon));
        }
        b.build()
    }
}
