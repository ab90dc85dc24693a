//! Stations, hospitals, and the `ServiceArea` that bundles them with the
//! ambulance home bases.
//!
//! # Usage
//!
//! ```rust
//! use ems_core::{GeoPoint, StationId};
//! use ems_fleet::ServiceAreaBuilder;
//!
//! let mut b = ServiceAreaBuilder::new();
//! let north = b.add_station(GeoPoint::new(53.60, -113.50));
//! b.add_station(GeoPoint::new(53.50, -113.50));
//! b.add_hospital(GeoPoint::new(53.55, -113.49));
//! b.add_ambulance_at_station(north);
//! let area = b.build().unwrap();
//!
//! assert_eq!(north, StationId(1));
//! assert_eq!(area.station_count(), 2);
//! assert_eq!(area.fleet().available_count(), 1);
//! ```

use ems_core::{EmsError, EmsResult, GeoPoint, HospitalId, StationId};

use crate::FleetState;

/// A post an ambulance can be repositioned to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:       StationId,
    pub location: GeoPoint,
}

/// A receiving hospital for calls that need transport.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hospital {
    pub id:       HospitalId,
    pub location: GeoPoint,
}

// ── ServiceArea ───────────────────────────────────────────────────────────────

/// Immutable geography of one replication.
///
/// Stations are stored in station-number order so `StationId(n)` lives at
/// slot `n - 1`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceArea {
    stations:  Vec<Station>,
    hospitals: Vec<Hospital>,
    homes:     Vec<GeoPoint>,
}

impl ServiceArea {
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Home base of each ambulance, indexed by `AmbulanceId`.
    pub fn homes(&self) -> &[GeoPoint] {
        &self.homes
    }

    #[inline]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    #[inline]
    pub fn ambulance_count(&self) -> usize {
        self.homes.len()
    }

    /// Look up a station by its 1-based number.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.slot()?)
    }

    /// Closest hospital to `from` and its distance in km.  Ties go to the
    /// lowest hospital id.  `None` if the area has no hospitals.
    pub fn nearest_hospital(&self, from: GeoPoint) -> Option<(&Hospital, f64)> {
        let mut best: Option<(&Hospital, f64)> = None;
        for h in &self.hospitals {
            let d = from.distance_km(h.location);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((h, d));
            }
        }
        best
    }

    /// A fresh fleet with every ambulance available at its home base.
    pub fn fleet(&self) -> FleetState {
        FleetState::from_homes(&self.homes)
    }
}

// ── ServiceAreaBuilder ────────────────────────────────────────────────────────

/// Fluent builder for [`ServiceArea`].
///
/// Station numbers and hospital ids are assigned in insertion order.
#[derive(Default)]
pub struct ServiceAreaBuilder {
    stations:  Vec<Station>,
    hospitals: Vec<Hospital>,
    homes:     Vec<GeoPoint>,
    /// Home bases given by station number, resolved in `build`.
    pending:   Vec<(usize, StationId)>,
}

impl ServiceAreaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station; returns its 1-based number.
    pub fn add_station(&mut self, location: GeoPoint) -> StationId {
        let id = StationId(self.stations.len() as u32 + 1);
        self.stations.push(Station { id, location });
        id
    }

    pub fn add_hospital(&mut self, location: GeoPoint) -> HospitalId {
        let id = HospitalId(self.hospitals.len() as u32);
        self.hospitals.push(Hospital { id, location });
        id
    }

    /// Add an ambulance based at an arbitrary point.
    pub fn add_ambulance(&mut self, home: GeoPoint) -> &mut Self {
        self.homes.push(home);
        self
    }

    /// Add an ambulance based at station `station`.  The station may be added
    /// later; it is resolved when the area is built.
    pub fn add_ambulance_at_station(&mut self, station: StationId) -> &mut Self {
        self.pending.push((self.homes.len(), station));
        self.homes.push(GeoPoint::new(f64::NAN, f64::NAN));
        self
    }

    /// Resolve station-based home bases and freeze the area.
    pub fn build(self) -> EmsResult<ServiceArea> {
        let Self { stations, hospitals, mut homes, pending } = self;
        for (slot, station) in pending {
            let location = stations
                .get(station.slot().ok_or(EmsError::StationNotFound(station))?)
                .ok_or(EmsError::StationNotFound(station))?
                .location;
            homes[slot] = location;
        }
        Ok(ServiceArea { stations, hospitals, homes })
    }
}
