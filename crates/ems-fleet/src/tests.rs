//! Unit tests for ems-fleet.

use ems_core::{AmbulanceId, GeoPoint, StationId};

use crate::{ServiceArea, ServiceAreaBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three stations on a north–south line, two hospitals, three ambulances.
fn small_area() -> ServiceArea {
    let mut b = ServiceAreaBuilder::new();
    let s1 = b.add_station(GeoPoint::new(53.60, -113.50));
    let s2 = b.add_station(GeoPoint::new(53.55, -113.50));
    b.add_station(GeoPoint::new(53.50, -113.50));
    b.add_hospital(GeoPoint::new(53.58, -113.50));
    b.add_hospital(GeoPoint::new(53.45, -113.50));
    b.add_ambulance_at_station(s1)
        .add_ambulance_at_station(s2)
        .add_ambulance(GeoPoint::new(53.40, -113.60));
    b.build().unwrap()
}

// ── ServiceArea ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod area {
    use super::*;

    #[test]
    fn stations_numbered_from_one() {
        let area = small_area();
        assert_eq!(area.station_count(), 3);
        assert_eq!(area.station(StationId(1)).unwrap().location.lat, 53.60);
        assert_eq!(area.station(StationId(3)).unwrap().location.lat, 53.50);
        assert!(area.station(StationId(0)).is_none());
        assert!(area.station(StationId(4)).is_none());
    }

    #[test]
    fn homes_resolved_from_stations() {
        let area = small_area();
        assert_eq!(area.ambulance_count(), 3);
        assert_eq!(area.homes()[0], GeoPoint::new(53.60, -113.50));
        assert_eq!(area.homes()[1], GeoPoint::new(53.55, -113.50));
        assert_eq!(area.homes()[2], GeoPoint::new(53.40, -113.60));
    }

    #[test]
    fn unknown_home_station_errors() {
        let mut b = ServiceAreaBuilder::new();
        b.add_station(GeoPoint::new(53.6, -113.5));
        b.add_ambulance_at_station(StationId(2));
        assert!(b.build().is_err());
    }

    #[test]
    fn nearest_hospital_picks_minimum() {
        let area = small_area();
        let (h, d) = area.nearest_hospital(GeoPoint::new(53.47, -113.50)).unwrap();
        assert_eq!(h.id.0, 1);
        assert!(d > 0.0 && d < 3.0, "got {d}");
    }

    #[test]
    fn no_hospitals_means_none() {
        let mut b = ServiceAreaBuilder::new();
        b.add_station(GeoPoint::new(53.6, -113.5));
        let area = b.build().unwrap();
        assert!(area.nearest_hospital(GeoPoint::new(53.6, -113.5)).is_none());
    }
}

// ── FleetState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet {
    use super::*;
    use crate::Availability;

    #[test]
    fn fresh_fleet_all_available_at_home() {
        let fleet = small_area().fleet();
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.available_count(), 3);
        assert!(fleet.iter().all(|a| a.is_available() && a.location == a.home));
        assert!(fleet.is_consistent());
    }

    #[test]
    fn dispatch_marks_busy_and_moves_to_scene() {
        let mut fleet = small_area().fleet();
        let scene = GeoPoint::new(53.52, -113.45);
        fleet.dispatch(AmbulanceId(1), scene).unwrap();

        let amb = fleet.get(AmbulanceId(1)).unwrap();
        assert_eq!(amb.availability(), Availability::Busy);
        assert_eq!(amb.location, scene);
        assert_eq!(fleet.available_count(), 2);
        assert_eq!(fleet.available().map(|a| a.id).collect::<Vec<_>>(), vec![AmbulanceId(0), AmbulanceId(2)]);
        assert!(fleet.is_consistent());
    }

    #[test]
    fn release_restores_counter() {
        let mut fleet = small_area().fleet();
        fleet.dispatch(AmbulanceId(0), GeoPoint::new(53.5, -113.5)).unwrap();
        assert_eq!(fleet.release(AmbulanceId(0)).unwrap(), 3);
        assert!(fleet.get(AmbulanceId(0)).unwrap().is_available());
        assert!(fleet.is_consistent());
    }

    #[test]
    fn repeated_transitions_keep_counter_in_lockstep() {
        let mut fleet = small_area().fleet();
        let site = GeoPoint::new(53.5, -113.5);
        fleet.dispatch(AmbulanceId(2), site).unwrap();
        fleet.dispatch(AmbulanceId(2), site).unwrap();
        assert_eq!(fleet.available_count(), 2);
        fleet.release(AmbulanceId(0)).unwrap();
        assert_eq!(fleet.available_count(), 2);
        assert!(fleet.is_consistent());
    }

    #[test]
    fn relocate_keeps_availability() {
        let mut fleet = small_area().fleet();
        let to = GeoPoint::new(53.50, -113.50);
        fleet.relocate(AmbulanceId(0), to).unwrap();
        let amb = fleet.get(AmbulanceId(0)).unwrap();
        assert_eq!(amb.location, to);
        assert!(amb.is_available());
    }

    #[test]
    fn unknown_ambulance_errors() {
        let mut fleet = small_area().fleet();
        assert!(fleet.dispatch(AmbulanceId(9), GeoPoint::new(0.0, 0.0)).is_err());
        assert!(fleet.release(AmbulanceId(9)).is_err());
        assert!(fleet.relocate(AmbulanceId(9), GeoPoint::new(0.0, 0.0)).is_err());
    }
}
