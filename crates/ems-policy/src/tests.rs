//! Unit tests for ems-policy.

use ems_core::{AmbulanceId, GeoPoint, SimRng, SimTime, StationId, TravelTimeModel};
use ems_events::CallEvent;
use ems_fleet::{FleetState, ServiceArea, ServiceAreaBuilder};

use crate::{
    DecisionContext, Dispatcher, NearestAvailable, NoReposition, RepositionPolicy,
    RepositionTable, ResponsePlanner, Selection, TableReposition, FALLBACK_STATIONS,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Five stations spaced 0.05° of latitude apart (≈5.6 km) along one
/// meridian, one hospital at the south end, ambulances at stations 1, 3, 5.
fn line_area() -> ServiceArea {
    let mut b = ServiceAreaBuilder::new();
    for i in 0..5 {
        b.add_station(GeoPoint::new(53.60 - 0.05 * i as f64, -113.50));
    }
    b.add_hospital(GeoPoint::new(53.38, -113.50));
    b.add_ambulance_at_station(StationId(1))
        .add_ambulance_at_station(StationId(3))
        .add_ambulance_at_station(StationId(5));
    b.build().unwrap()
}

fn call_at(lat: f64, hospital_required: bool) -> CallEvent {
    CallEvent {
        time:              SimTime(20_000.0),
        treatment_minutes: 5.0,
        location:          GeoPoint::new(lat, -113.50),
        hospital_required,
    }
}

fn ctx<'a>(area: &'a ServiceArea, fleet: &'a FleetState) -> DecisionContext<'a> {
    DecisionContext::new(SimTime(20_000.0), area, fleet)
}

// ── RepositionTable ───────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;

    #[test]
    fn build_gives_all_prefixes() {
        let t = RepositionTable::build(&[5, 2, 9]);
        assert_eq!(t.len(), 4);
        assert_eq!(t.entry(0).unwrap(), &[] as &[StationId]);
        assert_eq!(t.entry(1).unwrap(), &[StationId(5)]);
        assert_eq!(t.entry(3).unwrap(), &[StationId(5), StationId(2), StationId(9)]);
        assert!(t.entry(4).is_none());
    }

    #[test]
    fn each_entry_is_prefix_of_next() {
        let policy: Vec<u32> = (1..=16).rev().collect();
        let t = RepositionTable::build(&policy);
        for i in 0..t.len() - 1 {
            let a = t.entry(i).unwrap();
            let b = t.entry(i + 1).unwrap();
            assert_eq!(b.len(), a.len() + 1);
            assert!(b.starts_with(a), "entry {i} is not a prefix of entry {}", i + 1);
        }
    }

    #[test]
    fn candidates_clamp_to_full_policy() {
        let t = RepositionTable::build(&[4, 7]);
        assert_eq!(t.candidates(2), &[StationId(4), StationId(7)]);
        assert_eq!(t.candidates(50), &[StationId(4), StationId(7)]);
        assert_eq!(t.candidates(1), &[StationId(4)]);
    }

    #[test]
    fn empty_entry_falls_back() {
        let t = RepositionTable::build(&[4, 7]);
        assert_eq!(t.candidates(0), &FALLBACK_STATIONS);
        let empty = RepositionTable::build(&[]);
        assert_eq!(empty.len(), 1);
        assert_eq!(empty.candidates(3), &FALLBACK_STATIONS);
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher {
    use super::*;

    #[test]
    fn picks_nearest_available() {
        let area = line_area();
        let fleet = area.fleet();
        // closest to station 3 (53.50)
        let call = call_at(53.49, false);
        let sel = NearestAvailable.select(&call, &ctx(&area, &fleet)).unwrap();
        assert_eq!(sel.ambulance, AmbulanceId(1));
        assert!(!sel.fallback);
        assert!((sel.distance_km - 1.112).abs() < 0.01, "got {}", sel.distance_km);
    }

    #[test]
    fn skips_busy_units() {
        let area = line_area();
        let mut fleet = area.fleet();
        fleet.dispatch(AmbulanceId(1), GeoPoint::new(53.0, -113.0)).unwrap();
        let call = call_at(53.49, false);
        let sel = NearestAvailable.select(&call, &ctx(&area, &fleet)).unwrap();
        // station 5 (53.40) is closer than station 1 (53.60)
        assert_eq!(sel.ambulance, AmbulanceId(2));
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let mut b = ServiceAreaBuilder::new();
        let s = b.add_station(GeoPoint::new(53.5, -113.5));
        b.add_ambulance_at_station(s).add_ambulance_at_station(s);
        let area = b.build().unwrap();
        let fleet = area.fleet();
        let sel = NearestAvailable.select(&call_at(53.52, false), &ctx(&area, &fleet)).unwrap();
        assert_eq!(sel.ambulance, AmbulanceId(0));
    }

    #[test]
    fn whole_fleet_when_none_flagged_available() {
        let area = line_area();
        let mut fleet = area.fleet();
        for i in 0..3 {
            fleet.dispatch(AmbulanceId(i), GeoPoint::new(53.60, -113.50)).unwrap();
        }
        let sel = NearestAvailable.select(&call_at(53.60, false), &ctx(&area, &fleet)).unwrap();
        assert!(sel.fallback);
        assert_eq!(sel.ambulance, AmbulanceId(0));
    }

    #[test]
    fn empty_fleet_selects_nothing() {
        let mut b = ServiceAreaBuilder::new();
        b.add_station(GeoPoint::new(53.5, -113.5));
        let area = b.build().unwrap();
        let fleet = area.fleet();
        assert!(NearestAvailable.select(&call_at(53.5, false), &ctx(&area, &fleet)).is_none());
    }
}

// ── ResponsePlanner ───────────────────────────────────────────────────────────

#[cfg(test)]
mod response {
    use super::*;

    fn selection(distance_km: f64) -> Selection {
        Selection { ambulance: AmbulanceId(0), distance_km, fallback: false }
    }

    #[test]
    fn scene_only_completion() {
        let area = line_area();
        let fleet = area.fleet();
        let planner = ResponsePlanner::new(TravelTimeModel::default(), 35.0).unwrap();
        let call = call_at(53.5, false);
        let mut rng = SimRng::new(1);

        let r = planner.plan(&call, &selection(2.0), &ctx(&area, &fleet), &mut rng);
        let scene = TravelTimeModel::default().minutes(2.0);
        assert_eq!(r.scene_minutes, scene);
        assert!(r.hospital_minutes.is_none());
        assert_eq!(r.handoff_minutes, 0.0);
        assert!((r.completes_at.0 - (20_000.0 + scene + 5.0)).abs() < 1e-9);
        assert_eq!(r.travel_samples().collect::<Vec<_>>(), vec![scene]);
    }

    #[test]
    fn hospital_leg_and_handoff() {
        let area = line_area();
        let fleet = area.fleet();
        let planner = ResponsePlanner::new(TravelTimeModel::default(), 35.0).unwrap();
        let call = call_at(53.40, true);
        let mut rng = SimRng::new(1);

        let r = planner.plan(&call, &selection(0.0), &ctx(&area, &fleet), &mut rng);
        let leg = r.hospital_minutes.unwrap();
        assert!(leg > 0.0);
        assert!(r.handoff_minutes >= 0.0);
        assert_eq!(r.hospital.unwrap().0, 0);
        let expected = 20_000.0 + 0.0 + 5.0 + leg + r.handoff_minutes;
        assert!((r.completes_at.0 - expected).abs() < 1e-9);
        assert_eq!(r.travel_samples().count(), 2);
    }

    #[test]
    fn handoff_is_deterministic_per_seed() {
        let area = line_area();
        let fleet = area.fleet();
        let planner = ResponsePlanner::new(TravelTimeModel::default(), 35.0).unwrap();
        let call = call_at(53.40, true);
        let a = planner.plan(&call, &selection(1.0), &ctx(&area, &fleet), &mut SimRng::new(9));
        let b = planner.plan(&call, &selection(1.0), &ctx(&area, &fleet), &mut SimRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn handoff_mean_is_roughly_right() {
        let area = line_area();
        let fleet = area.fleet();
        let planner = ResponsePlanner::new(TravelTimeModel::default(), 35.0).unwrap();
        let call = call_at(53.40, true);
        let mut rng = SimRng::new(3);
        let n = 20_000;
        let total: f64 = (0..n)
            .map(|_| planner.plan(&call, &selection(0.0), &ctx(&area, &fleet), &mut rng).handoff_minutes)
            .sum();
        let mean = total / n as f64;
        assert!((mean - 35.0).abs() < 2.0, "got {mean}");
    }

    #[test]
    fn rejects_non_positive_mean() {
        assert!(ResponsePlanner::new(TravelTimeModel::default(), 0.0).is_err());
        assert!(ResponsePlanner::new(TravelTimeModel::default(), -3.0).is_err());
    }
}

// ── RepositionPolicy ──────────────────────────────────────────────────────────

#[cfg(test)]
mod reposition {
    use super::*;

    #[test]
    fn zero_threshold_never_triggers() {
        let area = line_area();
        let fleet = area.fleet();
        let policy = TableReposition::new(RepositionTable::build(&[2, 4, 5]), 0);
        for available in 0..5 {
            assert!(policy.target(GeoPoint::new(53.5, -113.5), available, &ctx(&area, &fleet)).is_none());
        }
    }

    #[test]
    fn triggers_only_below_threshold() {
        let area = line_area();
        let fleet = area.fleet();
        let policy = TableReposition::new(RepositionTable::build(&[2, 4, 5]), 2);
        let from = GeoPoint::new(53.5, -113.5);
        assert!(policy.target(from, 2, &ctx(&area, &fleet)).is_none());
        assert_eq!(policy.target(from, 1, &ctx(&area, &fleet)), Some(StationId(2)));
    }

    #[test]
    fn moves_to_nearest_candidate() {
        let area = line_area();
        let fleet = area.fleet();
        let policy = TableReposition::new(RepositionTable::build(&[1, 4, 5]), 10);
        // candidates with 3 free: [1, 4, 5]; 53.42 is nearest station 5 (53.40)
        let target = policy.target(GeoPoint::new(53.42, -113.5), 3, &ctx(&area, &fleet));
        assert_eq!(target, Some(StationId(5)));
    }

    #[test]
    fn invalid_ids_are_filtered() {
        let area = line_area();
        let policy = TableReposition::new(RepositionTable::build(&[0, 99, 4]), 10);
        assert_eq!(policy.candidates(3, area.station_count()), vec![StationId(4)]);
    }

    #[test]
    fn all_invalid_falls_back_within_range() {
        let area = line_area();
        let fleet = area.fleet();
        let policy = TableReposition::new(RepositionTable::build(&[0, 42, 77]), 10);
        for available in 0..5 {
            let c = policy.candidates(available, area.station_count());
            assert_eq!(c, FALLBACK_STATIONS.to_vec());
            let target = policy.target(GeoPoint::new(53.1, -113.5), available, &ctx(&area, &fleet)).unwrap();
            assert!(target.is_within(area.station_count()));
        }
    }

    #[test]
    fn fallback_restricted_to_small_areas() {
        let policy = TableReposition::new(RepositionTable::build(&[9]), 10);
        assert_eq!(policy.candidates(1, 2), vec![StationId(1), StationId(2)]);
        assert!(policy.candidates(1, 0).is_empty());
    }

    #[test]
    fn no_reposition_never_moves() {
        let area = line_area();
        let fleet = area.fleet();
        assert!(NoReposition.target(GeoPoint::new(53.5, -113.5), 0, &ctx(&area, &fleet)).is_none());
    }
}
