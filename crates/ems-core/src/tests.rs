//! Unit tests for ems-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AmbulanceId, HospitalId, StationId};

    #[test]
    fn index_roundtrip() {
        let id = AmbulanceId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(AmbulanceId::try_from(7usize).unwrap(), id);
        assert_eq!(HospitalId(3).index(), 3);
    }

    #[test]
    fn station_numbers_are_one_based() {
        assert_eq!(StationId(1).slot(), Some(0));
        assert_eq!(StationId(17).slot(), Some(16));
        assert_eq!(StationId(0).slot(), None);
    }

    #[test]
    fn station_range_check() {
        assert!(StationId(1).is_within(17));
        assert!(StationId(17).is_within(17));
        assert!(!StationId(0).is_within(17));
        assert!(!StationId(18).is_within(17));
        assert!(!StationId(1).is_within(0));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AmbulanceId::INVALID.0, u32::MAX);
        assert_eq!(StationId::default(), StationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(StationId(4).to_string(), "StationId(4)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, TravelTimeModel, travel_time_minutes};

    fn edmonton() -> [GeoPoint; 4] {
        [
            GeoPoint::new(53.560819, -113.493309),
            GeoPoint::new(53.459373, -113.591074),
            GeoPoint::new(53.616200, -113.539335),
            GeoPoint::new(53.35, -113.75),
        ]
    }

    #[test]
    fn zero_distance() {
        for p in edmonton() {
            assert_eq!(p.distance_km(p), 0.0);
        }
    }

    #[test]
    fn symmetric_and_non_negative() {
        let pts = edmonton();
        for a in pts {
            for b in pts {
                let ab = a.distance_km(b);
                let ba = b.distance_km(a);
                assert!(ab >= 0.0);
                assert!((ab - ba).abs() < 1e-9, "{ab} vs {ba}");
            }
        }
    }

    #[test]
    fn one_degree_latitude() {
        // 1° of latitude ≈ 111.195 km on a 6371 km sphere
        let a = GeoPoint::new(53.0, -113.0);
        let b = GeoPoint::new(54.0, -113.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn on_site_is_zero_minutes() {
        assert_eq!(travel_time_minutes(0.0), 0.0);
        assert_eq!(travel_time_minutes(0.05), 0.0);
        assert_eq!(travel_time_minutes(0.1), 0.0);
        assert!(travel_time_minutes(0.1001) > 0.0);
    }

    #[test]
    fn travel_time_monotone_above_on_site() {
        let mut prev = 0.0;
        let mut d = 0.11;
        while d < 60.0 {
            let t = travel_time_minutes(d);
            assert!(t.is_finite());
            assert!(t >= prev, "travel time dropped at {d} km: {t} < {prev}");
            prev = t;
            d += 0.01;
        }
    }

    #[test]
    fn travel_time_reference_values() {
        // md = 2.42·√2 ≈ 3.4224; cd ≈ 0.2619 → ≈ 4.447 min
        let t = travel_time_minutes(2.0);
        assert!((t - 4.447).abs() < 0.01, "got {t}");

        // linear regime: md = 2.46 + 0.596·10 = 8.42
        let t10 = travel_time_minutes(10.0);
        assert!(t10 > 8.42 && t10 < 12.0, "got {t10}");
    }

    #[test]
    fn custom_model_uses_its_coefficients() {
        let flat = TravelTimeModel { b0: 0.0, b1: 0.0, b2: 0.0, ..TravelTimeModel::default() };
        // cd = 0 → minutes = md
        let t = flat.minutes(4.0);
        assert!((t - 2.42 * 2.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;
    use crate::time::MINUTES_PER_DAY;

    #[test]
    fn ordering_is_total() {
        let mut v = vec![SimTime(3.5), SimTime(-0.0), SimTime(1.0), SimTime(0.0)];
        v.sort();
        assert_eq!(v[0], SimTime(-0.0));
        assert_eq!(v[3], SimTime(3.5));
        assert!(SimTime(1.0) < SimTime(1.000_001));
    }

    #[test]
    fn arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 5.0, SimTime(15.0));
        assert_eq!(t.offset(2.5), SimTime(12.5));
        assert_eq!(SimTime(15.0) - SimTime(10.0), 5.0);
    }

    #[test]
    fn day_breakdown() {
        let t = SimTime::from_days(2.0) + 13.0 * 60.0 + 30.0;
        assert_eq!(t.day_index(), 2);
        assert_eq!(t.dhm(), (2, 13, 30));
        assert_eq!(SimTime::from_days(7.0).minutes(), 7.0 * MINUTES_PER_DAY);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults_match_reference_setup() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.seed, 31);
        assert_eq!(cfg.iterations, 3);
        assert_eq!(cfg.warmup_minutes, 10_080.0);
        assert_eq!(cfg.coverage_threshold_minutes, 9.0);
        assert_eq!(cfg.handoff_mean_minutes, 35.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let cfg = SimConfig { iterations: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_handoff_mean() {
        let cfg = SimConfig { handoff_mean_minutes: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { handoff_mean_minutes: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::for_replication(31, 2);
        let mut r2 = SimRng::for_replication(31, 2);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_replications_differ() {
        let mut r0 = SimRng::for_replication(31, 0);
        let mut r1 = SimRng::for_replication(31, 1);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent replications should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(53.35..53.70);
            assert!((53.35..53.70).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
