//! Unit tests for ss-core primitives.

#[cfg(test)]
mod ids {
    use crate::RescuerId;

    #[test]
    fn one_based_index_roundtrip() {
        let id = RescuerId::from_index(0).unwrap();
        assert_eq!(id, RescuerId(1));
        assert_eq!(id.index(), 0);
        assert_eq!(RescuerId::from_index(4).unwrap().index(), 4);
    }

    #[test]
    fn from_index_rejects_ids_past_u32() {
        assert_eq!(RescuerId::from_index(u32::MAX as usize - 1), Some(RescuerId(u32::MAX)));
        assert_eq!(RescuerId::from_index(u32::MAX as usize), None);
        assert_eq!(RescuerId::from_index(usize::MAX), None);
    }

    #[test]
    fn display_is_rescuer_name() {
        assert_eq!(RescuerId(3).to_string(), "Rescuer #3");
    }

    #[test]
    fn ordering() {
        assert!(RescuerId(1) < RescuerId(2));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.7128, -74.0060);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude_is_about_111_km() {
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(41.0, -74.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(10.0, 0.0);
        let b = GeoPoint::new(0.0, 0.0);
        assert_eq!(a.lerp_toward(b, 0.0), a);
        assert_eq!(a.lerp_toward(b, 1.0), b);
        let mid = a.lerp_toward(b, 0.5);
        assert!((mid.lat - 5.0).abs() < 1e-12);
        assert_eq!(mid.lon, 0.0);
    }

    #[test]
    fn planar_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.planar_distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn as_point2_keeps_component_order() {
        let p = GeoPoint::new(1.5, -2.5).as_point2();
        assert_eq!((p.x, p.y), (1.5, -2.5));
    }
}

#[cfg(test)]
mod bearing {
    use crate::{Bearing, Point2};

    fn b(to: (f64, f64)) -> Bearing {
        Bearing::between(Point2::new(0.0, 0.0), to.into())
    }

    #[test]
    fn cardinal_directions() {
        assert_eq!(b((1.0, 0.0)), Bearing::East);
        assert_eq!(b((0.0, 1.0)), Bearing::South);
        assert_eq!(b((0.0, -1.0)), Bearing::North);
        assert_eq!(b((-1.0, 0.0)), Bearing::West);
    }

    #[test]
    fn diagonal_just_past_east_limit_is_south() {
        // atan2(1, 1) ≈ 0.7854 > 0.78
        assert_eq!(b((1.0, 1.0)), Bearing::South);
        assert_eq!(b((1.0, -1.0)), Bearing::North);
    }

    #[test]
    fn half_open_boundaries() {
        assert_eq!(Bearing::from_angle(0.78), Bearing::East);
        assert_eq!(Bearing::from_angle(-0.78), Bearing::North);
        assert_eq!(Bearing::from_angle(2.36), Bearing::South);
        assert_eq!(Bearing::from_angle(-2.36), Bearing::West);
        assert_eq!(Bearing::from_angle(std::f64::consts::PI), Bearing::West);
    }

    #[test]
    fn zero_vector_is_east() {
        assert_eq!(b((0.0, 0.0)), Bearing::East);
    }

    #[test]
    fn offset_origin() {
        let from = Point2::new(500.0, 350.0);
        assert_eq!(Bearing::between(from, Point2::new(400.0, 350.0)), Bearing::West);
    }

    #[test]
    fn arrows() {
        assert_eq!(Bearing::East.arrow(), "➡️");
        assert_eq!(Bearing::North.to_string(), "north");
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, ManualClock, SystemClock, Timestamp};

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(10.0);
        assert_eq!(t + 2.5, Timestamp(12.5));
        assert_eq!(Timestamp(15.0) - t, 5.0);
        assert_eq!(t.since(Timestamp(12.0)), -2.0);
    }

    #[test]
    fn manual_clock_sleep_advances() {
        let mut clock = ManualClock::new(Timestamp(100.0));
        clock.sleep(0.5);
        clock.sleep(0.5);
        assert_eq!(clock.now(), Timestamp(101.0));
        clock.sleep(-3.0); // ignored
        assert_eq!(clock.now(), Timestamp(101.0));
        clock.set(Timestamp(5.0));
        assert_eq!(clock.now(), Timestamp(5.0));
    }

    #[test]
    fn system_clock_skips_unrepresentable_pauses() {
        let mut clock = SystemClock;
        clock.sleep(f64::INFINITY);
        clock.sleep(1e20);
        clock.sleep(f64::NAN);
        clock.sleep(-1.0);
        clock.sleep(0.0);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now().secs() > 1.0e9);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform([0.0, 1.0]), r2.uniform([0.0, 1.0]));
            assert_eq!(r1.symmetric(0.02), r2.symmetric(0.02));
        }
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform([1.5, 3.0]);
            assert!((1.5..3.0).contains(&v));
            let o = rng.symmetric(0.02);
            assert!((-0.02..=0.02).contains(&o));
        }
    }

    #[test]
    fn degenerate_ranges() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform([2.0, 2.0]), 2.0);
        assert_eq!(rng.symmetric(0.0), 0.0);
    }
}

#[cfg(test)]
mod config {
    use crate::config::{MAX_OFFSET_DEG, MAX_REFRESH_INTERVAL_SECS, MAX_RESCUERS};
    use crate::{SwarmConfig, SwarmError};

    #[test]
    fn default_is_valid() {
        let cfg = SwarmConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.rescuer_count, 5);
        assert_eq!(cfg.arrival_threshold, 0.1);
    }

    #[test]
    fn zero_rescuers_rejected() {
        let cfg = SwarmConfig { rescuer_count: 0, ..SwarmConfig::default() };
        assert!(matches!(cfg.validate(), Err(SwarmError::Config(_))));
    }

    #[test]
    fn inverted_range_rejected() {
        let cfg = SwarmConfig { eta_range: [3.0, 1.0], ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_speed_rejected() {
        let cfg = SwarmConfig { speed_range: [0.0, 1.0], ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_threshold_rejected() {
        let cfg = SwarmConfig { arrival_threshold: f64::NAN, ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn infinite_and_huge_values_rejected() {
        let bad = [
            SwarmConfig { offset_deg: f64::INFINITY, ..SwarmConfig::default() },
            SwarmConfig { offset_deg: 1e300, ..SwarmConfig::default() },
            SwarmConfig { arrival_threshold: f64::INFINITY, ..SwarmConfig::default() },
            SwarmConfig { refresh_interval_secs: f64::INFINITY, ..SwarmConfig::default() },
            SwarmConfig { refresh_interval_secs: 1e20, ..SwarmConfig::default() },
            SwarmConfig { progress_horizon_secs: f64::INFINITY, ..SwarmConfig::default() },
            SwarmConfig { rescuer_count: MAX_RESCUERS + 1, ..SwarmConfig::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(SwarmError::Config(_))), "{cfg:?}");
        }
    }

    #[test]
    fn limits_themselves_are_accepted() {
        let cfg = SwarmConfig {
            offset_deg:            MAX_OFFSET_DEG,
            refresh_interval_secs: MAX_REFRESH_INTERVAL_SECS,
            rescuer_count:         MAX_RESCUERS,
            ..SwarmConfig::default()
        };
        cfg.validate().unwrap();
    }
}
