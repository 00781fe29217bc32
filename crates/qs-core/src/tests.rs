//! Unit tests for qs-core primitives.

#[cfg(test)]
mod ids {
    use crate::ClientId;

    #[test]
    fn first_is_one() {
        assert_eq!(ClientId::FIRST, ClientId(1));
    }

    #[test]
    fn next_is_strictly_greater() {
        let id = ClientId(41);
        assert_eq!(id.next(), ClientId(42));
        assert!(id.next() > id);
    }

    #[test]
    fn display() {
        assert_eq!(ClientId(7).to_string(), "C7");
    }
}

#[cfg(test)]
mod geometry {
    use crate::{Point, Viewport};

    #[test]
    fn center_line() {
        assert_eq!(Viewport::new(900, 400).center_y(), 200);
        assert_eq!(Viewport::new(900, 401).center_y(), 200);
    }

    #[test]
    fn inside_is_not_past_bounds() {
        let v = Viewport::new(900, 400);
        assert!(!v.is_past_bounds(Point::new(0, 0), 50));
        assert!(!v.is_past_bounds(Point::new(900, 200), 50));
        assert!(!v.is_past_bounds(Point::new(-500, 200), 50), "left edge is no threshold");
    }

    #[test]
    fn each_axis_crosses_independently() {
        let v = Viewport::new(900, 400);
        assert!(v.is_past_bounds(Point::new(901, 200), 50));
        assert!(v.is_past_bounds(Point::new(100, -51), 50));
        assert!(v.is_past_bounds(Point::new(100, 451), 50));
        assert!(!v.is_past_bounds(Point::new(100, -50), 50));
        assert!(!v.is_past_bounds(Point::new(100, 450), 50));
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, Tick};

    #[test]
    fn counters_advance() {
        assert_eq!(Tick::ZERO.next().next(), Tick(2));
        assert_eq!(Frame::ZERO.next(), Frame(1));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
        assert_eq!(Frame(12).to_string(), "F12");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::config::{self, QueueConfig};
    use crate::{QsError, Viewport};

    #[test]
    fn defaults_match_constants() {
        let cfg = QueueConfig::default();
        assert_eq!(cfg.patience_min, config::PATIENCE_MIN);
        assert_eq!(cfg.patience_max, config::PATIENCE_MAX);
        assert_eq!(cfg.slot_width, 80);
        assert_eq!(cfg.base_offset, 50);
        assert_eq!(cfg.viewport, Viewport::new(900, 400));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn derived_positions() {
        let cfg = QueueConfig::default();
        assert_eq!(cfg.slot_x(0), 50);
        assert_eq!(cfg.slot_x(3), 290);
        assert_eq!(cfg.exit_x(), 1_000);
        assert_eq!(cfg.spawn_x(), 900);
    }

    #[test]
    fn intervals() {
        let cfg = QueueConfig::default();
        assert_eq!(cfg.step_interval(), Duration::from_millis(1_500));
        assert_eq!(cfg.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn empty_patience_range_rejected() {
        let cfg = QueueConfig { patience_min: 6, patience_max: 5, ..QueueConfig::default() };
        assert!(matches!(cfg.validate(), Err(QsError::Config(_))));
    }

    #[test]
    fn zero_divisor_rejected() {
        let cfg = QueueConfig { interpolation_divisor: 0, ..QueueConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = QueueConfig { frame_interval_ms: 0, ..QueueConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn degenerate_viewport_rejected() {
        let cfg = QueueConfig { viewport: Viewport::new(0, 400), ..QueueConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("viewport"), "got {err}");
    }

    #[test]
    fn exit_target_must_lie_past_right_edge() {
        for overshoot in [0, -200] {
            let cfg = QueueConfig { exit_overshoot: overshoot, ..QueueConfig::default() };
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().contains("overshoot"), "got {err}");
        }
        let cfg = QueueConfig { exit_overshoot: 1, ..QueueConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_exit_margin_rejected() {
        let cfg = QueueConfig { exit_margin: -1, ..QueueConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = QueueConfig { exit_margin: 0, ..QueueConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn viewport_too_large_for_exit_target_rejected() {
        let cfg = QueueConfig::default();
        let err = cfg.validate_viewport(Viewport::new(i32::MAX, 400)).unwrap_err();
        assert!(err.to_string().contains("too large"), "got {err}");
        assert!(cfg.validate_viewport(Viewport::new(i32::MAX - 100, 400)).is_ok());
        assert!(cfg.validate_viewport(Viewport::new(900, i32::MAX)).is_err());

        let cfg = QueueConfig { viewport: Viewport::new(i32::MAX, 400), ..cfg };
        assert!(cfg.validate().is_err());
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
            let a: i32 = r1.gen_range(0..1_000);
            let b: i32 = r2.gen_range(0..1_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_inclusive_bounds() {
        let mut rng = SimRng::new(0);
        let mut seen = [false; 6];
        for _ in 0..1_000 {
            let v = rng.gen_range(5..=10);
            assert!((5..=10).contains(&v));
            seen[(v - 5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in range should appear: {seen:?}");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
