//! Unit tests for eco-core primitives.

#[cfg(test)]
mod time {
    use crate::{Calendar, EcoError, Tick};

    #[test]
    fn tick_display() {
        assert_eq!(Tick(4).to_string(), "T4");
    }

    #[test]
    fn calendar_rolls_over_after_december() {
        let mut c = Calendar::new(2025, 11).unwrap();
        c.advance();
        assert_eq!(c, Calendar::january(2026));
    }

    #[test]
    fn calendar_advance_within_year() {
        let mut c = Calendar::january(2025);
        for _ in 0..5 {
            c.advance();
        }
        assert_eq!(c, Calendar { year: 2025, month: 5 });
    }

    #[test]
    fn invalid_month_rejected() {
        assert!(matches!(Calendar::new(2025, 12), Err(EcoError::InvalidMonth(12))));
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(Calendar::new(2025, 11).unwrap() < Calendar::january(2026));
        assert!(Calendar::new(2026, 3).unwrap() > Calendar::new(2025, 7).unwrap());
    }

    #[test]
    fn plus_months_and_months_until_agree() {
        let start = Calendar::new(2025, 10).unwrap();
        let later = start.plus_months(15);
        assert_eq!(later, Calendar::new(2027, 1).unwrap());
        assert_eq!(start.months_until(later), 15);
        assert_eq!(later.months_until(start), 0);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Calendar::january(2025).to_string(), "2025-01");
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.ranf(-10.0, 10.0), r2.ranf(-10.0, 10.0));
        }
    }

    #[test]
    fn ranf_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.ranf(-2.0, 2.0);
            assert!((-2.0..2.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn degenerate_range_returns_low() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.ranf(0.0, 0.0), 0.0);
        assert_eq!(rng.ranf(3.0, 1.0), 3.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{Calendar, EcoConfig, EcoError};

    #[test]
    fn default_runs_six_years() {
        let cfg = EcoConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.total_ticks(), 72);
    }

    #[test]
    fn terminal_before_start_rejected() {
        let cfg = EcoConfig {
            terminal: Calendar::january(2024),
            ..EcoConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(EcoError::TerminalBeforeStart { .. })));
    }

    #[test]
    fn out_of_range_month_rejected() {
        let cfg = EcoConfig {
            start: Calendar { year: 2025, month: 12 },
            ..EcoConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(EcoError::InvalidMonth(12))));
    }

    #[test]
    fn negative_population_rejected() {
        let mut cfg = EcoConfig::default();
        cfg.initial.deer = -1;
        assert!(matches!(cfg.validate(), Err(EcoError::Config(_))));
    }

    #[test]
    fn zero_length_run_is_valid() {
        let cfg = EcoConfig {
            terminal: Calendar::january(2025),
            ..EcoConfig::default()
        };
        cfg.validate().unwrap();
        assert_eq!(cfg.total_ticks(), 0);
    }
}
