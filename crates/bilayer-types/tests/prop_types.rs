// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Property-Based Tests (proptest) for bilayer-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for bilayer-types using proptest.
//!
//! Covers: radial grid construction, profile sums,
//! configuration serialization roundtrip.

use bilayer_types::config::BilayerConfig;
use bilayer_types::state::{EnergyProfile, PhysicalParameters};
use proptest::prelude::*;

// ── Radial Grid Invariants ───────────────────────────────────────────

proptest! {
    /// Point count is floor((stop - start) / interval).
    #[test]
    fn grid_point_count(
        start in 0.1f64..50.0,
        span in 0.0f64..100.0,
        interval in 0.05f64..5.0,
    ) {
        let stop = start + span;
        let profile = EnergyProfile::tabulate(start, stop, interval, |x| Ok(x)).unwrap();
        let expected = ((stop - start) / interval).floor() as usize;
        prop_assert_eq!(profile.len(), expected);
        prop_assert_eq!(profile.x.len(), profile.y.len());
    }

    /// First x is exactly start, then spacing is the interval.
    #[test]
    fn grid_spacing_uniform(
        start in 0.1f64..50.0,
        interval in 0.05f64..2.0,
        n in 2usize..200,
    ) {
        let stop = start + interval * (n as f64 + 0.5);
        let profile = EnergyProfile::tabulate(start, stop, interval, |_| Ok(0.0)).unwrap();
        prop_assert!(profile.len() >= 2);
        prop_assert_eq!(profile.x[0], start);
        for i in 1..profile.len() {
            let delta = profile.x[i] - profile.x[i - 1];
            prop_assert!((delta - interval).abs() < 1e-9 * (1.0 + profile.x[i].abs()),
                "Non-uniform spacing at {}: delta={}, interval={}", i, delta, interval);
        }
    }

    /// Grids never reach the stop value.
    #[test]
    fn grid_stays_below_stop(
        start in 0.1f64..50.0,
        span in 0.5f64..100.0,
        interval in 0.05f64..5.0,
    ) {
        let stop = start + span;
        let profile = EnergyProfile::tabulate(start, stop, interval, |_| Ok(0.0)).unwrap();
        for &x in profile.x.iter() {
            prop_assert!(x < stop + 1e-9, "x={} beyond stop={}", x, stop);
        }
    }

    /// Inverted ranges are rejected.
    #[test]
    fn grid_inverted_range_rejected(
        start in 1.0f64..50.0,
        back in 0.01f64..10.0,
    ) {
        prop_assert!(EnergyProfile::tabulate(start, start - back, 0.1, |_| Ok(0.0)).is_err());
    }
}

// ── Profile Sums ─────────────────────────────────────────────────────

proptest! {
    /// Summing k copies of a profile scales it by k.
    #[test]
    fn profile_sum_scales(k in 1usize..6, slope in -5.0f64..5.0) {
        let p = EnergyProfile::tabulate(1.0, 6.0, 0.25, |x| Ok(slope * x)).unwrap();
        let copies: Vec<&EnergyProfile> = std::iter::repeat(&p).take(k).collect();
        let sum = EnergyProfile::sum_of(&copies).unwrap();
        for ((_, y), (_, y0)) in sum.points().zip(p.points()) {
            prop_assert!((y - k as f64 * y0).abs() < 1e-9);
        }
    }

    /// Any positive radius with finite moduli validates.
    #[test]
    fn params_positive_radius_valid(
        r0 in 0.01f64..100.0,
        u0 in -10.0f64..10.0,
        s in -2.0f64..2.0,
    ) {
        let p = PhysicalParameters {
            d0: 28.0, u0, r0, ka: 218.0, kc: 60.0,
            kg: 0.0, alpha: 0.0, s, c0: 0.0,
        };
        prop_assert!(p.validate().is_ok());
        prop_assert!(p.with_slope(0.0).validate().is_ok());
    }
}

// ── Config Serialization ─────────────────────────────────────────────

proptest! {
    /// Sampling and search settings survive a JSON roundtrip.
    #[test]
    fn config_roundtrip(
        interval in 0.01f64..1.0,
        end in 10.0f64..500.0,
        tol in 1e-8f64..1e-2,
    ) {
        let mut cfg = BilayerConfig::default();
        cfg.sampling.sampling_interval = interval;
        cfg.sampling.x_axis_end = end;
        cfg.smin_search.tolerance = tol;
        let json = serde_json::to_string(&cfg).unwrap();
        let back: BilayerConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, cfg);
    }
}
