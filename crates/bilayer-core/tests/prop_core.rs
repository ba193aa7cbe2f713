// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Property-Based Tests (proptest) for bilayer-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for bilayer-core using proptest.
//!
//! Covers: boundary conditions and slope of the deformation profile,
//! vanishing equilibrium-curvature terms, grid sizes, inclusion comparison.

use bilayer_core::curvature::Curvature;
use bilayer_core::inclusion::{BilayerInputs, InclusionComparison, SlopeMode};
use bilayer_types::config::{BilayerConfig, SolverConfig};
use bilayer_types::state::{EnergyProfile, PhysicalParameters};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = PhysicalParameters> {
    (
        20.0f64..40.0,
        -3.0f64..3.0,
        5.0f64..30.0,
        100.0f64..400.0,
        30.0f64..120.0,
        -10.0f64..10.0,
        0.0f64..1.0,
        -0.8f64..0.8,
        -0.05f64..0.05,
    )
        .prop_map(|(d0, u0, r0, ka, kc, kg, alpha, s, c0)| PhysicalParameters {
            d0,
            u0,
            r0,
            ka,
            kc,
            kg,
            alpha,
            s,
            c0,
        })
}

fn coarse_config() -> BilayerConfig {
    let mut config = BilayerConfig::default();
    config.sampling.x_axis_end = 50.0;
    config.sampling.sampling_interval = 0.5;
    config
}

// ── Profile Properties ───────────────────────────────────────────────

proptest! {
    /// u(r0) = u0 and u'(r0) = s.
    #[test]
    fn profile_meets_boundary_conditions(p in params_strategy()) {
        let curvature = Curvature::new(p, &SolverConfig::default());
        prop_assume!(curvature.is_ok());
        let curvature = curvature.unwrap();
        let scale = 1.0 + p.u0.abs() + p.s.abs();
        let u = curvature.profile(p.r0).unwrap();
        let du = curvature.profile_slope(p.r0).unwrap();
        prop_assert!((u - p.u0).abs() < 1e-8 * scale, "u(r0) = {} vs u0 = {}", u, p.u0);
        prop_assert!((du - p.s).abs() < 1e-8 * scale, "u'(r0) = {} vs s = {}", du, p.s);
    }

    /// profile_slope agrees with a centered difference of profile.
    #[test]
    fn profile_slope_matches_finite_difference(
        p in params_strategy(),
        t in 0.0f64..1.0,
    ) {
        let curvature = Curvature::new(p, &SolverConfig::default());
        prop_assume!(curvature.is_ok());
        let curvature = curvature.unwrap();
        let r = p.r0 * (1.0 + 9.0 * t);
        let h = 1e-4;
        let fd = (curvature.profile(r + h).unwrap() - curvature.profile(r - h).unwrap())
            / (2.0 * h);
        let du = curvature.profile_slope(r).unwrap();
        let scale = 1.0 + p.u0.abs() + p.s.abs();
        prop_assert!((fd - du).abs() < 1e-6 * scale, "r = {}: fd = {} du = {}", r, fd, du);
    }

    /// Without spontaneous curvature the equilibrium-curvature terms vanish.
    #[test]
    fn zero_spontaneous_curvature_has_no_mec(p in params_strategy()) {
        let p = PhysicalParameters { c0: 0.0, ..p };
        let curvature = Curvature::new(p, &SolverConfig::default());
        prop_assume!(curvature.is_ok());
        let curvature = curvature.unwrap();
        prop_assert_eq!(curvature.monolayer_equilibrium_energy_total(), 0.0);
        let mec = curvature
            .monolayer_equilibrium_energy_over_range(p.r0, p.r0 + 20.0, 0.5)
            .unwrap();
        prop_assert!(mec.y.iter().all(|&v| v == 0.0));
    }

    /// Every energy grid has floor((stop - start) / interval) points.
    #[test]
    fn energy_grids_have_expected_length(
        p in params_strategy(),
        span in 0.0f64..60.0,
        interval in 0.05f64..2.0,
    ) {
        let curvature = Curvature::new(p, &SolverConfig::default());
        prop_assume!(curvature.is_ok());
        let curvature = curvature.unwrap();
        let stop = p.r0 + span;
        let expected = EnergyProfile::point_count(p.r0, stop, interval).unwrap();
        let ce = curvature.compression_expansion_energy_over_range(p.r0, stop, interval).unwrap();
        let sd = curvature.splay_distortion_energy_over_range(p.r0, stop, interval).unwrap();
        prop_assert_eq!(ce.len(), expected);
        prop_assert_eq!(sd.len(), expected);
        if let Some(&last) = ce.x.last() {
            prop_assert!(last < stop);
        }
    }
}

// ── Inclusion Properties ─────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Swapping the two inclusions flips the sign of dG_bilayer.
    #[test]
    fn comparison_is_antisymmetric(
        l in 18.0f64..30.0,
        l_new in 18.0f64..30.0,
        s in -0.5f64..0.5,
    ) {
        let config = coarse_config();
        let forward = BilayerInputs {
            l,
            l_new,
            slope_mode: SlopeMode::Manual(s),
            ..BilayerInputs::from_config(&config)
        };
        let backward = BilayerInputs { l: l_new, l_new: l, ..forward.clone() };
        let a = InclusionComparison::compute(&forward, &config).unwrap();
        let b = InclusionComparison::compute(&backward, &config).unwrap();
        prop_assert!(
            (a.delta_g_bilayer + b.delta_g_bilayer).abs() < 1e-9 * (1.0 + a.delta_g_bilayer.abs())
        );
    }
}

#[test]
fn comparison_serializes_to_json() {
    let config = coarse_config();
    let inputs = BilayerInputs {
        slope_mode: SlopeMode::Constrained,
        c0: 0.01,
        ..BilayerInputs::from_config(&config)
    };
    let cmp = InclusionComparison::compute(&inputs, &config).unwrap();
    let json = serde_json::to_string(&cmp).unwrap();
    let back: InclusionComparison = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cmp);

    let mode: SlopeMode = serde_json::from_str(r#"{"manual":0.25}"#).unwrap();
    assert_eq!(mode, SlopeMode::Manual(0.25));
    let mode: SlopeMode = serde_json::from_str(r#""relaxed""#).unwrap();
    assert_eq!(mode, SlopeMode::Relaxed);
}
