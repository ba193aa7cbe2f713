// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Curvature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boundary-value solution for the bilayer deformation around a
//! cylindrical inclusion (Nielsen, Goulian & Andersen, Biophys. J. 74, 1998).
//!
//! The monolayer profile solves a fourth-order linear ODE whose decaying
//! solutions are `K0(k+ r)` and `K0(k- r)`, with `k±²` the roots of
//! `k⁴ - gamma k² + beta = 0`. The amplitudes `A±` are fixed by
//! `u(r0) = u0` and `u'(r0) = s`.
//!
//! A `Curvature` is immutable: change a parameter by building a new one.

use bilayer_math::bessel::{BesselBackend, BesselKEvaluator, BesselPair};
use bilayer_math::complex::{checked_real, real, Complex64};
use bilayer_types::config::SolverConfig;
use bilayer_types::error::{BilayerError, BilayerResult};
use bilayer_types::state::{EnergyProfile, PhysicalParameters};
use std::f64::consts::PI;

/// Relative size below which the boundary-matching determinant counts as zero.
const SINGULAR_DIV_FACTOR: f64 = 16.0;

/// `k±` and `k±²`, fixed per parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicRoots {
    pub k_plus: Complex64,
    pub k_minus: Complex64,
    pub k_plus_sq: Complex64,
    pub k_minus_sq: Complex64,
}

impl CharacteristicRoots {
    /// Roots of `k⁴ - gamma k² + beta = 0`, principal branch throughout.
    pub fn solve(gamma: f64, beta: f64) -> Self {
        let delta = real(gamma * gamma - 4.0 * beta).sqrt();
        let k_plus_sq = (gamma + delta) / 2.0;
        let k_minus_sq = (gamma - delta) / 2.0;
        CharacteristicRoots {
            k_plus: k_plus_sq.sqrt(),
            k_minus: k_minus_sq.sqrt(),
            k_plus_sq,
            k_minus_sq,
        }
    }
}

/// Amplitudes `A±` of the two decaying modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryAmplitudes {
    pub a_plus: Complex64,
    pub a_minus: Complex64,
}

#[derive(Debug, Clone)]
pub struct Curvature {
    params: PhysicalParameters,
    gamma: f64,
    beta: f64,
    roots: CharacteristicRoots,
    amplitudes: BoundaryAmplitudes,
    bessel: BesselBackend,
    imag_error_threshold: f64,
    unit_conversion: f64,
    legacy_energy: f64,
}

impl Curvature {
    /// Solve the boundary-value problem for `params`.
    pub fn new(params: PhysicalParameters, config: &SolverConfig) -> BilayerResult<Self> {
        params.validate()?;
        config.validate()?;

        let PhysicalParameters {
            d0,
            u0,
            r0,
            ka,
            kc,
            alpha,
            s,
            ..
        } = params;
        let bessel = BesselBackend::from(&config.bessel);
        let threshold = config.imag_error_threshold;

        let gamma = alpha / kc;
        let beta = 4.0 * ka / (d0 * d0 * kc);
        let roots = CharacteristicRoots::solve(gamma, beta);
        let CharacteristicRoots {
            k_plus: kp,
            k_minus: kn,
            k_plus_sq: kp2,
            k_minus_sq: kn2,
        } = roots;

        let p = bessel.k0_k1(kp * r0)?;
        let n = bessel.k0_k1(kn * r0)?;

        // Boundary matching: A+ K0p + A- K0n = u0, -(A+ kp K1p + A- kn K1n) = s.
        let t1 = kn * p.k0 * n.k1;
        let t2 = kp * n.k0 * p.k1;
        let div = t1 - t2;
        let scale = t1.norm() + t2.norm();
        if !(div.re.is_finite() && div.im.is_finite())
            || div.norm() <= SINGULAR_DIV_FACTOR * f64::EPSILON * scale
        {
            return Err(BilayerError::SingularSystem {
                magnitude: div.norm(),
            });
        }
        let a_plus = (kn * n.k1 * u0 + n.k0 * s) / div;
        let a_minus = (-kp * p.k1 * u0 - p.k0 * s) / div;

        // Closed form of the compression, splay and tension terms integrated
        // from r0 to infinity. Omits the equilibrium-curvature and Gaussian
        // terms; see `total_deformation_energy`.
        let splay = (a_plus * kp2 * p.k0 + a_minus * kn2 * n.k0) * s;
        let slope = (a_plus * kp * kp2 * p.k1 + a_minus * kn * kn2 * n.k1) * u0;
        let closed_form = (splay + slope + gamma * u0 * s) * (-PI * r0 * kc);
        let legacy = checked_real(closed_form, threshold, "free energy")?;
        let legacy_energy = legacy / config.unit_conversion;

        log::debug!(
            "Curvature r0={r0} u0={u0} s={s}: k+={kp} k-={kn} legacy dG={legacy_energy:.6}"
        );

        Ok(Curvature {
            params,
            gamma,
            beta,
            roots,
            amplitudes: BoundaryAmplitudes { a_plus, a_minus },
            bessel,
            imag_error_threshold: threshold,
            unit_conversion: config.unit_conversion,
            legacy_energy,
        })
    }

    /// Solve with the default solver configuration.
    pub fn with_defaults(params: PhysicalParameters) -> BilayerResult<Self> {
        Self::new(params, &SolverConfig::default())
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn roots(&self) -> &CharacteristicRoots {
        &self.roots
    }

    pub fn amplitudes(&self) -> &BoundaryAmplitudes {
        &self.amplitudes
    }

    /// `alpha / kc`
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// `4 ka / (d0² kc)`
    pub fn beta(&self) -> f64 {
        self.beta
    }

    fn bessel_at(&self, r: f64) -> BilayerResult<(BesselPair, BesselPair)> {
        if !r.is_finite() || r <= 0.0 {
            return Err(BilayerError::DomainError(format!(
                "radius must be finite and > 0, got {r}"
            )));
        }
        let p = self.bessel.k0_k1(self.roots.k_plus * r)?;
        let n = self.bessel.k0_k1(self.roots.k_minus * r)?;
        Ok((p, n))
    }

    fn check(&self, value: Complex64, quantity: &str, r: f64) -> BilayerResult<f64> {
        checked_real(value, self.imag_error_threshold, &format!("{quantity}({r})"))
    }

    /// `A+ k+² K0(k+ r) + A- k-² K0(k- r)`, i.e. `u''(r) + u'(r)/r`.
    fn laplacian(&self, p: &BesselPair, n: &BesselPair) -> Complex64 {
        let BoundaryAmplitudes { a_plus, a_minus } = self.amplitudes;
        self.roots.k_plus_sq * a_plus * p.k0 + self.roots.k_minus_sq * a_minus * n.k0
    }

    /// `A+ k+ K1(k+ r) + A- k- K1(k- r)`, i.e. `-u'(r)`.
    fn minus_slope(&self, p: &BesselPair, n: &BesselPair) -> Complex64 {
        let BoundaryAmplitudes { a_plus, a_minus } = self.amplitudes;
        self.roots.k_plus * a_plus * p.k1 + self.roots.k_minus * a_minus * n.k1
    }

    /// Deformation `u(r)`.
    pub fn profile(&self, r: f64) -> BilayerResult<f64> {
        let (p, n) = self.bessel_at(r)?;
        let BoundaryAmplitudes { a_plus, a_minus } = self.amplitudes;
        self.check(a_plus * p.k0 + a_minus * n.k0, "u", r)
    }

    /// Slope `u'(r)`.
    pub fn profile_slope(&self, r: f64) -> BilayerResult<f64> {
        let (p, n) = self.bessel_at(r)?;
        Ok(-self.check(self.minus_slope(&p, &n), "du", r)?)
    }

    /// Compression-expansion energy density `u² π r 4ka / d0²`.
    pub fn compression_expansion_energy(&self, r: f64) -> BilayerResult<f64> {
        let u = self.profile(r)?;
        let PhysicalParameters { d0, ka, .. } = self.params;
        Ok(u * u * (PI * r * 4.0 * ka) / (d0 * d0) / self.unit_conversion)
    }

    /// Splay-distortion energy density `(∇²u)² π r kc`.
    pub fn splay_distortion_energy(&self, r: f64) -> BilayerResult<f64> {
        let (p, n) = self.bessel_at(r)?;
        let value = self.laplacian(&p, &n).powi(2) * (PI * r * self.params.kc);
        Ok(self.check(value, "deltaGsd", r)? / self.unit_conversion)
    }

    /// Surface-tension energy density `(u')² π r alpha`.
    pub fn surface_tension_energy(&self, r: f64) -> BilayerResult<f64> {
        let (p, n) = self.bessel_at(r)?;
        let value = self.minus_slope(&p, &n).powi(2) * (PI * r * self.params.alpha);
        Ok(self.check(value, "deltaGst", r)? / self.unit_conversion)
    }

    /// Monolayer equilibrium-curvature energy density `-2π kc c0 r ∇²u`.
    pub fn monolayer_equilibrium_energy(&self, r: f64) -> BilayerResult<f64> {
        let (p, n) = self.bessel_at(r)?;
        let PhysicalParameters { kc, c0, .. } = self.params;
        let value = self.laplacian(&p, &n) * (-2.0 * PI * kc * c0 * r);
        Ok(self.check(value, "deltaGmec", r)? / self.unit_conversion)
    }

    /// Integrated equilibrium-curvature energy `2π kc c0 r0 s`.
    pub fn monolayer_equilibrium_energy_total(&self) -> f64 {
        let PhysicalParameters { r0, kc, s, c0, .. } = self.params;
        2.0 * PI * kc * c0 * r0 * s / self.unit_conversion
    }

    /// Gaussian-curvature energy `(π/2) kg s² / (1 + s²)`.
    pub fn gaussian_curvature_energy_total(&self) -> f64 {
        let PhysicalParameters { kg, s, .. } = self.params;
        (PI / 2.0) * kg * (s * s / (1.0 + s * s)) / self.unit_conversion
    }

    /// Compression, splay and tension energy only, kept for comparison with
    /// published figures. Use [`Curvature::total_deformation_energy`] for the
    /// full free energy.
    pub fn total_deformation_energy_legacy(&self) -> f64 {
        self.legacy_energy
    }

    /// Full deformation free energy including equilibrium-curvature and
    /// Gaussian terms.
    pub fn total_deformation_energy(&self) -> f64 {
        self.legacy_energy
            + self.monolayer_equilibrium_energy_total()
            + self.gaussian_curvature_energy_total()
    }

    fn over_range<F>(&self, start: f64, stop: f64, interval: f64, f: F) -> BilayerResult<EnergyProfile>
    where
        F: Fn(&Self, f64) -> BilayerResult<f64>,
    {
        EnergyProfile::tabulate(start, stop, interval, |r| f(self, r))
    }

    pub fn profile_over_range(
        &self,
        start: f64,
        stop: f64,
        interval: f64,
    ) -> BilayerResult<EnergyProfile> {
        self.over_range(start, stop, interval, Self::profile)
    }

    pub fn profile_slope_over_range(
        &self,
        start: f64,
        stop: f64,
        interval: f64,
    ) -> BilayerResult<EnergyProfile> {
        self.over_range(start, stop, interval, Self::profile_slope)
    }

    pub fn compression_expansion_energy_over_range(
        &self,
        start: f64,
        stop: f64,
        interval: f64,
    ) -> BilayerResult<EnergyProfile> {
        self.over_range(start, stop, interval, Self::compression_expansion_energy)
    }

    pub fn splay_distortion_energy_over_range(
        &self,
        start: f64,
        stop: f64,
        interval: f64,
    ) -> BilayerResult<EnergyProfile> {
        self.over_range(start, stop, interval, Self::splay_distortion_energy)
    }

    pub fn surface_tension_energy_over_range(
        &self,
        start: f64,
        stop: f64,
        interval: f64,
    ) -> BilayerResult<EnergyProfile> {
        self.over_range(start, stop, interval, Self::surface_tension_energy)
    }

    pub fn monolayer_equilibrium_energy_over_range(
        &self,
        start: f64,
        stop: f64,
        interval: f64,
    ) -> BilayerResult<EnergyProfile> {
        self.over_range(start, stop, interval, Self::monolayer_equilibrium_energy)
    }

    /// Pointwise `ce + sd + st + mec` on a shared grid.
    pub fn sum_profiles(
        ce: &EnergyProfile,
        sd: &EnergyProfile,
        st: &EnergyProfile,
        mec: &EnergyProfile,
    ) -> BilayerResult<EnergyProfile> {
        EnergyProfile::sum_of(&[ce, sd, st, mec])
    }
}
