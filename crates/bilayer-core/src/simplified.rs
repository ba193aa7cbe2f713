// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Simplified Treatment
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simplified treatment of the inclusion-induced deformation.
//!
//! The free energy is written as a quadratic form in the boundary
//! deformation `u0` and slope `s`,
//!
//! `dG = a1 u0² + a2 u0 s + a3 s² + alpha' s c0`,
//!
//! with `a1..a3` from Bessel K values at `±sqrt(i) r0 / lambda`. Being
//! quadratic in `s`, the energy-minimising slope has a closed form.
//!
//! `alpha' = 2π r0 kc` is a coupling constant, not the surface tension of
//! [`crate::curvature`].

use bilayer_math::bessel::{BesselBackend, BesselKEvaluator};
use bilayer_math::complex::{checked_real, sqrt_i, sqrt_minus_i, Complex64, I};
use bilayer_types::config::SolverConfig;
use bilayer_types::error::{BilayerError, BilayerResult};
use bilayer_types::state::SimplifiedParameters;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Coefficients of the relaxed-slope energy
/// `dG = Hb u0² + Hx u0 c0 + Hc c0²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticCoefficients {
    pub hb: f64,
    pub hx: f64,
    pub hc: f64,
}

#[derive(Debug, Clone)]
pub struct SimplifiedTreatment {
    params: SimplifiedParameters,
    s: f64,
    lambda: f64,
    coupling: f64,
    a1: Complex64,
    a2: Complex64,
    a3: Complex64,
    imag_error_threshold: f64,
    unit_conversion: f64,
}

impl SimplifiedTreatment {
    pub fn new(params: SimplifiedParameters, config: &SolverConfig) -> BilayerResult<Self> {
        config.validate()?;
        let SimplifiedParameters {
            d0,
            u0,
            r0,
            c0,
            ka,
            kc,
            s,
        } = params;
        for (name, value) in [("d0", d0), ("u0", u0), ("r0", r0), ("c0", c0), ("ka", ka), ("kc", kc)] {
            if !value.is_finite() {
                return Err(BilayerError::DomainError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if r0 <= 0.0 || ka <= 0.0 || kc <= 0.0 || d0 == 0.0 {
            return Err(BilayerError::DomainError(format!(
                "simplified treatment needs r0, ka, kc > 0 and d0 != 0, got r0={r0} ka={ka} kc={kc} d0={d0}"
            )));
        }
        let threshold = config.imag_error_threshold;
        let bessel = BesselBackend::from(&config.bessel);

        let lambda = (d0 * d0 * kc / ka).powf(0.25);
        let coupling = 2.0 * PI * r0 * kc;

        let rl = r0 / lambda;
        let mult = 2.0 * PI * rl;
        let ip = sqrt_i();
        let im = sqrt_minus_i();
        let p = bessel.k0_k1(ip * rl)?;
        let n = bessel.k0_k1(im * rl)?;

        let t1 = p.k0 * n.k1;
        let t2 = n.k0 * p.k1 * I;
        let div = t1 - t2;
        if !(div.re.is_finite() && div.im.is_finite())
            || div.norm() <= 16.0 * f64::EPSILON * (t1.norm() + t2.norm())
        {
            return Err(BilayerError::SingularSystem {
                magnitude: div.norm(),
            });
        }

        let f1 = im * p.k1 * n.k1 / div * (mult * rl * rl);
        let f2 = (n.k0 * p.k1 - p.k0 * n.k1 * I) / div * (mult * rl);
        let f3 = im * p.k0 * n.k0 / div * mult;

        let a1 = f1 * (kc / (r0 * r0));
        let a2 = f2 * (kc / r0);
        let a3 = f3 * kc;

        // NaN is accepted as "not given" for callers that carry plain floats.
        let s = match s {
            Some(value) if !value.is_nan() => value,
            _ => {
                let s_min = (a2 * u0 + coupling * c0) / (a3 * -2.0);
                checked_real(s_min, threshold, "Smin")?
            }
        };
        if !s.is_finite() {
            return Err(BilayerError::DomainError(format!("s must be finite, got {s}")));
        }

        log::debug!("Simplified treatment r0={r0} lambda={lambda:.4}: s={s:.6}");

        Ok(SimplifiedTreatment {
            params,
            s,
            lambda,
            coupling,
            a1,
            a2,
            a3,
            imag_error_threshold: threshold,
            unit_conversion: config.simplified_unit_conversion,
        })
    }

    pub fn with_defaults(params: SimplifiedParameters) -> BilayerResult<Self> {
        Self::new(params, &SolverConfig::default())
    }

    pub fn parameters(&self) -> &SimplifiedParameters {
        &self.params
    }

    /// The given slope, or the closed-form minimiser when none was given.
    pub fn slope(&self) -> f64 {
        self.s
    }

    /// Decay length `(d0² kc / ka)^(1/4)`.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// `alpha' = 2π r0 kc`.
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    pub fn a1(&self) -> BilayerResult<f64> {
        checked_real(self.a1, self.imag_error_threshold, "a1")
    }

    pub fn a2(&self) -> BilayerResult<f64> {
        checked_real(self.a2, self.imag_error_threshold, "a2")
    }

    pub fn a3(&self) -> BilayerResult<f64> {
        checked_real(self.a3, self.imag_error_threshold, "a3")
    }

    /// `a1 u0² + a2 s u0 + a3 s² + alpha' s c0` at the stored slope.
    pub fn deformation_energy(&self) -> BilayerResult<f64> {
        let SimplifiedParameters { u0, c0, .. } = self.params;
        let s = self.s;
        let value = self.a1 * (u0 * u0)
            + self.a2 * (s * u0)
            + self.a3 * (s * s)
            + self.coupling * s * c0;
        Ok(checked_real(value, self.imag_error_threshold, "free energy")? / self.unit_conversion)
    }

    /// `2π kc c0 r0 s`.
    pub fn equilibrium_curvature_energy(&self) -> f64 {
        let SimplifiedParameters { r0, c0, kc, .. } = self.params;
        2.0 * PI * kc * c0 * r0 * self.s / self.unit_conversion
    }

    /// `a1 - a2² / (4 a3)`
    pub fn hb(&self) -> BilayerResult<f64> {
        let value = self.a1 - self.a2 * self.a2 / (self.a3 * 4.0);
        Ok(checked_real(value, self.imag_error_threshold, "Hb")? / self.unit_conversion)
    }

    /// `-a2 π kc r0 / a3`
    pub fn hx(&self) -> BilayerResult<f64> {
        let SimplifiedParameters { r0, kc, .. } = self.params;
        let value = self.a2 * (-PI * kc * r0) / self.a3;
        Ok(checked_real(value, self.imag_error_threshold, "Hx")? / self.unit_conversion)
    }

    /// `-(π kc r0)² / a3`
    pub fn hc(&self) -> BilayerResult<f64> {
        let SimplifiedParameters { r0, kc, .. } = self.params;
        let value = Complex64::new(-(PI * kc * r0).powi(2), 0.0) / self.a3;
        Ok(checked_real(value, self.imag_error_threshold, "Hc")? / self.unit_conversion)
    }

    pub fn elastic_coefficients(&self) -> BilayerResult<ElasticCoefficients> {
        Ok(ElasticCoefficients {
            hb: self.hb()?,
            hx: self.hx()?,
            hc: self.hc()?,
        })
    }
}
