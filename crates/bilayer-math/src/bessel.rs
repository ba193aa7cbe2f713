// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Bessel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Modified Bessel functions of the second kind, orders 0 and 1, for
//! complex argument.
//!
//! Two evaluators share the [`BesselKEvaluator`] contract:
//!
//! - [`PrecisionBesselK`]: double-precision on the whole cut plane.
//!   Ascending series (A&S 9.6.11/9.6.13) for |z| <= 2, Steed's continued
//!   fraction CF2 (Temme's form, Numerical Recipes `bessik`) for larger |z|,
//!   and the continuation `K_n(z) = (-1)^n K_n(-z) -/+ i*pi*I_n(-z)` where CF2
//!   does not converge in the left half-plane.
//! - [`AsymptoticBesselK`]: the large-argument expansion (A&S 9.7.2),
//!   only usable for large |z|.
//!
//! Failure codes follow the AMOS `zbesk` IERR convention so the solvers
//! report the same diagnostics whichever backend runs.

use crate::complex::Complex64;
use bilayer_types::config::BesselBackendConfig;
use bilayer_types::error::{BilayerError, BilayerResult};
use std::f64::consts::PI;

/// Euler–Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Radius below which the ascending series is used.
const SERIES_RADIUS: f64 = 2.0;

/// Hard cap on series terms. |z| <= 2 needs under 30; the I series at
/// |z| near the overflow limit needs about 1000.
const MAX_SERIES_TERMS: usize = 2000;

/// |Re z| beyond which `I_n(z)` overflows a double.
const I_OVERFLOW_REAL: f64 = 700.0;

/// Hard cap on CF2 iterations.
const CF2_MAX_ITERATIONS: usize = 1000;

/// |z| beyond which half the significant digits are lost (AMOS IERR=3).
const PARTIAL_LOSS_MAGNITUDE: f64 = 67_108_864.0; // 2^26

/// |z| beyond which all significant digits are lost (AMOS IERR=4).
const COMPLETE_LOSS_MAGNITUDE: f64 = 4_503_599_627_370_496.0; // 2^52

pub const CODE_INPUT: i32 = 1;
pub const CODE_OVERFLOW: i32 = 2;
pub const CODE_PARTIAL_LOSS: i32 = 3;
pub const CODE_COMPLETE_LOSS: i32 = 4;
pub const CODE_NO_CONVERGENCE: i32 = 5;

/// `K0(z)` and `K1(z)` at one argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BesselPair {
    pub k0: Complex64,
    pub k1: Complex64,
}

/// Evaluator contract used by the solvers.
pub trait BesselKEvaluator {
    /// `K0(z)` and `K1(z)`, or a typed failure.
    fn k0_k1(&self, z: Complex64) -> BilayerResult<BesselPair>;
}

/// Double-precision evaluator valid for `|arg z| <= pi`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrecisionBesselK;

/// Large-argument asymptotic expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsymptoticBesselK {
    pub tolerance: f64,
    pub max_iterations: usize,
}

/// Backend selected at run time from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BesselBackend {
    Precision(PrecisionBesselK),
    Asymptotic(AsymptoticBesselK),
}

impl Default for BesselBackend {
    fn default() -> Self {
        BesselBackend::Precision(PrecisionBesselK)
    }
}

impl From<&BesselBackendConfig> for BesselBackend {
    fn from(config: &BesselBackendConfig) -> Self {
        match *config {
            BesselBackendConfig::Precision => BesselBackend::Precision(PrecisionBesselK),
            BesselBackendConfig::Asymptotic {
                tolerance,
                max_iterations,
            } => BesselBackend::Asymptotic(AsymptoticBesselK {
                tolerance,
                max_iterations,
            }),
        }
    }
}

impl BesselKEvaluator for BesselBackend {
    fn k0_k1(&self, z: Complex64) -> BilayerResult<BesselPair> {
        match self {
            BesselBackend::Precision(b) => b.k0_k1(z),
            BesselBackend::Asymptotic(b) => b.k0_k1(z),
        }
    }
}

/// `K0(z)`, `K1(z)` with the precision backend.
pub fn bessel_k0_k1(z: Complex64) -> BilayerResult<BesselPair> {
    PrecisionBesselK.k0_k1(z)
}

fn failure(code: i32, z: Complex64, message: &str) -> BilayerError {
    BilayerError::NumericalFailure {
        routine: "besselk",
        code,
        message: format!("{message} at z = {z}"),
    }
}

fn is_finite(z: Complex64) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

impl BesselKEvaluator for PrecisionBesselK {
    fn k0_k1(&self, z: Complex64) -> BilayerResult<BesselPair> {
        if !is_finite(z) || (z.re == 0.0 && z.im == 0.0) {
            return Err(failure(CODE_INPUT, z, "argument must be finite and non-zero"));
        }
        let magnitude = z.norm();
        if magnitude > COMPLETE_LOSS_MAGNITUDE {
            return Err(failure(
                CODE_COMPLETE_LOSS,
                z,
                "complete loss of significance by argument reduction",
            ));
        }
        if magnitude > PARTIAL_LOSS_MAGNITUDE {
            return Err(failure(
                CODE_PARTIAL_LOSS,
                z,
                "loss of half the significant digits by argument reduction",
            ));
        }

        let pair = if z.re >= 0.0 {
            right_half_plane(z)?
        } else {
            left_half_plane(z)?
        };

        if !is_finite(pair.k0) || !is_finite(pair.k1) {
            return Err(failure(CODE_OVERFLOW, z, "result overflow"));
        }
        Ok(pair)
    }
}

fn right_half_plane(z: Complex64) -> BilayerResult<BesselPair> {
    if z.norm() <= SERIES_RADIUS {
        series_k(z)
    } else {
        steed_cf2(z).ok_or_else(|| {
            failure(
                CODE_NO_CONVERGENCE,
                z,
                "continued fraction did not converge",
            )
        })
    }
}

fn left_half_plane(z: Complex64) -> BilayerResult<BesselPair> {
    // CF2 converges slowly next to the cut; on the cut itself only the
    // continuation picks the side.
    if z.norm() > SERIES_RADIUS && z.im != 0.0 {
        if let Some(pair) = steed_cf2(z) {
            return Ok(pair);
        }
    }
    let w = -z;
    let kw = right_half_plane(w)?;
    let (i0, i1) = i0_i1(w)?;
    // Upper side of the cut for Im z >= 0, as AMOS.
    let side = if z.im < 0.0 { 1.0 } else { -1.0 };
    let ipi = Complex64::new(0.0, side * PI);
    Ok(BesselPair {
        k0: kw.k0 + ipi * i0,
        k1: -kw.k1 + ipi * i1,
    })
}

/// Modified Bessel functions of the first kind `I0(z)`, `I1(z)` by the
/// ascending series.
pub fn i0_i1(z: Complex64) -> BilayerResult<(Complex64, Complex64)> {
    if !is_finite(z) {
        return Err(failure(CODE_INPUT, z, "argument must be finite"));
    }
    if z.re.abs() > I_OVERFLOW_REAL {
        return Err(failure(CODE_OVERFLOW, z, "I series overflow"));
    }
    let q = z * z / 4.0;
    let mut t0 = Complex64::new(1.0, 0.0);
    let mut t1 = Complex64::new(1.0, 0.0);
    let mut s0 = t0;
    let mut s1 = t1;
    let mut converged = false;
    for k in 1..MAX_SERIES_TERMS {
        let kf = k as f64;
        t0 *= q / (kf * kf);
        t1 *= q / (kf * (kf + 1.0));
        s0 += t0;
        s1 += t1;
        if t0.norm() <= f64::EPSILON * s0.norm() && t1.norm() <= f64::EPSILON * s1.norm() {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(failure(CODE_NO_CONVERGENCE, z, "I series did not converge"));
    }
    let i1 = s1 * z / 2.0;
    if !is_finite(s0) || !is_finite(i1) {
        return Err(failure(CODE_OVERFLOW, z, "I series overflow"));
    }
    Ok((s0, i1))
}

/// Ascending series for `K0`, `K1`, |z| <= 2.
fn series_k(z: Complex64) -> BilayerResult<BesselPair> {
    let (i0, i1) = i0_i1(z)?;
    let q = z * z / 4.0;
    let log_half = (z / 2.0).ln();

    // K0 tail: sum_{k>=1} q^k/(k!)^2 * H_k
    let mut t0 = Complex64::new(1.0, 0.0);
    let mut s0 = Complex64::new(0.0, 0.0);
    // K1 tail: sum_{k>=0} [psi(k+1) + psi(k+2)] q^k/(k!(k+1)!)
    let mut t1 = Complex64::new(1.0, 0.0);
    let mut s1 = t1 * (1.0 - 2.0 * EULER_GAMMA);
    let mut harmonic = 0.0;
    for k in 1..MAX_SERIES_TERMS {
        let kf = k as f64;
        harmonic += 1.0 / kf;
        t0 *= q / (kf * kf);
        t1 *= q / (kf * (kf + 1.0));
        let d0 = t0 * harmonic;
        let d1 = t1 * (2.0 * (harmonic - EULER_GAMMA) + 1.0 / (kf + 1.0));
        s0 += d0;
        s1 += d1;
        if d0.norm() <= f64::EPSILON * s0.norm() && t1.norm() <= f64::EPSILON * s1.norm() {
            break;
        }
    }

    let k0 = -(log_half + EULER_GAMMA) * i0 + s0;
    let k1 = z.inv() + log_half * i1 - z / 4.0 * s1;
    Ok(BesselPair { k0, k1 })
}

/// Steed's CF2 for `K0`, `K1`; `None` when the iteration cap is hit.
fn steed_cf2(z: Complex64) -> Option<BesselPair> {
    let one = Complex64::new(1.0, 0.0);
    let a1 = 0.25;
    let mut b = 2.0 * (one + z);
    let mut d = b.inv();
    let mut h = d;
    let mut delh = d;
    let mut q1 = Complex64::new(0.0, 0.0);
    let mut q2 = one;
    let mut q = Complex64::new(a1, 0.0);
    let mut c = a1;
    let mut a = -a1;
    let mut s = one + q * delh;
    let mut converged = false;
    for i in 1..CF2_MAX_ITERATIONS {
        let fi = i as f64;
        a -= 2.0 * fi;
        c = -a * c / (fi + 1.0);
        let qnew = (q1 - b * q2) / a;
        q1 = q2;
        q2 = qnew;
        q += c * qnew;
        b += 2.0;
        d = (b + a * d).inv();
        delh = (b * d - 1.0) * delh;
        h += delh;
        let dels = q * delh;
        s += dels;
        if dels.norm() < f64::EPSILON * s.norm() {
            converged = true;
            break;
        }
    }
    if !converged {
        return None;
    }
    h *= a1;
    let k0 = (PI / (2.0 * z)).sqrt() * (-z).exp() / s;
    let k1 = k0 * (z + 0.5 - h) / z;
    Some(BesselPair { k0, k1 })
}

impl BesselKEvaluator for AsymptoticBesselK {
    fn k0_k1(&self, z: Complex64) -> BilayerResult<BesselPair> {
        let k0 = kv_asymptotic(z, 0, self.tolerance, self.max_iterations)?;
        let k1 = kv_asymptotic(z, 1, self.tolerance, self.max_iterations)?;
        Ok(BesselPair { k0, k1 })
    }
}

/// Large-argument expansion of `K_v(z)` for integer order `v`:
///
/// `K_v(z) ~ sqrt(pi/(2z)) e^{-z} [1 + (mu-1)/(8z) + (mu-1)(mu-9)/(2!(8z)^2) + ...]`,
/// `mu = 4v^2`.
///
/// Terms are added until both parts of the latest one are within
/// `tolerance`; the series is divergent so small |z| never gets there.
pub fn kv_asymptotic(
    z: Complex64,
    order: u32,
    tolerance: f64,
    max_iterations: usize,
) -> BilayerResult<Complex64> {
    let limit = 1.5 * PI;
    let phase = z.arg();
    if phase.abs() >= limit {
        return Err(BilayerError::DomainError(format!(
            "|arg z| = {} but should be less than {limit}",
            phase.abs()
        )));
    }
    if !is_finite(z) || z.norm() == 0.0 {
        return Err(BilayerError::DomainError(format!(
            "asymptotic expansion needs a finite non-zero argument, got {z}"
        )));
    }

    let v = f64::from(order);
    let mu = 4.0 * v * v;
    let z8 = z * 8.0;
    let mut current = Complex64::new(mu - 1.0, 0.0) / z8;
    let mut sum = Complex64::new(1.0, 0.0) + current;
    let mut n = 2usize;
    while current.re.abs() > tolerance || current.im.abs() > tolerance {
        let odd = (2 * n - 1) as f64;
        current = current * ((mu - odd * odd) / n as f64) / z8;
        sum += current;
        if n >= max_iterations {
            return Err(BilayerError::ConvergenceFailure {
                iterations: n,
                message: format!("asymptotic K{order} series still above {tolerance:e} at z = {z}"),
            });
        }
        n += 1;
    }

    let factor = (PI / (2.0 * z)).sqrt() * (-z).exp();
    Ok(factor * sum)
}
