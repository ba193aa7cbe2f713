// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Minimize
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bracketed 1-D minimization without derivatives.
//!
//! Brent's golden-section / parabolic-interpolation search in the form of
//! Forsythe, Malcolm & Moler, *Computer Methods for Mathematical
//! Computations* (1977), routine `fmin`.

use bilayer_types::error::{BilayerError, BilayerResult};

/// (3 - sqrt(5)) / 2, the golden-section ratio.
const GOLDEN: f64 = 0.381_966_011_250_105_1;

/// Safety cap; Brent's method terminates long before this on finite input.
const MAX_ITERATIONS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarMinimum {
    /// Abscissa of the minimum.
    pub x: f64,
    /// Objective value at `x`.
    pub fx: f64,
    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Minimize `f` over `[lo, hi]` to within `tol`.
///
/// `f` may return `+inf` to mark inadmissible points; NaN is treated the
/// same way since it never compares as an improvement.
pub fn minimize<F>(lo: f64, hi: f64, mut f: F, tol: f64) -> BilayerResult<ScalarMinimum>
where
    F: FnMut(f64) -> f64,
{
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(BilayerError::DomainError(format!(
            "minimization bracket must satisfy lo < hi, got [{lo}, {hi}]"
        )));
    }
    if !tol.is_finite() || tol <= 0.0 {
        return Err(BilayerError::DomainError(format!(
            "minimization tolerance must be finite and > 0, got {tol}"
        )));
    }

    let eps = f64::EPSILON.sqrt();
    let mut a = lo;
    let mut b = hi;
    let mut v = a + GOLDEN * (b - a);
    let mut w = v;
    let mut x = v;
    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    let mut fx = f(x);
    let mut evaluations = 1;
    let mut fv = fx;
    let mut fw = fx;

    for _ in 0..MAX_ITERATIONS {
        let xm = 0.5 * (a + b);
        let tol1 = eps * x.abs() + tol / 3.0;
        let tol2 = 2.0 * tol1;

        if (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            return Ok(ScalarMinimum { x, fx, evaluations });
        }

        let mut golden = true;
        if e.abs() > tol1 {
            // Fit a parabola through x, v, w.
            let mut r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = d;

            // Written so that NaN from infinite objective values falls
            // through to golden section.
            let acceptable =
                p.abs() < (0.5 * q * r).abs() && p > q * (a - x) && p < q * (b - x);
            if acceptable {
                d = p / q;
                let u = x + d;
                if (u - a) < tol2 || (b - u) < tol2 {
                    d = tol1.copysign(xm - x);
                }
                golden = false;
            }
        }
        if golden {
            e = if x >= xm { a - x } else { b - x };
            d = GOLDEN * e;
        }

        let u = if d.abs() >= tol1 {
            x + d
        } else {
            x + tol1.copysign(d)
        };
        let fu = f(u);
        evaluations += 1;

        if fu <= fx {
            if u < x {
                b = x;
            } else {
                a = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    Err(BilayerError::ConvergenceFailure {
        iterations: MAX_ITERATIONS,
        message: format!("Brent search on [{lo}, {hi}] did not reach tolerance {tol:e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_minimum() {
        let m = minimize(-2.0, 2.0, |x| (x - 0.3).powi(2) + 1.0, 1e-5).unwrap();
        assert!((m.x - 0.3).abs() < 1e-5, "x = {}", m.x);
        assert!((m.fx - 1.0).abs() < 1e-9);
        assert!(m.evaluations < 50);
    }

    #[test]
    fn test_non_quadratic_minimum() {
        // cosh has its minimum at 0
        let m = minimize(-2.0, 1.5, f64::cosh, 1e-8).unwrap();
        assert!(m.x.abs() < 1e-6, "x = {}", m.x);
    }

    #[test]
    fn test_minimum_at_bracket_edge() {
        let m = minimize(0.0, 1.0, |x| x, 1e-6).unwrap();
        assert!(m.x < 1e-5, "x = {}", m.x);
        assert!(m.x >= 0.0);
    }

    #[test]
    fn test_infinite_region_penalised() {
        let f = |x: f64| {
            if x < -1.0 {
                f64::INFINITY
            } else {
                (x + 0.5).powi(2)
            }
        };
        let m = minimize(-2.0, 2.0, f, 1e-6).unwrap();
        assert!((m.x + 0.5).abs() < 1e-5, "x = {}", m.x);
    }

    #[test]
    fn test_nan_objective_does_not_hang() {
        let m = minimize(-1.0, 1.0, |x| if x > 0.0 { f64::NAN } else { -x }, 1e-6).unwrap();
        assert!(m.x <= 0.0);
        assert!(m.fx.is_finite());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(minimize(1.0, 1.0, |x| x, 1e-5).is_err());
        assert!(minimize(2.0, 1.0, |x| x, 1e-5).is_err());
        assert!(minimize(f64::NAN, 1.0, |x| x, 1e-5).is_err());
        assert!(minimize(0.0, 1.0, |x| x, 0.0).is_err());
    }
}
