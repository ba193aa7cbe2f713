//! Complex helpers shared by the solvers.
//!
//! Square roots follow the principal branch of `num_complex`
//! (cut along the negative real axis, sign of a zero imaginary part decides
//! the side).

pub use num_complex::Complex64;

use bilayer_types::error::{BilayerError, BilayerResult};

/// The imaginary unit.
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// Principal square root of `i`, `exp(i*pi/4)`.
pub fn sqrt_i() -> Complex64 {
    I.sqrt()
}

/// Principal square root of `-i`, `exp(-i*pi/4)`.
pub fn sqrt_minus_i() -> Complex64 {
    (-I).sqrt()
}

/// Real part of `value`, provided its imaginary residue is within `threshold`.
///
/// A model evaluated inside its valid regime yields real energies; a residue
/// above the threshold means it is not.
pub fn checked_real(value: Complex64, threshold: f64, quantity: &str) -> BilayerResult<f64> {
    if !value.re.is_finite() || !value.im.is_finite() {
        return Err(BilayerError::NonPhysicalResult {
            quantity: quantity.to_string(),
            imag: value.im,
        });
    }
    if value.im.abs() > threshold {
        return Err(BilayerError::NonPhysicalResult {
            quantity: quantity.to_string(),
            imag: value.im,
        });
    }
    Ok(value.re)
}

/// Lift a real scalar into the complex plane.
#[inline]
pub fn real(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_sqrt_i_principal() {
        let r = sqrt_i();
        assert!((r.re - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((r.im - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((r * r - I).norm() < 1e-15);
    }

    #[test]
    fn test_sqrt_minus_i_principal() {
        let r = sqrt_minus_i();
        assert!((r.re - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((r.im + FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((r * r + I).norm() < 1e-15);
    }

    #[test]
    fn test_sqrt_negative_real_upper_side() {
        let r = real(-4.0).sqrt();
        assert!(r.re.abs() < 1e-15);
        assert!((r.im - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_checked_real_accepts_small_residue() {
        let v = checked_real(Complex64::new(3.5, 1e-9), 1e-6, "energy").unwrap();
        assert_eq!(v, 3.5);
    }

    #[test]
    fn test_checked_real_rejects_residue() {
        let err = checked_real(Complex64::new(3.5, 2e-3), 1e-6, "energy").unwrap_err();
        match err {
            BilayerError::NonPhysicalResult { quantity, imag } => {
                assert_eq!(quantity, "energy");
                assert_eq!(imag, 2e-3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_checked_real_rejects_nan() {
        assert!(checked_real(Complex64::new(f64::NAN, 0.0), 1e-6, "energy").is_err());
    }
}
