//! Rectangle-rule quadrature over sampled profiles.

use bilayer_types::state::EnergyProfile;
use ndarray::ArrayView1;

/// Left rectangle rule over uniformly spaced samples.
pub fn rectangle_sum(values: ArrayView1<'_, f64>, interval: f64) -> f64 {
    values.sum() * interval
}

/// Sum of the sampled values times `interval`.
///
/// No interpolation: the grid is assumed uniform with spacing `interval`.
pub fn integrate(profile: &EnergyProfile, interval: f64) -> f64 {
    rectangle_sum(profile.y.view(), interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rectangle_sum_view() {
        let y = array![1.0, 2.0, 3.0, 4.0];
        assert!((rectangle_sum(y.view(), 0.5) - 5.0).abs() < 1e-15);
        assert!((rectangle_sum(y.slice(ndarray::s![1..3]), 2.0) - 10.0).abs() < 1e-15);
    }

    #[test]
    fn test_constant_profile() {
        let p = EnergyProfile::tabulate(0.0, 10.0, 0.5, |_| Ok(3.0)).unwrap();
        assert!((integrate(&p, 0.5) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_profile_left_sum() {
        // Left rectangle rule on x over [0, 1): h * sum(i h) = h^2 n(n-1)/2
        let h = 0.25;
        let p = EnergyProfile::tabulate(0.0, 1.0, h, |x| Ok(x)).unwrap();
        assert!((integrate(&p, h) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_empty_profile_integrates_to_zero() {
        let p = EnergyProfile::tabulate(1.0, 1.0, 0.1, |x| Ok(x)).unwrap();
        assert_eq!(integrate(&p, 0.1), 0.0);
    }

    #[test]
    fn test_linearity() {
        let a = EnergyProfile::tabulate(2.0, 8.0, 0.1, |x| Ok(x.sin())).unwrap();
        let b = EnergyProfile::tabulate(2.0, 8.0, 0.1, |x| Ok(1.0 / x)).unwrap();
        let sum = EnergyProfile::sum_of(&[&a, &b]).unwrap();
        let lhs = integrate(&sum, 0.1);
        let rhs = integrate(&a, 0.1) + integrate(&b, 0.1);
        assert!((lhs - rhs).abs() < 1e-12);
    }
}
