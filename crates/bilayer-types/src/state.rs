// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::MAX_GRID_POINTS;
use crate::error::{BilayerError, BilayerResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Physical parameters of one bilayer/inclusion pair.
///
/// Lengths in Å, moduli in the units of the Nielsen–Goulian–Andersen model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Bilayer half-thickness.
    pub d0: f64,
    /// Monolayer deformation at the inclusion boundary.
    pub u0: f64,
    /// Inclusion radius.
    pub r0: f64,
    /// Area compression-expansion modulus.
    pub ka: f64,
    /// Splay-distortion (bending) modulus.
    pub kc: f64,
    /// Gaussian curvature modulus.
    pub kg: f64,
    /// Surface-tension-like coefficient.
    pub alpha: f64,
    /// Boundary slope u'(r0).
    pub s: f64,
    /// Monolayer spontaneous curvature.
    pub c0: f64,
}

impl PhysicalParameters {
    /// Check the invariants every solver relies on.
    pub fn validate(&self) -> BilayerResult<()> {
        let fields = [
            ("d0", self.d0),
            ("u0", self.u0),
            ("r0", self.r0),
            ("ka", self.ka),
            ("kc", self.kc),
            ("kg", self.kg),
            ("alpha", self.alpha),
            ("s", self.s),
            ("c0", self.c0),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(BilayerError::DomainError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.d0 == 0.0 {
            return Err(BilayerError::DomainError("d0 must be non-zero".to_string()));
        }
        if self.kc == 0.0 {
            return Err(BilayerError::DomainError("kc must be non-zero".to_string()));
        }
        if self.r0 <= 0.0 {
            return Err(BilayerError::DomainError(format!(
                "r0 must be > 0, got {}",
                self.r0
            )));
        }
        Ok(())
    }

    /// Same parameters with a different boundary slope.
    pub fn with_slope(&self, s: f64) -> Self {
        Self { s, ..*self }
    }
}

/// Reduced parameter set of the simplified treatment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedParameters {
    pub d0: f64,
    pub u0: f64,
    pub r0: f64,
    pub c0: f64,
    pub ka: f64,
    pub kc: f64,
    /// `None` (or NaN) requests the closed-form energy-minimising slope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
}

/// Sampled (radius, value) grid, ascending in radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl EnergyProfile {
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> BilayerResult<Self> {
        if x.len() != y.len() {
            return Err(BilayerError::DomainError(format!(
                "profile x/y length mismatch: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        Ok(EnergyProfile { x, y })
    }

    /// Number of points `floor((stop - start) / interval)` for a grid.
    pub fn point_count(start: f64, stop: f64, interval: f64) -> BilayerResult<usize> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(BilayerError::DomainError(format!(
                "grid bounds must be finite, got [{start}, {stop}]"
            )));
        }
        if start > stop {
            return Err(BilayerError::InvalidRange { start, stop });
        }
        if !interval.is_finite() || interval <= 0.0 {
            return Err(BilayerError::DomainError(format!(
                "sampling interval must be finite and > 0, got {interval}"
            )));
        }
        let count = ((stop - start) / interval).floor();
        if !count.is_finite() || count > MAX_GRID_POINTS as f64 {
            return Err(BilayerError::DomainError(format!(
                "grid [{start}, {stop}) with interval {interval} exceeds {MAX_GRID_POINTS} points"
            )));
        }
        Ok(count as usize)
    }

    /// Sample `f` on `start, start + interval, ...`.
    ///
    /// x-values accumulate by repeated addition of `interval`, so the first
    /// point is exactly `start`.
    pub fn tabulate<F>(start: f64, stop: f64, interval: f64, mut f: F) -> BilayerResult<Self>
    where
        F: FnMut(f64) -> BilayerResult<f64>,
    {
        let n = Self::point_count(start, stop, interval)?;
        let mut x: Array1<f64> = Array1::zeros(n);
        let mut y: Array1<f64> = Array1::zeros(n);
        for i in 0..n {
            x[i] = if i == 0 { start } else { x[i - 1] + interval };
            y[i] = f(x[i])?;
        }
        Ok(EnergyProfile { x, y })
    }

    /// Pointwise sum of profiles sharing the x-values of the first one.
    pub fn sum_of(profiles: &[&EnergyProfile]) -> BilayerResult<Self> {
        let first = profiles.first().ok_or_else(|| {
            BilayerError::DomainError("cannot sum an empty set of profiles".to_string())
        })?;
        let mut y: Array1<f64> = Array1::zeros(first.len());
        for (k, profile) in profiles.iter().enumerate() {
            if profile.len() != first.len() {
                return Err(BilayerError::DomainError(format!(
                    "profile {k} has {} points, expected {}",
                    profile.len(),
                    first.len()
                )));
            }
            y += &profile.y;
        }
        Ok(EnergyProfile {
            x: first.x.clone(),
            y,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs in ascending x.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
