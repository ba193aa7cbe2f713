// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

/// Energy unit conversion for the full boundary-value model (kT in pN·nm).
pub const CURVATURE_UNIT_CONVERSION: f64 = 4.114;

/// Energy unit conversion for the simplified treatment (kT in erg·Å scale).
pub const SIMPLIFIED_UNIT_CONVERSION: f64 = 4.11e-11;

/// Largest tolerated |Im| of a quantity that must be real.
pub const DEFAULT_IMAG_ERROR_THRESHOLD: f64 = 1e-6;

/// Default bracket and tolerance of the numeric s_min search.
pub const SMIN_LOWER: f64 = -2.0;
pub const SMIN_UPPER: f64 = 2.0;
pub const SMIN_TOLERANCE: f64 = 1e-5;

/// Defaults for the large-argument asymptotic Bessel K expansion.
pub const ASYMPTOTIC_TOLERANCE: f64 = 1e-12;
pub const ASYMPTOTIC_MAX_ITERATIONS: usize = 60;

/// Default end of the sampled radial grid [Å].
pub const DEFAULT_X_AXIS_END: f64 = 100.0;

/// Default radial sampling interval [Å].
pub const DEFAULT_SAMPLING_INTERVAL: f64 = 0.1;

/// Largest sampled grid accepted before allocation.
pub const MAX_GRID_POINTS: usize = 50_000_000;
