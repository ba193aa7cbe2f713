// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    ASYMPTOTIC_MAX_ITERATIONS, ASYMPTOTIC_TOLERANCE, CURVATURE_UNIT_CONVERSION,
    DEFAULT_IMAG_ERROR_THRESHOLD, DEFAULT_SAMPLING_INTERVAL, DEFAULT_X_AXIS_END,
    SIMPLIFIED_UNIT_CONVERSION, SMIN_LOWER, SMIN_TOLERANCE, SMIN_UPPER,
};
use crate::error::{BilayerError, BilayerResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level calculation configuration.
/// Every section is optional in JSON and falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BilayerConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub smin_search: SminSearchConfig,
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default = "default_lipids")]
    pub lipids: Vec<LipidPreset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Largest |Im| accepted for a quantity that must be real.
    #[serde(default = "default_imag_error_threshold")]
    pub imag_error_threshold: f64,
    /// Divisor applied to energies of the boundary-value model.
    #[serde(default = "default_unit_conversion")]
    pub unit_conversion: f64,
    /// Divisor applied to energies of the simplified treatment.
    #[serde(default = "default_simplified_unit_conversion")]
    pub simplified_unit_conversion: f64,
    #[serde(default)]
    pub bessel: BesselBackendConfig,
}

/// Which Bessel K evaluator backs the solvers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BesselBackendConfig {
    #[default]
    Precision,
    Asymptotic {
        #[serde(default = "default_asymptotic_tolerance")]
        tolerance: f64,
        #[serde(default = "default_asymptotic_max_iterations")]
        max_iterations: usize,
    },
}

/// Radial sampling of profile and energy grids. Grids start at r0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "default_x_axis_end")]
    pub x_axis_end: f64,
    #[serde(default = "default_sampling_interval")]
    pub sampling_interval: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SminSearchConfig {
    #[serde(default = "default_smin_lower")]
    pub lower: f64,
    #[serde(default = "default_smin_upper")]
    pub upper: f64,
    #[serde(default = "default_smin_tolerance")]
    pub tolerance: f64,
}

/// A default form value with optional admissible bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedValue {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl BoundedValue {
    pub const fn new(value: f64, min: f64, max: f64) -> Self {
        BoundedValue {
            value,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Check `value` against the bounds, naming the parameter on failure.
    pub fn check(&self, name: &str, value: f64) -> BilayerResult<f64> {
        if !value.is_finite() {
            return Err(BilayerError::ConfigError(format!(
                "value {value} in param {name} is not a valid number"
            )));
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(BilayerError::ConfigError(format!(
                    "value {value} is bigger than max value {max} for param {name}"
                )));
            }
        }
        if let Some(min) = self.min {
            if value < min {
                return Err(BilayerError::ConfigError(format!(
                    "value {value} is smaller than min value {min} for param {name}"
                )));
            }
        }
        Ok(value)
    }
}

/// Default inputs of a calculation (Å and model modulus units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    pub d0: BoundedValue,
    /// Hydrophobic length of the first inclusion.
    pub l: BoundedValue,
    /// Hydrophobic length of the second inclusion.
    pub l_new: BoundedValue,
    pub r0: BoundedValue,
    pub ka: BoundedValue,
    pub kc: BoundedValue,
    pub kg: BoundedValue,
    pub alpha: BoundedValue,
    /// Lipid head-group radius used by the constrained slope s = rhead * c0.
    pub rhead: BoundedValue,
    pub s: BoundedValue,
    pub c0: BoundedValue,
}

/// Named lipid overriding d0, ka and kc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LipidPreset {
    pub name: String,
    pub d0: f64,
    pub ka: f64,
    pub kc: f64,
}

fn default_imag_error_threshold() -> f64 {
    DEFAULT_IMAG_ERROR_THRESHOLD
}
fn default_unit_conversion() -> f64 {
    CURVATURE_UNIT_CONVERSION
}
fn default_simplified_unit_conversion() -> f64 {
    SIMPLIFIED_UNIT_CONVERSION
}
fn default_asymptotic_tolerance() -> f64 {
    ASYMPTOTIC_TOLERANCE
}
fn default_asymptotic_max_iterations() -> usize {
    ASYMPTOTIC_MAX_ITERATIONS
}
fn default_x_axis_end() -> f64 {
    DEFAULT_X_AXIS_END
}
fn default_sampling_interval() -> f64 {
    DEFAULT_SAMPLING_INTERVAL
}
fn default_smin_lower() -> f64 {
    SMIN_LOWER
}
fn default_smin_upper() -> f64 {
    SMIN_UPPER
}
fn default_smin_tolerance() -> f64 {
    SMIN_TOLERANCE
}
fn default_lipids() -> Vec<LipidPreset> {
    vec![LipidPreset {
        name: "DC18:1PC".to_string(),
        d0: 28.0,
        ka: 218.0,
        kc: 60.0,
    }]
}

impl Default for BilayerConfig {
    fn default() -> Self {
        BilayerConfig {
            solver: SolverConfig::default(),
            sampling: SamplingConfig::default(),
            smin_search: SminSearchConfig::default(),
            defaults: InputDefaults::default(),
            lipids: default_lipids(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            imag_error_threshold: default_imag_error_threshold(),
            unit_conversion: default_unit_conversion(),
            simplified_unit_conversion: default_simplified_unit_conversion(),
            bessel: BesselBackendConfig::default(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            x_axis_end: default_x_axis_end(),
            sampling_interval: default_sampling_interval(),
        }
    }
}

impl Default for SminSearchConfig {
    fn default() -> Self {
        SminSearchConfig {
            lower: default_smin_lower(),
            upper: default_smin_upper(),
            tolerance: default_smin_tolerance(),
        }
    }
}

impl Default for InputDefaults {
    fn default() -> Self {
        InputDefaults {
            d0: BoundedValue::new(28.0, 1.0, 100.0),
            l: BoundedValue::new(24.0, 1.0, 100.0),
            l_new: BoundedValue::new(22.0, 1.0, 100.0),
            r0: BoundedValue::new(10.0, 0.1, 100.0),
            ka: BoundedValue::new(218.0, 1.0, 10_000.0),
            kc: BoundedValue::new(60.0, 1.0, 10_000.0),
            kg: BoundedValue::new(0.0, -10_000.0, 10_000.0),
            alpha: BoundedValue::new(0.0, 0.0, 1_000.0),
            rhead: BoundedValue::new(5.0, 0.0, 50.0),
            s: BoundedValue::new(0.0, -2.0, 2.0),
            c0: BoundedValue::new(0.0, -1.0, 1.0),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> BilayerResult<()> {
        if !self.imag_error_threshold.is_finite() || self.imag_error_threshold <= 0.0 {
            return Err(BilayerError::ConfigError(format!(
                "imag_error_threshold must be finite and > 0, got {}",
                self.imag_error_threshold
            )));
        }
        for (name, value) in [
            ("unit_conversion", self.unit_conversion),
            ("simplified_unit_conversion", self.simplified_unit_conversion),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(BilayerError::ConfigError(format!(
                    "{name} must be finite and non-zero, got {value}"
                )));
            }
        }
        if let BesselBackendConfig::Asymptotic {
            tolerance,
            max_iterations,
        } = self.bessel
        {
            if !tolerance.is_finite() || tolerance <= 0.0 || max_iterations == 0 {
                return Err(BilayerError::ConfigError(format!(
                    "asymptotic Bessel backend needs tolerance > 0 and max_iterations >= 1, \
                     got tolerance={tolerance}, max_iterations={max_iterations}"
                )));
            }
        }
        Ok(())
    }
}

impl BilayerConfig {
    /// Load from a JSON file and validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> BilayerResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file, or fall back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(config) => {
                log::info!("Loaded bilayer configuration from {:?}", path.as_ref());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load bilayer configuration from {:?}: {}, using defaults",
                    path.as_ref(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> BilayerResult<()> {
        self.solver.validate()?;

        let sampling = &self.sampling;
        if !sampling.sampling_interval.is_finite() || sampling.sampling_interval <= 0.0 {
            return Err(BilayerError::ConfigError(format!(
                "sampling_interval must be finite and > 0, got {}",
                sampling.sampling_interval
            )));
        }
        if !sampling.x_axis_end.is_finite() {
            return Err(BilayerError::ConfigError(
                "x_axis_end must be finite".to_string(),
            ));
        }

        let search = &self.smin_search;
        if !(search.lower.is_finite() && search.upper.is_finite() && search.lower < search.upper)
        {
            return Err(BilayerError::ConfigError(format!(
                "smin_search bracket must satisfy lower < upper, got [{}, {}]",
                search.lower, search.upper
            )));
        }
        if !search.tolerance.is_finite() || search.tolerance <= 0.0 {
            return Err(BilayerError::ConfigError(format!(
                "smin_search tolerance must be finite and > 0, got {}",
                search.tolerance
            )));
        }

        let d = &self.defaults;
        for (name, bounded) in [
            ("d0", d.d0),
            ("l", d.l),
            ("l_new", d.l_new),
            ("r0", d.r0),
            ("ka", d.ka),
            ("kc", d.kc),
            ("kg", d.kg),
            ("alpha", d.alpha),
            ("rhead", d.rhead),
            ("s", d.s),
            ("c0", d.c0),
        ] {
            bounded.check(name, bounded.value)?;
        }

        for lipid in &self.lipids {
            if !(lipid.d0.is_finite() && lipid.ka.is_finite() && lipid.kc.is_finite())
                || lipid.d0 == 0.0
                || lipid.kc == 0.0
            {
                return Err(BilayerError::ConfigError(format!(
                    "lipid preset {} needs finite d0, ka, kc with d0, kc non-zero",
                    lipid.name
                )));
            }
        }
        Ok(())
    }

    pub fn lipid(&self, name: &str) -> Option<&LipidPreset> {
        self.lipids.iter().find(|l| l.name == name)
    }
}
