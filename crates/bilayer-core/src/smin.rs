// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Smin Search
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boundary slope that minimises the full deformation energy.
//!
//! Each trial slope builds a fresh [`Curvature`]. Trial points where the
//! model fails (non-physical residue, Bessel failure, singular matching)
//! score `+inf` so the search steers away from them instead of aborting.

use crate::curvature::Curvature;
use bilayer_math::minimize::{minimize, ScalarMinimum};
use bilayer_types::config::{SminSearchConfig, SolverConfig};
use bilayer_types::error::{BilayerError, BilayerResult};
use bilayer_types::state::PhysicalParameters;
use serde::{Deserialize, Serialize};

/// Every physical parameter except the slope being searched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SminObjective {
    pub d0: f64,
    pub u0: f64,
    pub r0: f64,
    pub ka: f64,
    pub kc: f64,
    pub kg: f64,
    pub alpha: f64,
    pub c0: f64,
}

impl SminObjective {
    pub fn from_parameters(params: &PhysicalParameters) -> Self {
        SminObjective {
            d0: params.d0,
            u0: params.u0,
            r0: params.r0,
            ka: params.ka,
            kc: params.kc,
            kg: params.kg,
            alpha: params.alpha,
            c0: params.c0,
        }
    }

    /// Full parameter set at slope `s`.
    pub fn at_slope(&self, s: f64) -> PhysicalParameters {
        PhysicalParameters {
            d0: self.d0,
            u0: self.u0,
            r0: self.r0,
            ka: self.ka,
            kc: self.kc,
            kg: self.kg,
            alpha: self.alpha,
            s,
            c0: self.c0,
        }
    }

    /// Total deformation energy at slope `s`, `+inf` where the model fails.
    pub fn energy(&self, s: f64, solver: &SolverConfig) -> f64 {
        match Curvature::new(self.at_slope(s), solver) {
            Ok(curvature) => curvature.total_deformation_energy(),
            Err(e) => {
                log::debug!("s = {s}: penalised ({e})");
                f64::INFINITY
            }
        }
    }
}

/// Bracketed search for the energy-minimising slope, with diagnostics.
pub fn search_smin(
    objective: &SminObjective,
    solver: &SolverConfig,
    search: &SminSearchConfig,
) -> BilayerResult<ScalarMinimum> {
    let minimum = minimize(
        search.lower,
        search.upper,
        |s| objective.energy(s, solver),
        search.tolerance,
    )?;
    if !minimum.fx.is_finite() {
        return Err(BilayerError::ConvergenceFailure {
            iterations: minimum.evaluations,
            message: format!(
                "no admissible slope in [{}, {}]",
                search.lower, search.upper
            ),
        });
    }
    log::info!(
        "s_min = {:.6} (dG = {:.6}) after {} evaluations",
        minimum.x,
        minimum.fx,
        minimum.evaluations
    );
    Ok(minimum)
}

/// Energy-minimising slope in the configured bracket.
pub fn calculate_smin(
    objective: &SminObjective,
    solver: &SolverConfig,
    search: &SminSearchConfig,
) -> BilayerResult<f64> {
    Ok(search_smin(objective, solver, search)?.x)
}
