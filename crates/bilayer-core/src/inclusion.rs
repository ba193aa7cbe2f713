// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Inclusion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Inclusion-level calculations: from hydrophobic lengths to deformation
//! reports, and the energy difference between two inclusions in the same
//! bilayer (e.g. a channel before and after a conformational change).

use crate::curvature::Curvature;
use crate::simplified::{ElasticCoefficients, SimplifiedTreatment};
use crate::smin::{calculate_smin, SminObjective};
use bilayer_math::quadrature::integrate;
use bilayer_types::config::{
    BilayerConfig, InputDefaults, SamplingConfig, SminSearchConfig, SolverConfig,
};
use bilayer_types::error::{BilayerError, BilayerResult};
use bilayer_types::state::{EnergyProfile, PhysicalParameters, SimplifiedParameters};
use serde::{Deserialize, Serialize};

/// How the boundary slope `s` is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeMode {
    /// Numerical minimum of the full deformation energy.
    Relaxed,
    /// `s = rhead * c0`.
    Constrained,
    /// Given value.
    Manual(f64),
}

/// Form inputs of a two-inclusion calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BilayerInputs {
    pub d0: f64,
    /// Hydrophobic length of the first inclusion.
    pub l: f64,
    /// Hydrophobic length of the second inclusion.
    pub l_new: f64,
    pub r0: f64,
    pub ka: f64,
    pub kc: f64,
    pub kg: f64,
    pub alpha: f64,
    pub rhead: f64,
    pub c0: f64,
    pub slope_mode: SlopeMode,
    /// Rescale the second radius so that `r0² l` is unchanged.
    #[serde(default)]
    pub conserve_volume: bool,
}

impl BilayerInputs {
    /// Defaults of `config`, relaxed slope, fixed radius.
    pub fn from_config(config: &BilayerConfig) -> Self {
        let d = &config.defaults;
        BilayerInputs {
            d0: d.d0.value,
            l: d.l.value,
            l_new: d.l_new.value,
            r0: d.r0.value,
            ka: d.ka.value,
            kc: d.kc.value,
            kg: d.kg.value,
            alpha: d.alpha.value,
            rhead: d.rhead.value,
            c0: d.c0.value,
            slope_mode: SlopeMode::Relaxed,
            conserve_volume: false,
        }
    }

    /// Replace `d0`, `ka`, `kc` by the named lipid preset.
    pub fn with_lipid(mut self, config: &BilayerConfig, name: &str) -> BilayerResult<Self> {
        let lipid = config
            .lipid(name)
            .ok_or_else(|| BilayerError::ConfigError(format!("unknown lipid preset {name}")))?;
        self.d0 = lipid.d0;
        self.ka = lipid.ka;
        self.kc = lipid.kc;
        Ok(self)
    }

    pub fn validate(&self) -> BilayerResult<()> {
        if !(self.l.is_finite() && self.l > 0.0 && self.l_new.is_finite() && self.l_new > 0.0) {
            return Err(BilayerError::DomainError(format!(
                "hydrophobic lengths must be finite and > 0, got l={} l_new={}",
                self.l, self.l_new
            )));
        }
        if !self.rhead.is_finite() {
            return Err(BilayerError::DomainError(format!(
                "rhead must be finite, got {}",
                self.rhead
            )));
        }
        if let SlopeMode::Manual(s) = self.slope_mode {
            if !s.is_finite() {
                return Err(BilayerError::DomainError(format!("s must be finite, got {s}")));
            }
        }
        Ok(())
    }

    /// Check every input against the admissible range of its default.
    pub fn check_bounds(&self, defaults: &InputDefaults) -> BilayerResult<()> {
        for (name, bounded, value) in [
            ("d0", defaults.d0, self.d0),
            ("l", defaults.l, self.l),
            ("l_new", defaults.l_new, self.l_new),
            ("r0", defaults.r0, self.r0),
            ("ka", defaults.ka, self.ka),
            ("kc", defaults.kc, self.kc),
            ("kg", defaults.kg, self.kg),
            ("alpha", defaults.alpha, self.alpha),
            ("rhead", defaults.rhead, self.rhead),
            ("c0", defaults.c0, self.c0),
        ] {
            bounded.check(name, value)?;
        }
        if let SlopeMode::Manual(s) = self.slope_mode {
            defaults.s.check("s", s)?;
        }
        Ok(())
    }

    /// Boundary deformation of the first inclusion, `(d0 - l) / 2`.
    pub fn u0(&self) -> f64 {
        (self.d0 - self.l) / 2.0
    }

    /// Boundary deformation of the second inclusion, `(d0 - l_new) / 2`.
    pub fn u0_new(&self) -> f64 {
        (self.d0 - self.l_new) / 2.0
    }

    /// Radius of the second inclusion.
    pub fn r0_new(&self) -> f64 {
        if self.conserve_volume {
            self.r0 * (self.l / self.l_new).sqrt()
        } else {
            self.r0
        }
    }

    /// Parameters at boundary deformation `u0` and radius `r0`, slope unset.
    fn physical(&self, u0: f64, r0: f64) -> PhysicalParameters {
        PhysicalParameters {
            d0: self.d0,
            u0,
            r0,
            ka: self.ka,
            kc: self.kc,
            kg: self.kg,
            alpha: self.alpha,
            s: 0.0,
            c0: self.c0,
        }
    }

    /// Resolve the slope mode for one inclusion.
    pub fn resolve_slope(
        &self,
        u0: f64,
        r0: f64,
        solver: &SolverConfig,
        search: &SminSearchConfig,
    ) -> BilayerResult<f64> {
        match self.slope_mode {
            SlopeMode::Relaxed => {
                let objective = SminObjective::from_parameters(&self.physical(u0, r0));
                calculate_smin(&objective, solver, search)
            }
            SlopeMode::Constrained => Ok(self.rhead * self.c0),
            SlopeMode::Manual(s) => Ok(s),
        }
    }

    /// Fully resolved parameters of the first and second inclusion.
    pub fn inclusion_parameters(
        &self,
        solver: &SolverConfig,
        search: &SminSearchConfig,
    ) -> BilayerResult<(PhysicalParameters, PhysicalParameters)> {
        self.validate()?;
        let (u0, r0) = (self.u0(), self.r0);
        let (u0_new, r0_new) = (self.u0_new(), self.r0_new());
        let s = self.resolve_slope(u0, r0, solver, search)?;
        let s_new = self.resolve_slope(u0_new, r0_new, solver, search)?;
        Ok((
            self.physical(u0, r0).with_slope(s),
            self.physical(u0_new, r0_new).with_slope(s_new),
        ))
    }
}

/// Rectangle-rule integrals of the energy density grids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegratedEnergies {
    pub ce: f64,
    pub sd: f64,
    pub st: f64,
    pub mec: f64,
    pub def: f64,
}

/// Everything shown for one inclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformationReport {
    pub parameters: PhysicalParameters,
    /// Full free energy.
    pub total_energy: f64,
    /// Compression, splay and tension closed form only.
    pub legacy_energy: f64,
    pub mec_energy: f64,
    pub gc_energy: f64,
    /// `u(r)` from `r0` to the end of the x axis.
    pub profile: EnergyProfile,
    pub ce: EnergyProfile,
    pub sd: EnergyProfile,
    pub st: EnergyProfile,
    pub mec: EnergyProfile,
    /// `ce + sd + st + mec`
    pub def: EnergyProfile,
    pub integrated: IntegratedEnergies,
}

impl DeformationReport {
    pub fn compute(
        params: PhysicalParameters,
        solver: &SolverConfig,
        sampling: &SamplingConfig,
    ) -> BilayerResult<Self> {
        let curvature = Curvature::new(params, solver)?;
        let (start, stop, h) = (params.r0, sampling.x_axis_end, sampling.sampling_interval);

        let profile = curvature.profile_over_range(start, stop, h)?;
        let ce = curvature.compression_expansion_energy_over_range(start, stop, h)?;
        let sd = curvature.splay_distortion_energy_over_range(start, stop, h)?;
        let st = curvature.surface_tension_energy_over_range(start, stop, h)?;
        let mec = curvature.monolayer_equilibrium_energy_over_range(start, stop, h)?;
        let def = Curvature::sum_profiles(&ce, &sd, &st, &mec)?;

        let integrated = IntegratedEnergies {
            ce: integrate(&ce, h),
            sd: integrate(&sd, h),
            st: integrate(&st, h),
            mec: integrate(&mec, h),
            def: integrate(&def, h),
        };

        Ok(DeformationReport {
            parameters: params,
            total_energy: curvature.total_deformation_energy(),
            legacy_energy: curvature.total_deformation_energy_legacy(),
            mec_energy: curvature.monolayer_equilibrium_energy_total(),
            gc_energy: curvature.gaussian_curvature_energy_total(),
            profile,
            ce,
            sd,
            st,
            mec,
            def,
            integrated,
        })
    }
}

/// Two inclusions in the same bilayer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclusionComparison {
    pub first: DeformationReport,
    pub second: DeformationReport,
    /// `dG_def(first) - dG_def(second)`
    pub delta_g_bilayer: f64,
    /// From the simplified treatment of the first inclusion.
    pub elastic: ElasticCoefficients,
}

impl InclusionComparison {
    pub fn compute(inputs: &BilayerInputs, config: &BilayerConfig) -> BilayerResult<Self> {
        config.validate()?;
        inputs.check_bounds(&config.defaults)?;
        let (first_params, second_params) =
            inputs.inclusion_parameters(&config.solver, &config.smin_search)?;

        let first = DeformationReport::compute(first_params, &config.solver, &config.sampling)?;
        let second = DeformationReport::compute(second_params, &config.solver, &config.sampling)?;
        let delta_g_bilayer = first.total_energy - second.total_energy;

        // The simplified model is written for the bilayer, hence 4 ka.
        let simplified = SimplifiedTreatment::new(
            SimplifiedParameters {
                d0: inputs.d0,
                u0: first_params.u0,
                r0: first_params.r0,
                c0: inputs.c0,
                ka: 4.0 * inputs.ka,
                kc: inputs.kc,
                s: Some(first_params.s),
            },
            &config.solver,
        )?;
        let elastic = simplified.elastic_coefficients()?;

        log::info!(
            "dG_def = {:.4} / {:.4}, dG_bilayer = {:.4}",
            first.total_energy,
            second.total_energy,
            delta_g_bilayer
        );

        Ok(InclusionComparison {
            first,
            second,
            delta_g_bilayer,
            elastic,
        })
    }
}
