// src/sweep.rs
//
// Chi-sweep driver. Each chi is analysed independently from the shared
// read-only composition grid (profile -> minima + spinodal crossings), and
// the per-chi results are flattened into two (chi, phi) tables matching the
// export schema. The per-chi work is embarrassingly parallel; the rayon
// path returns per-chi sublists and merges them in chi order, so sequential
// and parallel runs produce identical tables.

use rayon::prelude::*;

use crate::curvature::spinodal_crossings;
use crate::error::ConfigError;
use crate::extrema::local_minima;
use crate::free_energy::mixing_free_energy;
use crate::grid::CompositionGrid;
use crate::params::{BlendParams, ChiRange};

/// One row of a result table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasePoint {
    pub chi: f64,
    pub phi: f64,
}

/// Full analysis of a single chi, kept for landscape rendering.
#[derive(Debug, Clone)]
pub struct ChiAnalysis {
    pub chi: f64,
    /// Compositions of strict local minima, phi ascending.
    pub minima: Vec<f64>,
    /// Interpolated curvature zero-crossings, phi ascending.
    pub spinodal: Vec<f64>,
}

/// Sweep output: the two flattened tables (chi ascending, phi ascending
/// within each chi) plus the theoretical critical point.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub minima: Vec<PhasePoint>,
    pub spinodal: Vec<PhasePoint>,
    pub chi_critical: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SweepSettings {
    /// Evaluate chis on the rayon pool. Off by default; results are
    /// identical either way, only wall-clock differs.
    pub parallel: bool,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self { parallel: false }
    }
}

/// Analyse one chi: build the free-energy profile, extract minima and
/// spinodal crossings, discard the profile.
pub fn analyze_chi(grid: &CompositionGrid, blend: &BlendParams, chi: f64) -> ChiAnalysis {
    let profile = mixing_free_energy(grid, chi, blend);
    ChiAnalysis {
        chi,
        minima: local_minima(grid, &profile),
        spinodal: spinodal_crossings(grid, &profile),
    }
}

/// Run the full sweep. Validation happens before any chi is evaluated, so
/// an invalid configuration produces no partial rows. A chi with no minima
/// or no crossings contributes nothing to the corresponding table; the two
/// tables may have different lengths.
pub fn run_sweep(
    grid: &CompositionGrid,
    blend: &BlendParams,
    range: &ChiRange,
    settings: &SweepSettings,
) -> Result<SweepResult, ConfigError> {
    blend.validate()?;
    let chis = range.values()?;

    let per_chi: Vec<ChiAnalysis> = if settings.parallel {
        chis.par_iter()
            .map(|&chi| analyze_chi(grid, blend, chi))
            .collect()
    } else {
        chis.iter()
            .map(|&chi| analyze_chi(grid, blend, chi))
            .collect()
    };

    let mut minima = Vec::new();
    let mut spinodal = Vec::new();
    for analysis in &per_chi {
        for &phi in &analysis.minima {
            minima.push(PhasePoint {
                chi: analysis.chi,
                phi,
            });
        }
        for &phi in &analysis.spinodal {
            spinodal.push(PhasePoint {
                chi: analysis.chi,
                phi,
            });
        }
    }

    Ok(SweepResult {
        minima,
        spinodal,
        chi_critical: blend.chi_critical(),
    })
}
