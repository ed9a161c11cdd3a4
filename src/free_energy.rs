use crate::grid::CompositionGrid;
use crate::params::BlendParams;

/// Flory-Huggins mixing free-energy density per lattice site, in units of kT:
///
///   dG(phi) = phi ln(phi)/N_A + (1-phi) ln(1-phi)/N_B + chi phi (1-phi)
///
/// Evaluated at every grid composition. The grid excludes phi = 0 and
/// phi = 1, so both logarithms are finite for all points. Pure and
/// deterministic; safe to evaluate independently per chi.
pub fn mixing_free_energy(grid: &CompositionGrid, chi: f64, blend: &BlendParams) -> Vec<f64> {
    grid.phi()
        .iter()
        .map(|&phi| {
            phi * phi.ln() / blend.n_a
                + (1.0 - phi) * (1.0 - phi).ln() / blend.n_b
                + chi * phi * (1.0 - phi)
        })
        .collect()
}
