// src/curvature.rs
//
// Discrete curvature analysis of a free-energy profile on a uniform grid.
// The spinodal boundary sits where d2G/dphi2 changes sign; the sign change
// is bracketed on the grid and the crossing located by linear
// interpolation between the two bracketing abscissas.

use crate::grid::CompositionGrid;

/// Discrete derivative with the standard gradient convention: central
/// differences at interior points, one-sided differences at both ends.
/// The stencil is fixed so repeated application (second derivative) and
/// downstream tie-breaking stay reproducible.
pub fn gradient(values: &[f64], dx: f64) -> Vec<f64> {
    let n = values.len();
    let mut out = vec![0.0; n];
    if n < 2 {
        return out;
    }
    out[0] = (values[1] - values[0]) / dx;
    out[n - 1] = (values[n - 1] - values[n - 2]) / dx;
    for i in 1..n - 1 {
        out[i] = (values[i + 1] - values[i - 1]) / (2.0 * dx);
    }
    out
}

/// Second discrete derivative: the gradient operator applied twice.
pub fn second_derivative(values: &[f64], dx: f64) -> Vec<f64> {
    gradient(&gradient(values, dx), dx)
}

/// Locate the zero-crossings of d2G/dphi2 for one profile.
///
/// Each adjacent pair with a strict sign change (d2[i] * d2[i+1] < 0) is
/// resolved to sub-grid precision with the interpolation fraction
/// t = -d2[i] / (d2[i+1] - d2[i]) and crossing x0 = phi_i + t * dx. The
/// guard excludes d2[i+1] == d2[i], so the division is always well-defined.
/// A product of exactly zero (d2 vanishing on a grid node) is not counted
/// as a crossing. Returned compositions are sorted ascending; an empty
/// result means the profile has no curvature sign change at this chi.
pub fn spinodal_crossings(grid: &CompositionGrid, profile: &[f64]) -> Vec<f64> {
    assert_eq!(profile.len(), grid.len());
    let dx = grid.dx();
    let phi = grid.phi();
    let d2 = second_derivative(profile, dx);

    let mut crossings = Vec::new();
    for i in 0..d2.len().saturating_sub(1) {
        if d2[i] * d2[i + 1] < 0.0 {
            let t = -d2[i] / (d2[i + 1] - d2[i]);
            crossings.push(phi[i] + t * dx);
        }
    }
    crossings.sort_by(f64::total_cmp);
    crossings
}
