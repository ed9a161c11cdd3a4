// tests/validation.rs
//
// Integration-style validation tests (phase-behaviour sanity checks).
// Run with: cargo test
// Or only these tests: cargo test --test validation

use fh_sim::curvature::spinodal_crossings;
use fh_sim::error::ConfigError;
use fh_sim::extrema::local_minima;
use fh_sim::free_energy::mixing_free_energy;
use fh_sim::grid::{CompositionGrid, DEFAULT_GRID_POINTS};
use fh_sim::params::{BlendParams, ChiRange};
use fh_sim::sweep::{run_sweep, SweepSettings};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Grid index of a composition produced by the detector (phi = (i+1) * dx).
fn grid_index(phi: f64, dx: f64) -> usize {
    (phi / dx).round() as usize - 1
}

#[test]
fn athermal_symmetric_blend_has_single_central_minimum() {
    // chi = 0: entropy only. The free energy is convex with one well at
    // phi = 0.5. 4999 points put 0.5 exactly on a grid node.
    let grid = CompositionGrid::new(4999).unwrap();
    let blend = BlendParams::new(100.0, 100.0).unwrap();
    let range = ChiRange {
        start: 0.0,
        end: 0.0,
        step: 0.01,
    };

    let result = run_sweep(&grid, &blend, &range, &SweepSettings::default()).unwrap();

    assert_eq!(result.minima.len(), 1, "expected one entropy-driven minimum");
    assert_eq!(result.minima[0].chi, 0.0);
    assert!(
        approx_eq(result.minima[0].phi, 0.5, 1e-12),
        "minimum at {}, expected 0.5",
        result.minima[0].phi
    );
    assert!(
        result.spinodal.is_empty(),
        "convex athermal free energy must have no spinodal crossings"
    );
}

#[test]
fn supercritical_blend_demixes_into_two_symmetric_wells() {
    // N_A = N_B = 100 gives chi_c = 0.02; chi = 0.03 is supercritical.
    let grid = CompositionGrid::new(DEFAULT_GRID_POINTS).unwrap();
    let blend = BlendParams::new(100.0, 100.0).unwrap();
    let range = ChiRange {
        start: 0.03,
        end: 0.03,
        step: 0.01,
    };

    let result = run_sweep(&grid, &blend, &range, &SweepSettings::default()).unwrap();
    let dx = grid.dx();

    assert_eq!(result.minima.len(), 2, "expected a double well");
    assert_eq!(result.spinodal.len(), 2, "expected two curvature sign changes");

    let (m_lo, m_hi) = (result.minima[0].phi, result.minima[1].phi);
    assert!(m_lo < 0.5 && m_hi > 0.5);
    assert!(
        (m_lo + m_hi - 1.0).abs() < dx,
        "minima not symmetric about 0.5: {} + {}",
        m_lo,
        m_hi
    );

    let (s_lo, s_hi) = (result.spinodal[0].phi, result.spinodal[1].phi);
    assert!(s_lo < s_hi);
    assert!(
        (s_lo + s_hi - 1.0).abs() < dx,
        "spinodal not symmetric about 0.5: {} + {}",
        s_lo,
        s_hi
    );

    // The analytic spinodal roots of 1/(N phi) + 1/(N (1-phi)) = 2 chi at
    // chi = 0.03, N = 100 are (1 -/+ 1/sqrt(3)) / 2.
    let root = 0.5 * (1.0 - 1.0 / 3.0_f64.sqrt());
    assert!(approx_eq(s_lo, root, 1e-3), "left crossing at {}", s_lo);
    assert!(approx_eq(s_hi, 1.0 - root, 1e-3), "right crossing at {}", s_hi);

    // The spinodal region must sit strictly inside the miscibility gap.
    assert!(m_lo < s_lo && s_hi < m_hi);
}

#[test]
fn invalid_chain_length_aborts_before_any_rows() {
    let grid = CompositionGrid::new(200).unwrap();
    let blend = BlendParams {
        n_a: 0.0,
        n_b: 100.0,
    };
    let range = ChiRange {
        start: 0.0,
        end: 0.04,
        step: 0.01,
    };

    match run_sweep(&grid, &blend, &range, &SweepSettings::default()) {
        Err(ConfigError::InvalidChainLengthA(v)) => assert_eq!(v, 0.0),
        other => panic!("expected InvalidChainLengthA, got {:?}", other),
    }
}

#[test]
fn reversed_chi_bounds_are_a_configuration_error() {
    let grid = CompositionGrid::new(200).unwrap();
    let blend = BlendParams::new(100.0, 100.0).unwrap();
    let range = ChiRange {
        start: 0.05,
        end: 0.01,
        step: 0.01,
    };
    assert!(matches!(
        run_sweep(&grid, &blend, &range, &SweepSettings::default()),
        Err(ConfigError::EmptyChiSweep { .. })
    ));
}

#[test]
fn single_chi_sweep_executes_exactly_once() {
    // start == end is a one-point sweep, not an empty one.
    let grid = CompositionGrid::new(1000).unwrap();
    let blend = BlendParams::new(100.0, 100.0).unwrap();
    let range = ChiRange {
        start: 0.03,
        end: 0.03,
        step: 0.005,
    };

    let result = run_sweep(&grid, &blend, &range, &SweepSettings::default()).unwrap();
    assert!(!result.spinodal.is_empty());
    assert!(result.minima.iter().all(|p| p.chi == 0.03));
    assert!(result.spinodal.iter().all(|p| p.chi == 0.03));
}

#[test]
fn sweep_is_deterministic() {
    let grid = CompositionGrid::new(2000).unwrap();
    let blend = BlendParams::new(80.0, 120.0).unwrap();
    let range = ChiRange {
        start: 0.0,
        end: 0.05,
        step: 0.01,
    };
    let settings = SweepSettings::default();

    let first = run_sweep(&grid, &blend, &range, &settings).unwrap();
    let second = run_sweep(&grid, &blend, &range, &settings).unwrap();

    assert_eq!(first.minima, second.minima);
    assert_eq!(first.spinodal, second.spinodal);
    assert_eq!(first.chi_critical, second.chi_critical);
}

#[test]
fn reported_minima_are_strict_interior_minima_of_their_profile() {
    let grid = CompositionGrid::new(DEFAULT_GRID_POINTS).unwrap();
    let blend = BlendParams::new(100.0, 100.0).unwrap();
    let chi = 0.035;

    let profile = mixing_free_energy(&grid, chi, &blend);
    let minima = local_minima(&grid, &profile);
    assert!(!minima.is_empty());

    let n = profile.len();
    for &phi in &minima {
        let i = grid_index(phi, grid.dx());
        assert!(i >= 1 && i <= n - 2, "endpoint index {} reported", i);
        assert!(profile[i] < profile[i - 1]);
        assert!(profile[i] < profile[i + 1]);
    }
}

#[test]
fn crossings_stay_inside_the_open_interval_and_sorted() {
    let grid = CompositionGrid::new(DEFAULT_GRID_POINTS).unwrap();
    let blend = BlendParams::new(50.0, 200.0).unwrap();

    for chi in [0.02, 0.03, 0.04] {
        let profile = mixing_free_energy(&grid, chi, &blend);
        let crossings = spinodal_crossings(&grid, &profile);
        for w in crossings.windows(2) {
            assert!(w[0] < w[1], "crossings not sorted at chi = {}", chi);
        }
        for &x in &crossings {
            assert!(x > 0.0 && x < 1.0);
        }
    }
}

#[test]
fn asymmetric_blend_minima_skew_toward_the_short_chain() {
    // N_A = 50, N_B = 200: the shorter A chains pay less entropy, so the
    // coexisting compositions shift off-centre.
    let grid = CompositionGrid::new(DEFAULT_GRID_POINTS).unwrap();
    let blend = BlendParams::new(50.0, 200.0).unwrap();
    let chi = blend.chi_critical() * 2.0;

    let result = run_sweep(
        &grid,
        &blend,
        &ChiRange {
            start: chi,
            end: chi,
            step: 0.01,
        },
        &SweepSettings::default(),
    )
    .unwrap();

    assert_eq!(result.minima.len(), 2);
    let mid = 0.5 * (result.minima[0].phi + result.minima[1].phi);
    assert!(
        mid > 0.5,
        "double-well midpoint {} should shift toward the long-chain-rich side",
        mid
    );
}
