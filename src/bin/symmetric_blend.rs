// src/bin/symmetric_blend.rs
//
// Symmetric-blend reference scenario: N_A = N_B = 100, chi swept from 0
// through the critical point (chi_c = 0.02) to 0.04. Below chi_c the free
// energy is single-welled with no spinodal; above it the blend demixes into
// two symmetric minima bracketing two spinodal crossings.
//
// Run:
//   cargo run --bin symmetric_blend
//
// Output:
//   out/symmetric_blend/
//     ├── config.json
//     ├── minima.csv
//     ├── spinodal.csv
//     └── phase_diagram.png

use std::fs::create_dir_all;
use std::path::Path;

use fh_sim::config::{BlendConfig, GridConfig, RunConfig, RunInfo, SweepConfig};
use fh_sim::export::write_phase_table;
use fh_sim::grid::{CompositionGrid, DEFAULT_GRID_POINTS};
use fh_sim::params::{BlendParams, ChiRange};
use fh_sim::sweep::{run_sweep, SweepSettings};
use fh_sim::visualisation::save_phase_diagram_plot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- scenario parameters ---
    let n_a = 100.0;
    let n_b = 100.0;
    let range = ChiRange {
        start: 0.0,
        end: 0.04,
        step: 0.005,
    };
    // ---------------------------

    let blend = BlendParams::new(n_a, n_b)?;
    let grid = CompositionGrid::new(DEFAULT_GRID_POINTS)?;
    let chis = range.values()?;

    let out_dir = Path::new("out").join("symmetric_blend");
    create_dir_all(&out_dir)?;

    let run_config = RunConfig {
        blend: BlendConfig {
            n_a,
            n_b,
            chi_critical: blend.chi_critical(),
        },
        sweep: SweepConfig {
            chi_start: range.start,
            chi_end: range.end,
            chi_step: range.step,
            n_chi: chis.len(),
            parallel: false,
        },
        grid: GridConfig {
            points: grid.len(),
            dx: grid.dx(),
        },
        run: RunInfo {
            binary: "symmetric_blend".to_string(),
            run_id: "symmetric_blend".to_string(),
            git_commit: None,
            timestamp_utc: None,
        },
    };
    run_config.write_to_dir(&out_dir)?;

    let result = run_sweep(&grid, &blend, &range, &SweepSettings::default())?;

    write_phase_table(&out_dir.join("minima.csv"), &result.minima)?;
    write_phase_table(&out_dir.join("spinodal.csv"), &result.spinodal)?;

    if let Err(e) = save_phase_diagram_plot(
        &result,
        out_dir.join("phase_diagram.png").to_string_lossy().as_ref(),
    ) {
        eprintln!("Could not render phase diagram: {e}");
    }

    println!("Wrote outputs to {:?}", out_dir);
    println!(
        "chi_c = {:.4}; {} minima rows, {} spinodal rows across {} chis",
        result.chi_critical,
        result.minima.len(),
        result.spinodal.len(),
        chis.len()
    );

    Ok(())
}
