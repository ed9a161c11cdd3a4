// src/main.rs
//
// This binary provides a flexible CLI for exploratory chi sweeps.
//
// Outputs from this driver are written to `runs/` (or the directory
// specified via `out=`) and are not committed to version control.
//
// NOTE:
// The reproducible symmetric-blend scenario is implemented as a dedicated
// executable under `src/bin/symmetric_blend.rs`.
//
// Examples:
//
//   cargo run --release -- na=100 nb=100 chistart=0.0 chiend=0.04 chistep=0.01
//       -> symmetric blend swept through its critical point (chi_c = 0.02).
//
//   cargo run --release -- na=50 nb=200 chistep=0.005 chiend=0.06 parallel
//       -> asymmetric blend, chis evaluated on the rayon pool.
//
// Typical outputs (per run directory):
//   runs/<run_id>/
//     ├── config.json
//     ├── minima.csv
//     ├── spinodal.csv
//     ├── free_energy_landscape.png
//     └── phase_diagram.png

use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fh_sim::config::{BlendConfig, GridConfig, RunConfig, RunInfo, SweepConfig};
use fh_sim::export::write_phase_table;
use fh_sim::free_energy::mixing_free_energy;
use fh_sim::grid::{CompositionGrid, DEFAULT_GRID_POINTS};
use fh_sim::params::{BlendParams, ChiRange};
use fh_sim::sweep::{run_sweep, SweepSettings};
use fh_sim::visualisation::{save_landscape_plot, save_phase_diagram_plot};

fn print_usage() {
    eprintln!(
        r#"Usage:
  cargo run -- [na=VAL] [nb=VAL]
             [chistart=VAL] [chiend=VAL] [chistep=VAL]
             [points=N] [parallel] [noplot]
             [out=DIR] [run=RUN_ID]

Defaults:
  na=100 nb=100 chistart=0.0 chiend=0.04 chistep=0.01 points=5000

Notes:
  - Minima and spinodal tables are two-column CSV (Chi,Phi), one row per
    detected point, grouped by chi ascending.
  - chis with no detected minima / crossings contribute no rows (the two
    tables may have different lengths).
"#
    );
}

fn sanitize_run_id(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn default_run_id(n_a: f64, n_b: f64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    let ts = format!("{}{:03}", now.as_secs(), now.subsec_millis());
    format!("{}_na{}_nb{}", ts, n_a, n_b)
}

fn unique_run_dir(out_root: &str, run_id: &str) -> PathBuf {
    let base = PathBuf::from(out_root);
    let mut dir = base.join(run_id);
    if !dir.exists() {
        return dir;
    }
    for k in 1..1000 {
        let cand = base.join(format!("{}_{}", run_id, k));
        if !cand.exists() {
            dir = cand;
            break;
        }
    }
    dir
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = env::args().collect();

    let mut n_a: f64 = 100.0;
    let mut n_b: f64 = 100.0;
    let mut chi_start: f64 = 0.0;
    let mut chi_end: f64 = 0.04;
    let mut chi_step: f64 = 0.01;
    let mut points: usize = DEFAULT_GRID_POINTS;
    let mut parallel = false;
    let mut make_plots = true;

    // Output controls
    let mut out_root_override: Option<String> = None;
    let mut run_id_override: Option<String> = None;

    for arg in argv.iter().skip(1) {
        if arg == "-h" || arg == "--help" || arg == "help" {
            print_usage();
            return Ok(());
        }

        if arg == "parallel" {
            parallel = true;
            continue;
        }
        if arg == "noplot" {
            make_plots = false;
            continue;
        }

        if let Some(v) = arg.strip_prefix("na=") {
            match v.parse::<f64>() {
                Ok(val) => n_a = val,
                Err(_) => eprintln!("Warning: could not parse na value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("nb=") {
            match v.parse::<f64>() {
                Ok(val) => n_b = val,
                Err(_) => eprintln!("Warning: could not parse nb value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("chistart=") {
            match v.parse::<f64>() {
                Ok(val) => chi_start = val,
                Err(_) => eprintln!("Warning: could not parse chistart value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("chiend=") {
            match v.parse::<f64>() {
                Ok(val) => chi_end = val,
                Err(_) => eprintln!("Warning: could not parse chiend value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("chistep=") {
            match v.parse::<f64>() {
                Ok(val) => chi_step = val,
                Err(_) => eprintln!("Warning: could not parse chistep value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("points=") {
            match v.parse::<usize>() {
                Ok(val) => points = val,
                Err(_) => eprintln!("Warning: could not parse points value '{v}', ignoring"),
            }
            continue;
        }

        if let Some(v) = arg.strip_prefix("out=") {
            out_root_override = Some(v.to_string());
            continue;
        }
        if let Some(v) = arg.strip_prefix("run=") {
            run_id_override = Some(v.to_string());
            continue;
        }

        eprintln!("Warning: ignoring unknown argument '{arg}'");
    }

    // Fail fast: all configuration errors surface before any directory or
    // file is created.
    let blend = BlendParams::new(n_a, n_b)?;
    let range = ChiRange {
        start: chi_start,
        end: chi_end,
        step: chi_step,
    };
    let chis = range.values()?;
    let grid = CompositionGrid::new(points)?;

    // -------- output directory setup --------
    let out_root = out_root_override.unwrap_or_else(|| "runs".to_string());
    create_dir_all(&out_root)?;

    let mut run_id = run_id_override.unwrap_or_else(|| default_run_id(n_a, n_b));
    run_id = sanitize_run_id(&run_id);

    let run_dir = unique_run_dir(&out_root, &run_id);
    create_dir_all(&run_dir)?;

    // -------------------------------------------------
    // Write config.json
    // -------------------------------------------------
    let run_config = RunConfig {
        blend: BlendConfig {
            n_a,
            n_b,
            chi_critical: blend.chi_critical(),
        },
        sweep: SweepConfig {
            chi_start,
            chi_end,
            chi_step,
            n_chi: chis.len(),
            parallel,
        },
        grid: GridConfig {
            points: grid.len(),
            dx: grid.dx(),
        },
        run: RunInfo {
            binary: "fh-sim".to_string(),
            run_id: run_id.clone(),
            git_commit: None,
            timestamp_utc: None,
        },
    };
    run_config.write_to_dir(&run_dir)?;

    println!("--- fh-sim run config ---");
    println!("run_dir: {}", run_dir.to_string_lossy());
    println!("blend:  N_A={} N_B={} chi_c={:.6}", n_a, n_b, blend.chi_critical());
    println!(
        "sweep:  chi=[{}, {}] step {} ({} values){}",
        chi_start,
        chi_end,
        chi_step,
        chis.len(),
        if parallel { " [parallel]" } else { "" }
    );
    println!("grid:   {} points, dx={:.6e}", grid.len(), grid.dx());
    println!("-------------------------");

    let settings = SweepSettings { parallel };
    let result = run_sweep(&grid, &blend, &range, &settings)?;

    println!(
        "sweep done: {} minima rows, {} spinodal rows",
        result.minima.len(),
        result.spinodal.len()
    );

    write_phase_table(&run_dir.join("minima.csv"), &result.minima)?;
    write_phase_table(&run_dir.join("spinodal.csv"), &result.spinodal)?;

    if make_plots {
        // Landscape profiles are ephemeral during the sweep; rebuild them
        // for the chis we want to draw.
        let profiles: Vec<(f64, Vec<f64>)> = chis
            .iter()
            .map(|&chi| (chi, mixing_free_energy(&grid, chi, &blend)))
            .collect();

        if let Err(e) = save_landscape_plot(
            grid.phi(),
            &profiles,
            blend.chi_critical(),
            run_dir.join("free_energy_landscape.png").to_string_lossy().as_ref(),
        ) {
            eprintln!("Could not render landscape plot: {e}");
        }
        if let Err(e) = save_phase_diagram_plot(
            &result,
            run_dir.join("phase_diagram.png").to_string_lossy().as_ref(),
        ) {
            eprintln!("Could not render phase diagram: {e}");
        }
    } else {
        println!("Plot generation skipped ('noplot' flag).");
    }

    println!("Done. Outputs in {}", run_dir.to_string_lossy());
    Ok(())
}
