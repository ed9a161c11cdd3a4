use serde::Serialize;
use serde_json;
use std::fs::File;
use std::path::Path;

#[derive(Serialize)]
pub struct RunConfig {
    pub blend: BlendConfig,
    pub sweep: SweepConfig,
    pub grid: GridConfig,
    pub run: RunInfo,
}

#[derive(Serialize)]
pub struct BlendConfig {
    pub n_a: f64,
    pub n_b: f64,
    /// Theoretical critical point chi_c = 0.5 (1/sqrt(N_A) + 1/sqrt(N_B))^2.
    pub chi_critical: f64,
}

#[derive(Serialize)]
pub struct SweepConfig {
    pub chi_start: f64,
    pub chi_end: f64,
    pub chi_step: f64,
    pub n_chi: usize,
    pub parallel: bool,
}

#[derive(Serialize)]
pub struct GridConfig {
    pub points: usize,
    pub dx: f64,
}

#[derive(Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub run_id: String,

    // Optional provenance (can be filled later)
    pub git_commit: Option<String>,
    pub timestamp_utc: Option<String>,
}

impl RunConfig {
    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
