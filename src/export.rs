use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::sweep::PhasePoint;

/// Write one result table as two-column CSV with header `Chi,Phi`.
///
/// Rows are written in accumulation order (chi ascending, phi ascending
/// within each chi). Failure to write leaves the in-memory table untouched;
/// the caller decides whether to retry elsewhere.
pub fn write_phase_table(path: &Path, points: &[PhasePoint]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "Chi,Phi")?;
    for p in points {
        writeln!(w, "{:.16e},{:.16e}", p.chi, p.phi)?;
    }
    w.flush()?;
    Ok(())
}
