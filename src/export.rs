//! Trajectory table export
//!
//! Writes the swept table in the CSV layout downstream calibration sheets
//! expect. Purely an adapter; nothing here feeds back into the solver.

use std::io;
use std::path::Path;

use crate::sim::TrajectoryTable;

/// Fixed header row of the sheet format
pub const CSV_HEADER: &str = "Angle (deg),Displacement (m)";

/// Render the table as CSV text
pub fn table_to_csv(table: &TrajectoryTable) -> String {
    let mut out = String::with_capacity(32 + table.len() * 20);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for p in table.points() {
        out.push_str(&format!("{},{}\n", p.angle_deg, p.displacement));
    }
    out
}

/// Write the table to a CSV file
pub fn write_csv(path: &Path, table: &TrajectoryTable) -> io::Result<()> {
    std::fs::write(path, table_to_csv(table))?;
    log::info!("Wrote {} table rows to {}", table.len(), path.display());
    Ok(())
}
