//! Export a sampled curve to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: two columns, distance then energy, in the model's display units.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{CurveGrid, CurveKind};
use crate::error::AppError;

/// Write the sampled grid to a CSV file.
pub fn write_curve_csv(path: &Path, kind: CurveKind, grid: &CurveGrid) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::invalid(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "{}", kind.csv_header())
        .map_err(|e| AppError::invalid(format!("Failed to write export CSV header: {e}")))?;

    for (x, y) in grid.points() {
        writeln!(file, "{x:.6},{y:.6}")
            .map_err(|e| AppError::invalid(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
