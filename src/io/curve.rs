//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of one sampled curve:
//! - which model produced it, with the exact parameters
//! - the sampled grid, ready for re-plotting without recomputation
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{CurveFile, CurveGrid, CurveParams};
use crate::error::AppError;

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, params: CurveParams, grid: &CurveGrid) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid(format!(
            "Failed to create curve JSON '{}': {e}",
            path.display()
        ))
    })?;

    let curve = CurveFile {
        tool: "bond".to_string(),
        generated: chrono::Local::now().date_naive(),
        params,
        grid: grid.clone(),
    };

    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::invalid(format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::invalid(format!("Failed to open curve JSON '{}': {e}", path.display()))
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::invalid(format!("Invalid curve JSON: {e}")))?;

    if curve.grid.x.len() != curve.grid.y.len() {
        return Err(AppError::invalid(
            "Curve JSON grid arrays have mismatched lengths.",
        ));
    }

    Ok(curve)
}
