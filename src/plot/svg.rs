//! Standalone SVG charts via Plotters.
//!
//! The TUI draws through the terminal backend; this module produces a vector
//! file of the same curve for handouts and reports. Only the SVG backend is
//! compiled in (no bitmap/font machinery).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::app::pipeline::{LatticeRun, MorseRun};
use crate::error::AppError;

/// Curve color for the Morse chart (the bond tab's accent color).
const MORSE_COLOR: RGBColor = RGBColor(0, 191, 255);
/// Curve color for the Born–Lande chart.
const LATTICE_COLOR: RGBColor = RGBColor(255, 99, 71);
/// Marker color for the current bond length.
const MARKER_COLOR: RGBColor = RGBColor(255, 200, 0);

/// Write the Morse chart (curve + equilibrium line + current point) as SVG.
pub fn write_morse_svg(
    path: &Path,
    run: &MorseRun,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let curve: Vec<(f64, f64)> = run.curve.points().collect();
    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    draw_chart(
        &root,
        "Bond Energy vs Bond Length (Morse Potential)",
        "Bond Length (Å)",
        "Energy (kJ/mol)",
        &curve,
        Some(run.current),
        Some(run.params.r_e),
        MORSE_COLOR,
    )?;
    present(root, path)
}

/// Write the Born–Lande chart (curve only) as SVG.
pub fn write_lattice_svg(
    path: &Path,
    run: &LatticeRun,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let curve: Vec<(f64, f64)> = run.curve.points().collect();
    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    draw_chart(
        &root,
        "Lattice Energy vs Ionic Distance (Born–Lande)",
        "Interionic Distance r0 (nm)",
        "Lattice Energy U (kJ/mol)",
        &curve,
        None,
        None,
        LATTICE_COLOR,
    )?;
    present(root, path)
}

fn present(root: DrawingArea<SVGBackend<'_>, Shift>, path: &Path) -> Result<(), AppError> {
    root.present()
        .map_err(|e| AppError::invalid(format!("Failed to write SVG '{}': {e}", path.display())))
}

#[allow(clippy::too_many_arguments)]
fn draw_chart(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    curve: &[(f64, f64)],
    marker: Option<(f64, f64)>,
    equilibrium: Option<f64>,
    line_color: RGBColor,
) -> Result<(), AppError> {
    root.fill(&WHITE)
        .map_err(|e| AppError::runtime(format!("SVG fill error: {e:?}")))?;

    let (x0, x1) = bounds(curve.iter().map(|&(x, _)| x)).unwrap_or((0.0, 1.0));
    let (mut y0, mut y1) =
        bounds(curve.iter().map(|&(_, y)| y).chain(marker.map(|(_, y)| y))).unwrap_or((0.0, 1.0));
    let pad = ((y1 - y0).abs() * 0.05).max(1e-12);
    y0 -= pad;
    y1 += pad;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(|e| AppError::runtime(format!("SVG chart error: {e:?}")))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| AppError::runtime(format!("SVG mesh error: {e:?}")))?;

    chart
        .draw_series(LineSeries::new(
            curve.iter().copied(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| AppError::runtime(format!("SVG series error: {e:?}")))?;

    if let Some(r_e) = equilibrium {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(r_e, y0), (r_e, y1)],
                RED.stroke_width(1),
            )))
            .map_err(|e| AppError::runtime(format!("SVG marker error: {e:?}")))?;
    }

    if let Some((x, y)) = marker {
        chart
            .draw_series(std::iter::once(Circle::new((x, y), 4, MARKER_COLOR.filled())))
            .map_err(|e| AppError::runtime(format!("SVG marker error: {e:?}")))?;
    }

    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}
