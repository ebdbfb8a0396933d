//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks without entering the TUI
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - sampled curve: `-` line
//! - equilibrium bond length (Morse only): `|` column at r_e
//! - current bond length (Morse only): `x`

use crate::app::pipeline::{LatticeRun, MorseRun};
use crate::domain::{CurveFile, CurveParams};
use crate::error::AppError;
use crate::models::morse;

/// Render the Morse run: curve, equilibrium column, current-length marker.
pub fn render_morse_plot(run: &MorseRun, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = run.curve.points().collect();
    render_plot(
        &curve,
        Some(run.current),
        Some(run.params.r_e),
        "r (Å)",
        "E (kJ/mol)",
        width,
        height,
    )
}

/// Render the Born–Lande run (curve only).
pub fn render_lattice_plot(run: &LatticeRun, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = run.curve.points().collect();
    render_plot(&curve, None, None, "r0 (nm)", "U (kJ/mol)", width, height)
}

/// Render a previously exported curve JSON.
///
/// For Morse files the marker is re-derived from the stored parameters; the
/// grid itself is used as saved.
pub fn render_curve_file_plot(
    file: &CurveFile,
    width: usize,
    height: usize,
) -> Result<String, AppError> {
    let curve: Vec<(f64, f64)> = file.grid.points().collect();
    if curve.is_empty() {
        return Err(AppError::invalid("Curve JSON contains an empty grid."));
    }

    let kind = file.params.kind();
    let (marker, vline) = match &file.params {
        CurveParams::Morse(p) => {
            morse::validate(p)?;
            let marker = (p.r_current, morse::energy(p, p.r_current));
            (Some(marker), Some(p.r_e))
        }
        CurveParams::Lattice(_) => (None, None),
    };

    Ok(render_plot(
        &curve,
        marker,
        vline,
        kind.x_label(),
        kind.y_label(),
        width,
        height,
    ))
}

fn render_plot(
    curve: &[(f64, f64)],
    marker: Option<(f64, f64)>,
    vline: Option<f64>,
    x_label: &str,
    y_label: &str,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(curve, marker).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);

    // Equilibrium column under the curve: only fill blank cells so the curve
    // stays readable where they cross.
    if let Some(x) = vline {
        if x >= x_min && x <= x_max {
            let col = map_x(x, x_min, x_max, width);
            for row in grid.iter_mut() {
                if row[col] == ' ' {
                    row[col] = '|';
                }
            }
        }
    }

    if let Some((x, y)) = marker {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'x';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {x_label}=[{x_min:.2}, {x_max:.2}] | {y_label}=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in curve {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(curve: &[(f64, f64)], marker: Option<(f64, f64)>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in curve {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if let Some((_, y)) = marker {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y = max maps to row 0 (top of the grid).
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline;
    use crate::domain::MorseParams;

    #[test]
    fn plot_golden_snapshot_small() {
        let curve = vec![(0.0, 0.0), (1.0, 10.0)];
        let txt = render_plot(&curve, None, None, "r (Å)", "E (kJ/mol)", 10, 5);
        let expected = concat!(
            "Plot: r (Å)=[0.00, 1.00] | E (kJ/mol)=[-0.50, 10.50]\n",
            "        --\n",
            "      --  \n",
            "    --    \n",
            "  --      \n",
            "--        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn morse_plot_carries_marker_and_equilibrium_column() {
        let run = pipeline::run_morse(&MorseParams::default()).unwrap();
        let txt = render_morse_plot(&run, 40, 12);
        assert!(txt.contains('x'), "missing current-length marker:\n{txt}");
        assert!(txt.contains('|'), "missing equilibrium column:\n{txt}");
        // Header + 12 grid rows.
        assert_eq!(txt.lines().count(), 13);
    }
}
