//! Plotters-powered energy chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - the same series code can later feed the SVG export path
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call, which keeps
/// `render()` focused on drawing and makes the data prep testable on its own.
pub struct EnergyChart<'a> {
    /// Line series for the sampled energy curve.
    pub curve: &'a [(f64, f64)],
    /// Highlighted point at the current bond length (Morse tab only).
    pub current: Option<(f64, f64)>,
    /// Vertical reference at the equilibrium bond length (Morse tab only).
    pub equilibrium: Option<f64>,
    /// X bounds (distance, in the model's display unit).
    pub x_bounds: [f64; 2],
    /// Y bounds (energy, kJ/mol).
    pub y_bounds: [f64; 2],
    /// Axis labels (kept simple for terminal rendering).
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Formatting of tick labels.
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl Widget for EnergyChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels. Mesh lines are disabled to reduce clutter in
            // low-resolution terminal rendering.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // High-contrast palette for terminal readability.
            let curve_color = RGBColor(0, 255, 255); // cyan
            let equilibrium_color = RGBColor(255, 0, 0); // red
            let current_color = RGBColor(255, 255, 0); // yellow

            // 1) Sampled energy curve.
            chart.draw_series(LineSeries::new(self.curve.iter().copied(), &curve_color))?;

            // 2) Vertical reference line at the equilibrium length.
            if let Some(r_e) = self.equilibrium {
                if r_e > x0 && r_e < x1 {
                    chart.draw_series(LineSeries::new(
                        [(r_e, y0), (r_e, y1)],
                        &equilibrium_color,
                    ))?;
                }
            }

            // 3) Current bond length highlight.
            //
            // We intentionally avoid `Circle` markers here. The underlying
            // `plotters-ratatui-backend` currently maps circle radii
            // incorrectly (pixel radius -> normalized canvas units),
            // producing huge circles.
            //
            // A small cross of `Pixel`s gives a clean highlight that stays
            // visible on top of the cyan curve.
            if let Some((cx, cy)) = self.current {
                let ddx = (x1 - x0) / 120.0;
                let ddy = (y1 - y0) / 60.0;
                let offsets = [
                    (0.0, 0.0),
                    (-ddx, 0.0),
                    (ddx, 0.0),
                    (0.0, -ddy),
                    (0.0, ddy),
                ];
                chart.draw_series(
                    offsets
                        .iter()
                        .map(|&(ox, oy)| Pixel::new((cx + ox, cy + oy), current_color)),
                )?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
