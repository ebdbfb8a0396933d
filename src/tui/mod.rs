//! Ratatui-based terminal UI.
//!
//! Two tabs — Morse bond energy and Born–Lande lattice energy — each own a
//! slider-style settings panel. Every adjustment recomputes the owning
//! model's curve synchronously and redraws; the two tabs share no state.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};

use crate::app::pipeline::{self, LatticeRun, MorseRun};
use crate::cli::TuiArgs;
use crate::domain::{
    BORN_EXPONENT_MAX, BORN_EXPONENT_MIN, CurveKind, CurveParams, D_E_RANGE, ION_CHARGE_MAX,
    ION_CHARGE_MIN, LATTICE_R0_MAX_NM, LATTICE_R0_MIN_NM, LatticeParams, MADELUNG_RANGE,
    MORSE_R_MAX_ANGSTROM, MORSE_R_MIN_ANGSTROM, MorseParams, R_CURRENT_RANGE, R_E_RANGE,
    STEEPNESS_RANGE,
};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::EnergyChart;

/// Fields per settings panel (both tabs expose four sliders).
const FIELD_COUNT: usize = 4;

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    tab: CurveKind,
    morse: MorseParams,
    lattice: LatticeParams,
    selected_field: usize,
    status: String,
    morse_run: MorseRun,
    lattice_run: LatticeRun,
}

impl App {
    fn new(args: TuiArgs) -> Result<Self, AppError> {
        let morse = MorseParams::default();
        let lattice = LatticeParams::default();
        Ok(Self {
            tab: args.tab,
            selected_field: 0,
            status: "←/→ adjusts the selected parameter.".to_string(),
            morse_run: pipeline::run_morse(&morse)?,
            lattice_run: pipeline::run_lattice(&lattice)?,
            morse,
            lattice,
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Tab => {
                self.tab = match self.tab {
                    CurveKind::Morse => CurveKind::Lattice,
                    CurveKind::Lattice => CurveKind::Morse,
                };
                self.selected_field = 0;
                self.status = format!("tab: {}", self.tab.display_name());
            }
            KeyCode::Char('1') => {
                self.tab = CurveKind::Morse;
                self.selected_field = 0;
            }
            KeyCode::Char('2') => {
                self.tab = CurveKind::Lattice;
                self.selected_field = 0;
            }
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1)?,
            KeyCode::Right => self.adjust_field(1)?,
            KeyCode::Char('c') => {
                if self.tab == CurveKind::Morse {
                    self.morse.r_current = self.morse.r_e;
                    self.morse_run = pipeline::run_morse(&self.morse)?;
                    self.status = format!("Snapped r to r_e = {:.2} Å.", self.morse.r_e);
                }
            }
            KeyCode::Char('r') => {
                match self.tab {
                    CurveKind::Morse => {
                        self.morse = MorseParams::default();
                        self.morse_run = pipeline::run_morse(&self.morse)?;
                    }
                    CurveKind::Lattice => {
                        self.lattice = LatticeParams::default();
                        self.lattice_run = pipeline::run_lattice(&self.lattice)?;
                    }
                }
                self.status = "Reset parameters to defaults.".to_string();
            }
            KeyCode::Char('s') => {
                self.save_active_curve();
            }
            _ => {}
        }

        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) -> Result<(), AppError> {
        match self.tab {
            CurveKind::Morse => {
                let p = &mut self.morse;
                match self.selected_field {
                    0 => p.d_e = D_E_RANGE.nudge(p.d_e, delta),
                    1 => p.steepness = STEEPNESS_RANGE.nudge(p.steepness, delta),
                    2 => p.r_e = R_E_RANGE.nudge(p.r_e, delta),
                    3 => p.r_current = R_CURRENT_RANGE.nudge(p.r_current, delta),
                    _ => {}
                }
                self.morse_run = pipeline::run_morse(&self.morse)?;
                let (r, e) = self.morse_run.current;
                self.status = format!("E({r:.2} Å) = {e:.2} kJ/mol");
            }
            CurveKind::Lattice => {
                let p = &mut self.lattice;
                match self.selected_field {
                    0 => p.z_plus = nudge_u32(p.z_plus, delta, ION_CHARGE_MIN, ION_CHARGE_MAX),
                    1 => p.z_minus = nudge_u32(p.z_minus, delta, ION_CHARGE_MIN, ION_CHARGE_MAX),
                    2 => {
                        p.born_n = nudge_u32(p.born_n, delta, BORN_EXPONENT_MIN, BORN_EXPONENT_MAX)
                    }
                    3 => p.madelung = MADELUNG_RANGE.nudge(p.madelung, delta),
                    _ => {}
                }
                self.lattice_run = pipeline::run_lattice(&self.lattice)?;
                if let Some((u_min, _)) = self.lattice_run.curve.y_range() {
                    self.status = format!("deepest U on grid: {u_min:.0} kJ/mol");
                }
            }
        }
        Ok(())
    }

    fn save_active_curve(&mut self) {
        let (path, params, grid) = match self.tab {
            CurveKind::Morse => (
                Path::new("morse-curve.json"),
                CurveParams::Morse(self.morse_run.params),
                &self.morse_run.curve,
            ),
            CurveKind::Lattice => (
                Path::new("lattice-curve.json"),
                CurveParams::Lattice(self.lattice_run.params),
                &self.lattice_run.curve,
            ),
        };
        match crate::io::curve::write_curve_json(path, params, grid) {
            Ok(()) => self.status = format!("Wrote {}.", path.display()),
            Err(err) => self.status = format!("Save failed: {err}"),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let titles = ["1: Morse (bond energy)", "2: Born–Lande (lattice energy)"];
        let tabs = Tabs::new(titles)
            .select(match self.tab {
                CurveKind::Morse => 0,
                CurveKind::Lattice => 1,
            })
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, rows[0]);

        let formula = match self.tab {
            CurveKind::Morse => "E(r) = D_e (1 - e^(-a (r - r_e)))²",
            CurveKind::Lattice => "U = -(N_A M |z⁺ z⁻| e²)/(4π ε₀ r₀) · (1 - 1/n)",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                formula,
                Style::default().fg(Color::Gray),
            ))),
            rows[1],
        );
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(area);

        self.draw_chart(frame, chunks[0]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.draw_settings(frame, bottom[0]);
        match self.tab {
            CurveKind::Morse => self.draw_atom_gauge(frame, bottom[1]),
            CurveKind::Lattice => self.draw_observation(frame, bottom[1]),
        }
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = self.tab.display_name();
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (curve, current, equilibrium, x_bounds): (Vec<(f64, f64)>, _, _, _) = match self.tab {
            CurveKind::Morse => (
                self.morse_run.curve.points().collect(),
                Some(self.morse_run.current),
                Some(self.morse_run.params.r_e),
                [MORSE_R_MIN_ANGSTROM, MORSE_R_MAX_ANGSTROM],
            ),
            CurveKind::Lattice => (
                self.lattice_run.curve.points().collect(),
                None,
                None,
                [LATTICE_R0_MIN_NM, LATTICE_R0_MAX_NM],
            ),
        };
        let y_bounds = y_bounds(&curve, current);

        let widget = EnergyChart {
            curve: &curve,
            current,
            equilibrium,
            x_bounds,
            y_bounds,
            x_label: self.tab.x_label(),
            y_label: self.tab.y_label(),
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };

        frame.render_widget(widget, inner);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = match self.tab {
            CurveKind::Morse => {
                let p = &self.morse;
                vec![
                    ListItem::new(format!("Dissociation energy D_e: {:.0} kJ/mol", p.d_e)),
                    ListItem::new(format!("Steepness a: {:.2}", p.steepness)),
                    ListItem::new(format!("Equilibrium length r_e: {:.2} Å", p.r_e)),
                    ListItem::new(format!("Current length r: {:.2} Å", p.r_current)),
                ]
            }
            CurveKind::Lattice => {
                let p = &self.lattice;
                vec![
                    ListItem::new(format!("Cation charge |z⁺|: {}", p.z_plus)),
                    ListItem::new(format!("Anion charge |z⁻|: {}", p.z_minus)),
                    ListItem::new(format!("Born exponent n: {}", p.born_n)),
                    ListItem::new(format!("Madelung constant M: {:.2}", p.madelung)),
                ]
            }
        };

        let list = List::new(items)
            .block(Block::default().title("Parameters").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// Schematic of the two bonded atoms; their separation tracks the current
    /// bond length.
    fn draw_atom_gauge(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Atoms").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let p = &self.morse;
        let max_gap = inner.width.saturating_sub(6).max(2) as f64;
        let u = (p.r_current - R_CURRENT_RANGE.min) / (R_CURRENT_RANGE.max - R_CURRENT_RANGE.min);
        let gap = (u.clamp(0.0, 1.0) * max_gap).round() as usize;

        let (r, e) = self.morse_run.current;
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("●", Style::default().fg(Color::Cyan)),
                Span::styled("─".repeat(gap.max(1)), Style::default().fg(Color::Gray)),
                Span::styled("●", Style::default().fg(Color::Red)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("bond length = {r:.2} Å | E = {e:.2} kJ/mol"),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("most stable at r_e = {:.2} Å", p.r_e),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(Text::from(lines)), inner);
    }

    fn draw_observation(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Observation").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let span = self
            .lattice_run
            .curve
            .y_range()
            .map(|(u0, u1)| format!("U spans [{u0:.0}, {u1:.0}] kJ/mol across the plotted range. "))
            .unwrap_or_default();

        let text = format!(
            "{span}U stays negative (exothermic): the lattice binds more strongly as r₀ \
             shrinks or as the ion charges grow."
        );
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            inner,
        );
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Tab/1/2 switch  c snap r→r_e  r reset  s save  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn nudge_u32(value: u32, delta: i32, min: u32, max: u32) -> u32 {
    let next = if delta >= 0 {
        value.saturating_add(delta as u32)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    };
    next.clamp(min, max)
}

/// Chart y-bounds from the sampled curve plus the highlighted point, with a
/// small pad so the extremes stay off the frame edge.
fn y_bounds(curve: &[(f64, f64)], current: Option<(f64, f64)>) -> [f64; 2] {
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in curve {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if let Some((_, y)) = current {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    [y_min - pad, y_max + pad]
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_nudge_respects_slider_bounds() {
        assert_eq!(nudge_u32(1, 1, 1, 3), 2);
        assert_eq!(nudge_u32(3, 1, 1, 3), 3);
        assert_eq!(nudge_u32(1, -1, 1, 3), 1);
        assert_eq!(nudge_u32(9, 1, 5, 15), 10);
    }

    #[test]
    fn y_bounds_pad_and_degenerate_fallback() {
        let b = y_bounds(&[(0.0, 0.0), (1.0, 100.0)], None);
        assert!(b[0] < 0.0 && b[1] > 100.0);

        let flat = y_bounds(&[(0.0, 5.0), (1.0, 5.0)], None);
        assert!(flat[1] > flat[0]);
    }
}
