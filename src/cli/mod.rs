//! Command-line parsing for the bonding simulator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the model code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::CurveKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bond", version, about = "Chemical bonding simulator (Morse / Born–Lande)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (the default when no subcommand is given).
    Tui(TuiArgs),
    /// Evaluate the Morse bond-energy curve, print a summary and plot, and
    /// optionally export CSV/JSON/SVG.
    Morse(MorseArgs),
    /// Evaluate the Born–Lande lattice-energy curve, print a summary and
    /// plot, and optionally export CSV/JSON/SVG.
    Lattice(LatticeArgs),
    /// Re-plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Options for the interactive TUI.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Tab to open first.
    #[arg(long, value_enum, default_value_t = CurveKind::Morse)]
    pub tab: CurveKind,
}

/// Morse potential parameters and outputs.
#[derive(Debug, Parser, Clone)]
pub struct MorseArgs {
    /// Bond dissociation energy D_e (kJ/mol).
    #[arg(long = "d-e", default_value_t = 400.0)]
    pub d_e: f64,

    /// Steepness constant a (1/Å).
    #[arg(short = 'a', long, default_value_t = 1.2)]
    pub steepness: f64,

    /// Equilibrium bond length r_e (Å).
    #[arg(long = "r-e", default_value_t = 1.0)]
    pub r_e: f64,

    /// Current bond length r (Å). Defaults to r_e.
    #[arg(short = 'r', long = "r-current")]
    pub r_current: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Born–Lande parameters and outputs.
#[derive(Debug, Parser, Clone)]
pub struct LatticeArgs {
    /// Cation charge magnitude |z+| (1-3).
    #[arg(long, default_value_t = 1)]
    pub z_plus: u32,

    /// Anion charge magnitude |z-| (1-3).
    #[arg(long, default_value_t = 1)]
    pub z_minus: u32,

    /// Born exponent n (5-15).
    #[arg(short = 'n', long = "born-n", default_value_t = 9)]
    pub born_n: u32,

    /// Madelung constant M.
    #[arg(short = 'm', long, default_value_t = 1.75)]
    pub madelung: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by `morse` and `lattice`.
#[derive(Debug, Parser, Clone)]
pub struct OutputArgs {
    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the sampled grid to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the curve (parameters + sampled grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,

    /// Export an SVG chart.
    #[arg(long = "export-svg")]
    pub export_svg: Option<PathBuf>,

    /// SVG canvas width (pixels).
    #[arg(long, default_value_t = 800)]
    pub svg_width: u32,

    /// SVG canvas height (pixels).
    #[arg(long, default_value_t = 500)]
    pub svg_height: u32,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `--export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
