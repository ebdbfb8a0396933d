//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - recomputes curves from the requested parameters
//! - prints reports/plots
//! - writes optional exports
//! - hands off to the TUI

use clap::Parser;

use crate::cli::{Command, LatticeArgs, MorseArgs, OutputArgs, PlotArgs};
use crate::domain::{CurveKind, CurveParams, LatticeParams, MorseParams};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bond` binary.
pub fn run() -> Result<(), AppError> {
    // We want `bond` and `bond --tab lattice` to behave like `bond tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => crate::tui::run(args),
        Command::Morse(args) => handle_morse(args),
        Command::Lattice(args) => handle_lattice(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_morse(args: MorseArgs) -> Result<(), AppError> {
    let params = MorseParams {
        d_e: args.d_e,
        steepness: args.steepness,
        r_e: args.r_e,
        // Unless given explicitly, the current length starts on the minimum.
        r_current: args.r_current.unwrap_or(args.r_e),
    };
    let run = pipeline::run_morse(&params)?;

    println!("{}", crate::report::format_morse_summary(&run));

    if args.output.plot && !args.output.no_plot {
        println!(
            "{}",
            crate::plot::render_morse_plot(&run, args.output.width, args.output.height)
        );
    }

    if let Some(path) = &args.output.export_svg {
        crate::plot::write_morse_svg(path, &run, args.output.svg_width, args.output.svg_height)?;
    }
    write_exports(&args.output, CurveKind::Morse, CurveParams::Morse(run.params), &run.curve)
}

fn handle_lattice(args: LatticeArgs) -> Result<(), AppError> {
    let params = LatticeParams {
        z_plus: args.z_plus,
        z_minus: args.z_minus,
        born_n: args.born_n,
        madelung: args.madelung,
    };
    let run = pipeline::run_lattice(&params)?;

    println!("{}", crate::report::format_lattice_summary(&run));

    if args.output.plot && !args.output.no_plot {
        println!(
            "{}",
            crate::plot::render_lattice_plot(&run, args.output.width, args.output.height)
        );
    }

    if let Some(path) = &args.output.export_svg {
        crate::plot::write_lattice_svg(path, &run, args.output.svg_width, args.output.svg_height)?;
    }
    write_exports(&args.output, CurveKind::Lattice, CurveParams::Lattice(run.params), &run.curve)
}

fn write_exports(
    output: &OutputArgs,
    kind: CurveKind,
    params: CurveParams,
    curve: &crate::domain::CurveGrid,
) -> Result<(), AppError> {
    if let Some(path) = &output.export {
        crate::io::export::write_curve_csv(path, kind, curve)?;
    }
    if let Some(path) = &output.export_curve {
        crate::io::curve::write_curve_json(path, params, curve)?;
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_curve_file_plot(&curve, args.width, args.height)?;
    println!("{plot}");
    Ok(())
}

/// Rewrite argv so `bond` defaults to `bond tui`.
///
/// Rules:
/// - `bond`                    -> `bond tui`
/// - `bond --tab lattice ...`  -> `bond tui --tab lattice ...`
/// - `bond --help/--version`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "morse" | "lattice" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is (clap will report the unknown subcommand).
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(v(&["bond"])), v(&["bond", "tui"]));
    }

    #[test]
    fn leading_flag_routes_to_tui() {
        assert_eq!(
            rewrite_args(v(&["bond", "--tab", "lattice"])),
            v(&["bond", "tui", "--tab", "lattice"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(v(&["bond", "morse", "--d-e", "500"])),
            v(&["bond", "morse", "--d-e", "500"])
        );
        assert_eq!(rewrite_args(v(&["bond", "--help"])), v(&["bond", "--help"]));
    }
}
