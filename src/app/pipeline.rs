//! Shared recompute logic used by both the CLI and TUI front-ends.
//!
//! Every parameter change funnels through here:
//! validate -> sample the curve -> evaluate the highlighted point -> finiteness check
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//! Each run is a single-shot, total function of its parameters; nothing is
//! cached between calls.

use crate::domain::{CurveGrid, LatticeParams, MorseParams};
use crate::error::AppError;
use crate::models::{lattice, morse};

/// Computed outputs of one Morse recomputation.
#[derive(Debug, Clone)]
pub struct MorseRun {
    pub params: MorseParams,
    pub curve: CurveGrid,
    /// Highlighted point at the current bond length: `(r, E(r))`.
    pub current: (f64, f64),
}

/// Computed outputs of one Born–Lande recomputation.
#[derive(Debug, Clone)]
pub struct LatticeRun {
    pub params: LatticeParams,
    pub curve: CurveGrid,
}

/// Recompute the bond-energy curve and the current-length point.
pub fn run_morse(params: &MorseParams) -> Result<MorseRun, AppError> {
    morse::validate(params)?;

    let curve = morse::sample_curve(params);
    ensure_finite(&curve, "bond energy")?;

    let e_current = morse::energy(params, params.r_current);
    if !e_current.is_finite() {
        return Err(AppError::runtime(format!(
            "Non-finite bond energy at r = {}.",
            params.r_current
        )));
    }

    Ok(MorseRun {
        params: *params,
        curve,
        current: (params.r_current, e_current),
    })
}

/// Recompute the lattice-energy curve.
pub fn run_lattice(params: &LatticeParams) -> Result<LatticeRun, AppError> {
    lattice::validate(params)?;

    let curve = lattice::sample_curve(params);
    ensure_finite(&curve, "lattice energy")?;

    Ok(LatticeRun {
        params: *params,
        curve,
    })
}

/// Refuse to hand a curve with NaN/Infinity to any renderer.
fn ensure_finite(curve: &CurveGrid, label: &str) -> Result<(), AppError> {
    if curve.y.iter().any(|y| !y.is_finite()) {
        return Err(AppError::runtime(format!(
            "Non-finite {label} in sampled curve."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morse_run_highlights_current_point() {
        let params = MorseParams::default();
        let run = run_morse(&params).unwrap();
        assert_eq!(run.current, (1.0, 0.0));
        assert_eq!(run.curve.len(), 400);
    }

    #[test]
    fn invalid_parameters_are_rejected_before_sampling() {
        let params = MorseParams {
            d_e: f64::NAN,
            ..MorseParams::default()
        };
        let err = run_morse(&params).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let params = LatticeParams {
            born_n: 0,
            ..LatticeParams::default()
        };
        let err = run_lattice(&params).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn lattice_run_samples_standard_grid() {
        let run = run_lattice(&LatticeParams::default()).unwrap();
        assert_eq!(run.curve.len(), 300);
        assert_eq!(run.curve.x[0], 0.1);
        assert_eq!(run.curve.x[299], 1.0);
    }
}
