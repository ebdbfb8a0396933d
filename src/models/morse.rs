//! Morse potential: covalent bond energy as a function of bond length.
//!
//! `E(r) = D_e (1 - exp(-a (r - r_e)))²`
//!
//! The curve has a single minimum `E(r_e) = 0` and approaches `D_e` as the
//! bond stretches. It is asymmetric: the repulsive wall below `r_e` rises
//! above `D_e`, which is physical and preserved here. The function is smooth
//! and bounded for every finite input, so plain double precision is enough.

use crate::domain::{
    CurveGrid, MORSE_R_MAX_ANGSTROM, MORSE_R_MIN_ANGSTROM, MORSE_SAMPLES, MorseParams,
};
use crate::error::AppError;
use crate::math::linspace;

/// Evaluate the bond energy (kJ/mol) at bond length `r` (Å).
pub fn energy(params: &MorseParams, r: f64) -> f64 {
    let stretch = 1.0 - (-params.steepness * (r - params.r_e)).exp();
    params.d_e * stretch * stretch
}

/// Sample the bond-energy curve over the standard display domain.
pub fn sample_curve(params: &MorseParams) -> CurveGrid {
    let r = linspace(MORSE_R_MIN_ANGSTROM, MORSE_R_MAX_ANGSTROM, MORSE_SAMPLES);
    let e = r.iter().map(|&ri| energy(params, ri)).collect();
    CurveGrid { x: r, y: e }
}

/// Validate parameters before evaluation.
///
/// The TUI sliders can only produce in-range values; this guards the CLI
/// path where parameters arrive as free-form flags.
pub fn validate(params: &MorseParams) -> Result<(), AppError> {
    let fields = [
        ("D_e", params.d_e),
        ("a", params.steepness),
        ("r_e", params.r_e),
        ("r", params.r_current),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(AppError::invalid(format!(
                "Morse parameter {name} must be finite, got {value}."
            )));
        }
        if value <= 0.0 {
            return Err(AppError::invalid(format!(
                "Morse parameter {name} must be positive, got {value}."
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> MorseParams {
        MorseParams {
            d_e: 400.0,
            steepness: 1.2,
            r_e: 1.0,
            r_current: 1.0,
        }
    }

    #[test]
    fn zero_at_equilibrium() {
        // exp(0) = 1 exactly, so the minimum is exact, not just approximate.
        let e = energy(&defaults(), 1.0);
        assert_eq!(e, 0.0);
    }

    #[test]
    fn golden_value_on_dissociation_side() {
        // E(2.0) = 400 (1 - e^{-1.2})² = 195.3318… kJ/mol
        let e = energy(&defaults(), 2.0);
        assert!((e - 195.3318).abs() < 1e-3, "got {e}");
    }

    #[test]
    fn grid_spans_display_domain() {
        let curve = sample_curve(&defaults());
        assert_eq!(curve.len(), 400);
        assert_eq!(curve.x[0], 0.3);
        assert_eq!(curve.x[399], 3.0);
    }

    #[test]
    fn nonnegative_everywhere() {
        let curve = sample_curve(&defaults());
        assert!(curve.y.iter().all(|&e| e >= 0.0));
    }

    #[test]
    fn bounded_by_d_e_beyond_equilibrium() {
        // The [0, D_e] bound holds on the dissociation side only; the
        // repulsive wall below r_e exceeds D_e.
        let params = defaults();
        let curve = sample_curve(&params);
        for (r, e) in curve.points() {
            if r >= params.r_e {
                assert!(e <= params.d_e + 1e-9, "E({r}) = {e} exceeds D_e");
            }
        }
    }

    #[test]
    fn monotone_nondecreasing_beyond_equilibrium() {
        let params = defaults();
        let curve = sample_curve(&params);
        let mut prev: Option<f64> = None;
        for (r, e) in curve.points() {
            if r < params.r_e {
                continue;
            }
            if let Some(p) = prev {
                assert!(e >= p - 1e-12, "dip after r_e at r = {r}");
            }
            prev = Some(e);
        }
    }

    #[test]
    fn steepness_sharpens_the_rise() {
        let mut soft = defaults();
        soft.steepness = 1.0;
        let mut sharp = defaults();
        sharp.steepness = 2.0;
        // Just past the minimum, a larger `a` means a faster climb.
        assert!(energy(&sharp, 1.1) > energy(&soft, 1.1));
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let a = sample_curve(&defaults());
        let b = sample_curve(&defaults());
        for (ya, yb) in a.y.iter().zip(b.y.iter()) {
            assert_eq!(ya.to_bits(), yb.to_bits());
        }
    }

    #[test]
    fn validate_rejects_nonfinite_and_nonpositive() {
        let mut p = defaults();
        p.steepness = f64::NAN;
        assert!(validate(&p).is_err());

        let mut p = defaults();
        p.d_e = 0.0;
        assert!(validate(&p).is_err());

        assert!(validate(&defaults()).is_ok());
    }
}
