//! Born–Lande lattice energy for an ionic crystal.
//!
//! `U = -(N_A M |z⁺ z⁻| e² / (4π ε₀ r₀)) (1 - 1/n)`
//!
//! Distances are entered in nanometers and converted to meters; results are
//! reported in kJ/mol. `U` is negative for every valid parameter set:
//! assembling the lattice from gas-phase ions releases energy, and it
//! releases more as the ions sit closer or carry larger charges.

use crate::domain::{
    CurveGrid, LATTICE_R0_MAX_NM, LATTICE_R0_MIN_NM, LATTICE_SAMPLES, LatticeParams,
};
use crate::error::AppError;
use crate::math::linspace;

/// Elementary charge (C), CODATA 2018 exact value.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Avogadro constant (1/mol), CODATA 2018 exact value.
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Vacuum permittivity (F/m), CODATA 2018.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_8128e-12;

/// `N_A e² / (4π ε₀)` (J·m/mol): the electrostatic prefactor shared by
/// every evaluation.
const COULOMB_FACTOR: f64 = AVOGADRO * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE
    / (4.0 * std::f64::consts::PI * VACUUM_PERMITTIVITY);

const NM_TO_M: f64 = 1e-9;

/// Evaluate the lattice energy (kJ/mol) at interionic distance `r0` (nm).
pub fn energy(params: &LatticeParams, r0_nm: f64) -> f64 {
    let r_m = r0_nm * NM_TO_M;
    let charges = f64::from(params.z_plus) * f64::from(params.z_minus);
    let born = 1.0 - 1.0 / f64::from(params.born_n);
    let u_j_per_mol = -(COULOMB_FACTOR * params.madelung * charges / r_m) * born;
    u_j_per_mol / 1000.0
}

/// Sample the lattice-energy curve over the standard display domain.
pub fn sample_curve(params: &LatticeParams) -> CurveGrid {
    let r0 = linspace(LATTICE_R0_MIN_NM, LATTICE_R0_MAX_NM, LATTICE_SAMPLES);
    let u = r0.iter().map(|&ri| energy(params, ri)).collect();
    CurveGrid { x: r0, y: u }
}

/// Validate parameters before evaluation.
///
/// `n = 0` or `n = 1` would make the `(1 - 1/n)` term degenerate and a zero
/// charge would flatten the curve to nothing; both are rejected here in case
/// a caller bypasses the slider bounds.
pub fn validate(params: &LatticeParams) -> Result<(), AppError> {
    if params.z_plus == 0 || params.z_minus == 0 {
        return Err(AppError::invalid("Ion charges must be at least 1."));
    }
    if params.born_n < 2 {
        return Err(AppError::invalid(format!(
            "Born exponent must exceed 1, got {}.",
            params.born_n
        )));
    }
    if !params.madelung.is_finite() || params.madelung <= 0.0 {
        return Err(AppError::invalid(format!(
            "Madelung constant must be finite and positive, got {}.",
            params.madelung
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> LatticeParams {
        LatticeParams {
            z_plus: 1,
            z_minus: 1,
            born_n: 9,
            madelung: 1.75,
        }
    }

    #[test]
    fn golden_value_at_point_two_nm() {
        // U(0.2 nm; 1, 1, n=9, M=1.75) = -1080.609 kJ/mol with the CODATA
        // constants above.
        let u = energy(&defaults(), 0.2);
        assert!((u + 1080.609).abs() < 5e-3, "got {u}");
    }

    #[test]
    fn always_negative_on_grid() {
        let curve = sample_curve(&defaults());
        assert_eq!(curve.len(), 300);
        assert!(curve.y.iter().all(|&u| u < 0.0));
    }

    #[test]
    fn deepens_as_distance_shrinks() {
        // Moving along the grid toward larger r0, U must strictly rise
        // toward zero.
        let curve = sample_curve(&defaults());
        for w in curve.y.windows(2) {
            assert!(w[1] > w[0], "U not strictly increasing with r0");
        }
    }

    #[test]
    fn scales_linearly_with_charges_and_madelung() {
        let base = energy(&defaults(), 0.3);

        let mut doubled = defaults();
        doubled.z_plus = 2;
        let u2 = energy(&doubled, 0.3);
        assert!((u2 / base - 2.0).abs() < 1e-12);

        let mut scaled = defaults();
        scaled.madelung = 3.5;
        let um = energy(&scaled, 0.3);
        assert!((um / base - 2.0).abs() < 1e-12);
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
    fn validate_rejects_degenerate_parameters() {
        let mut p = defaults();
        p.born_n = 1;
        assert!(validate(&p).is_err());

        let mut p = defaults();
        p.z_minus = 0;
        assert!(validate(&p).is_err());

        let mut p = defaults();
        p.madelung = f64::INFINITY;
        assert!(validate(&p).is_err());

        assert!(validate(&defaults()).is_ok());
    }
}
