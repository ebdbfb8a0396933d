//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during interactive recomputation
//! - exported to JSON/CSV
//! - reloaded later for re-plotting

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which model a curve belongs to. Each model owns one tab of the TUI; the
/// two never interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Morse,
    Lattice,
}

impl CurveKind {
    /// Human-readable label for tab titles and terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            CurveKind::Morse => "Morse bond energy",
            CurveKind::Lattice => "Born–Lande lattice energy",
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            CurveKind::Morse => "r (Å)",
            CurveKind::Lattice => "r0 (nm)",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            CurveKind::Morse => "E (kJ/mol)",
            CurveKind::Lattice => "U (kJ/mol)",
        }
    }

    /// Column header pair for CSV exports.
    pub fn csv_header(self) -> &'static str {
        match self {
            CurveKind::Morse => "r_angstrom,energy_kj_per_mol",
            CurveKind::Lattice => "r0_nm,lattice_energy_kj_per_mol",
        }
    }
}

/// Morse potential parameters (covalent bond tab).
///
/// All four values are finite and positive; the slider ranges below are the
/// supported domains. `r_current` may sit below, at, or above `r_e`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MorseParams {
    /// Bond dissociation energy `D_e` (kJ/mol).
    pub d_e: f64,
    /// Steepness constant `a` (1/Å).
    pub steepness: f64,
    /// Equilibrium bond length `r_e` (Å).
    pub r_e: f64,
    /// Current bond length `r` (Å) — the highlighted query point.
    pub r_current: f64,
}

impl Default for MorseParams {
    fn default() -> Self {
        // The current length starts at the equilibrium length, i.e. on the
        // curve minimum.
        Self {
            d_e: 400.0,
            steepness: 1.2,
            r_e: 1.0,
            r_current: 1.0,
        }
    }
}

/// Born–Lande parameters (ionic lattice tab).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParams {
    /// Cation charge magnitude `|z⁺|`.
    pub z_plus: u32,
    /// Anion charge magnitude `|z⁻|`.
    pub z_minus: u32,
    /// Born exponent `n` (dimensionless, must exceed 1).
    pub born_n: u32,
    /// Madelung constant `M` (geometry of the crystal lattice).
    pub madelung: f64,
}

impl Default for LatticeParams {
    fn default() -> Self {
        // Rock-salt-like defaults: unit charges, n = 9, M ≈ 1.75.
        Self {
            z_plus: 1,
            z_minus: 1,
            born_n: 9,
            madelung: 1.75,
        }
    }
}

/// Closed interval plus adjustment step for a slider-style parameter field.
///
/// Bound enforcement is the parameter source's job: the TUI clamps through
/// `nudge`, while explicit CLI flags are validated by the models instead.
#[derive(Debug, Clone, Copy)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    /// Move `value` by `delta` steps, clamped to the range.
    pub fn nudge(&self, value: f64, delta: i32) -> f64 {
        (value + f64::from(delta) * self.step).clamp(self.min, self.max)
    }
}

/// Bond dissociation energy `D_e` (kJ/mol).
pub const D_E_RANGE: ParamRange = ParamRange {
    min: 100.0,
    max: 1000.0,
    step: 10.0,
};

/// Steepness constant `a` (1/Å).
pub const STEEPNESS_RANGE: ParamRange = ParamRange {
    min: 0.5,
    max: 3.0,
    step: 0.1,
};

/// Equilibrium bond length `r_e` (Å).
pub const R_E_RANGE: ParamRange = ParamRange {
    min: 0.5,
    max: 2.5,
    step: 0.05,
};

/// Current bond length `r` (Å).
pub const R_CURRENT_RANGE: ParamRange = ParamRange {
    min: 0.3,
    max: 3.0,
    step: 0.01,
};

/// Madelung constant `M`.
pub const MADELUNG_RANGE: ParamRange = ParamRange {
    min: 1.5,
    max: 2.5,
    step: 0.01,
};

/// Ion charge magnitudes `|z⁺|`, `|z⁻|` (integer slider).
pub const ION_CHARGE_MIN: u32 = 1;
pub const ION_CHARGE_MAX: u32 = 3;

/// Born exponent `n` (integer slider).
pub const BORN_EXPONENT_MIN: u32 = 5;
pub const BORN_EXPONENT_MAX: u32 = 15;

/// Morse display domain (Å) and sample count.
pub const MORSE_R_MIN_ANGSTROM: f64 = 0.3;
pub const MORSE_R_MAX_ANGSTROM: f64 = 3.0;
pub const MORSE_SAMPLES: usize = 400;

/// Born–Lande display domain (nm) and sample count.
pub const LATTICE_R0_MIN_NM: f64 = 0.1;
pub const LATTICE_R0_MAX_NM: f64 = 1.0;
pub const LATTICE_SAMPLES: usize = 300;

/// A sampled curve as parallel arrays of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveGrid {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate `(x, y)` pairs, the shape chart renderers consume.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn x_range(&self) -> Option<(f64, f64)> {
        range_of(&self.x)
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        range_of(&self.y)
    }
}

fn range_of(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max >= min {
        Some((min, max))
    } else {
        None
    }
}

/// Model parameters as stored in a curve file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum CurveParams {
    Morse(MorseParams),
    Lattice(LatticeParams),
}

impl CurveParams {
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveParams::Morse(_) => CurveKind::Morse,
            CurveParams::Lattice(_) => CurveKind::Lattice,
        }
    }
}

/// A saved curve file (JSON): the exact parameters plus the sampled grid,
/// ready for re-plotting without recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated: NaiveDate,
    #[serde(flatten)]
    pub params: CurveParams,
    pub grid: CurveGrid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_clamps_to_range() {
        let r = STEEPNESS_RANGE;
        assert!((r.nudge(1.2, 1) - 1.3).abs() < 1e-12);
        assert_eq!(r.nudge(2.95, 3), r.max);
        assert_eq!(r.nudge(0.55, -10), r.min);
    }

    #[test]
    fn grid_ranges_ignore_nothing_and_reject_empty() {
        let grid = CurveGrid {
            x: vec![0.3, 1.0, 3.0],
            y: vec![5.0, 0.0, 400.0],
        };
        assert_eq!(grid.x_range(), Some((0.3, 3.0)));
        assert_eq!(grid.y_range(), Some((0.0, 400.0)));

        let empty = CurveGrid { x: vec![], y: vec![] };
        assert_eq!(empty.y_range(), None);
    }
}
