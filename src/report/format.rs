//! Formatted run summaries.
//!
//! We keep formatting code in one place so:
//! - the model code stays clean and testable
//! - output changes are localized (important for golden tests)

use crate::app::pipeline::{LatticeRun, MorseRun};

/// Format the Morse run summary: parameters, grid stats, and the
/// current-length readout.
pub fn format_morse_summary(run: &MorseRun) -> String {
    let p = &run.params;
    let (r, e) = run.current;
    let mut out = String::new();

    out.push_str("=== bond - Morse potential ===\n");
    out.push_str("E(r) = D_e (1 - e^(-a (r - r_e)))^2\n");
    out.push_str(&format!(
        "D_e={:.0} kJ/mol | a={:.2} | r_e={:.2} Å\n",
        p.d_e, p.steepness, p.r_e
    ));

    if let (Some((x0, x1)), Some((y0, y1))) = (run.curve.x_range(), run.curve.y_range()) {
        out.push_str(&format!(
            "Grid: n={} | r=[{x0:.2}, {x1:.2}] Å | E=[{y0:.2}, {y1:.2}] kJ/mol\n",
            run.curve.len()
        ));
    }

    out.push_str(&format!("\nCurrent: E({r:.2} Å) = {e:.2} kJ/mol\n"));
    out.push_str(&format!(
        "The bond is most stable at r_e = {:.2} Å; stretching past r_e raises the\n\
         energy toward D_e = {:.0} kJ/mol (dissociation).\n",
        p.r_e, p.d_e
    ));

    out
}

/// Format the Born–Lande run summary.
pub fn format_lattice_summary(run: &LatticeRun) -> String {
    let p = &run.params;
    let mut out = String::new();

    out.push_str("=== bond - Born–Lande lattice energy ===\n");
    out.push_str("U = -(N_A M |z+ z-| e^2)/(4 pi eps0 r0) * (1 - 1/n)\n");
    out.push_str(&format!(
        "z+={} | z-={} | n={} | M={:.2}\n",
        p.z_plus, p.z_minus, p.born_n, p.madelung
    ));

    if let (Some((x0, x1)), Some((y0, y1))) = (run.curve.x_range(), run.curve.y_range()) {
        out.push_str(&format!(
            "Grid: n={} | r0=[{x0:.2}, {x1:.2}] nm | U=[{y0:.1}, {y1:.1}] kJ/mol\n",
            run.curve.len()
        ));
    }

    out.push_str(
        "\nU stays negative (exothermic): the lattice binds more strongly as r0\n\
         shrinks or as the ion charges grow.\n",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline;
    use crate::domain::{LatticeParams, MorseParams};

    #[test]
    fn morse_summary_reports_current_point() {
        let run = pipeline::run_morse(&MorseParams::default()).unwrap();
        let text = format_morse_summary(&run);
        assert!(text.contains("E(1.00 Å) = 0.00 kJ/mol"), "{text}");
        assert!(text.contains("D_e=400 kJ/mol"));
        assert!(text.contains("n=400"));
    }

    #[test]
    fn lattice_summary_reports_parameters_and_grid() {
        let run = pipeline::run_lattice(&LatticeParams::default()).unwrap();
        let text = format_lattice_summary(&run);
        assert!(text.contains("z+=1 | z-=1 | n=9 | M=1.75"), "{text}");
        assert!(text.contains("r0=[0.10, 1.00] nm"));
    }
}
