//! Curve rendering outside the TUI.
//!
//! - ASCII plots for quick terminal output (`ascii`)
//! - standalone SVG charts (`svg`)

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;
