//! Mathematical utilities: uniform sample grids.

pub mod grid;

pub use grid::*;
