//! Domain types shared across the recompute pipeline.
//!
//! This module defines:
//!
//! - the two model parameter sets (`MorseParams`, `LatticeParams`)
//! - slider ranges and display-grid constants
//! - sampled curve containers and the exported curve file schema

pub mod types;

pub use types::*;
