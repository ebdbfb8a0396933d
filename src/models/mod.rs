//! Closed-form energy models.
//!
//! Models are implemented as small, pure functions so the recompute pipeline
//! and the renderers can stay generic: parameters in, energies out, nothing
//! cached between calls.

pub mod lattice;
pub mod morse;
