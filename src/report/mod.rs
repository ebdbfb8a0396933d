//! Formatted terminal output for the non-interactive subcommands.

pub mod format;

pub use format::*;
