//! Utility functions shared by the library and the `sfx` binary.
//!
//! - [`input`] - Loading texts and patterns from arguments, files and stdin
//! - [`progress`] - Progress bar facade (silent without the `progress` feature)

pub mod input;
pub mod progress;

pub use input::*;
