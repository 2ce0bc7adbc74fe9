//! Oracle generator for whitespace-trim fixtures of a `{% ... %}` template language.
//!
//! The generators enumerate every combination of trim markers around a block
//! directive, predict the renderer's output from an independent model of the
//! trimming rules, and emit paired source/expectation assertions as Rust test
//! files.

// Core modules
pub mod check;
pub mod combos;
pub mod cond;
pub mod config;
pub mod error;
pub mod fixture;
pub mod loop_else;
pub mod matches;
pub mod trim;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use fixture::{all_files, loop_else_file, ws_file, GeneratedFile};
