//! Test utilities for trimgen
//!
//! This crate provides shared testing utilities used across the trimgen workspace.

use tempfile::TempDir;

mod assertions;

pub use assertions::{assertion_args, parse_string_literals};

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps generated fixture files from tests in a single gitignored
/// location that is easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use trimgen_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("ws.rs");
/// std::fs::write(&file_path, "// generated").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
