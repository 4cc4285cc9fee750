//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `propgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::PropgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `propgen_adapters::filesystem::LocalFilesystem` (production)
/// - `propgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The input file handle is scoped to `read_to_string` and released on
///   every exit path, including early termination on a parse error
/// - `create_dir_all` is idempotent, so parallel runs over different spec
///   files can share a destination directory
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read an entire file into a string.
    fn read_to_string(&self, path: &Path) -> PropgenResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PropgenResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> PropgenResult<()>;
}
