//! Application layer errors.
//!
//! These represent failures in orchestration — reaching the input file,
//! persisting the output — not business logic. Business logic errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while orchestrating a generation run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The referenced specification file does not exist.
    #[error("the specification file '{}' does not exist", path.display())]
    MissingInputFile { path: PathBuf },

    /// A filesystem operation failed.
    #[error("filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingInputFile { path } => vec![
                format!("No file at: {}", path.display()),
                "Paths are resolved relative to the current directory".into(),
                "Check for typos in the argument".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInputFile { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
