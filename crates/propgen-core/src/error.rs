//! Unified error handling for Propgen Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

// Re-export so downstream callers only need `use propgen_core::error::*`.
pub use crate::domain::ErrorCategory;

/// Root error type for Propgen Core operations.
///
/// Every error is fatal and unrecovered: it terminates processing of the
/// current input immediately, and the CLI terminates the whole run rather
/// than continuing to the next file. (No per-file isolation — a known
/// limitation, recorded in DESIGN.md.)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropgenError {
    /// Errors from the domain layer (specification violations).
    #[error("specification error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("generation error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PropgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in propgen".into(),
                "Please report it with the specification file that triggered it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Convenient result type alias.
pub type PropgenResult<T> = Result<T, PropgenError>;
