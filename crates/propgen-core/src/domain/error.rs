use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Specification Errors (reject the whole input file)
    // ========================================================================
    #[error(
        "'{line}' is an unknown interface identifier in the 'interfaces' section. \
         The only valid values are 'IChangeTracking' and 'INotifyPropertyChanged' (case insensitive)."
    )]
    UnknownCapability { line: String },

    #[error("don't know how to handle this property specification: {line}")]
    MalformedPropertySpec { line: String },

    #[error("this property specification has three parts, but the first part isn't an 'x': {line}")]
    InvalidCollectionFlag { line: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("required field missing from specification: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("repeating a {unit_len}-byte unit {count} times would overflow the representable length")]
    LengthOverflow { unit_len: usize, count: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCapability { line } => vec![
                format!("'{}' is not a recognized capability", line),
                "Valid capabilities:".into(),
                "  • IChangeTracking       - change tracking with original-value snapshots".into(),
                "  • INotifyPropertyChanged - per-set change notification".into(),
            ],
            Self::MalformedPropertySpec { .. } => vec![
                "Property lines take one of two forms:".into(),
                "  <Type> <Name>      - scalar property, e.g. 'String Name'".into(),
                "  x <Type> <Name>    - collection property, e.g. 'x List<Int32> Items'".into(),
            ],
            Self::InvalidCollectionFlag { .. } => vec![
                "Three-part property lines must start with 'x' (case insensitive)".into(),
                "Example: x List<Order> Orders".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add a '{}' section with a non-empty value", field),
                "Required sections: namespace, classname, outputfilename".into(),
            ],
            Self::LengthOverflow { .. } => vec![
                "The specification produced an absurdly large rendering".into(),
                "This is almost certainly a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCapability { .. }
            | Self::MalformedPropertySpec { .. }
            | Self::InvalidCollectionFlag { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::LengthOverflow { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
