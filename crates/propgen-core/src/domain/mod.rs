//! Core domain layer for propgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!

pub mod capability;
pub mod error;
pub mod property;
pub mod spec;

// Re-exports for convenience
pub use capability::Capability;
pub use error::{DomainError, ErrorCategory};
pub use property::Property;
pub use spec::{ClassSpec, DEFAULT_USINGS};
