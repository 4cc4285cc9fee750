//! Propgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the propgen
//! class generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           propgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     propgen-adapters (Infrastructure)   │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ClassSpec, Property, Parser, Synth)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! Pure pipeline — text in, source text out:
//!
//! ```rust
//! use propgen_core::{parser::SpecParser, synth};
//!
//! let input = "namespace\nAcme.Models\nclassname\nWidget\noutputfilename\nWidget.cs\n";
//! let spec = SpecParser::parse_str(input).unwrap();
//! let source = synth::synthesize(&spec).unwrap();
//! assert!(source.contains("public partial class Widget"));
//! ```
//!
//! Or the full use case, with an injected filesystem adapter:
//!
//! ```rust,ignore
//! let service = GenerateService::new(filesystem); // impl Filesystem
//! let summary = service.generate("widget.propspec".as_ref())?;
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Line-oriented specification parser
pub mod parser;

// Deterministic code synthesis
pub mod synth;

// Pure string helpers shared by the synthesizer
pub mod text;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GenerateService, GeneratedClass, ports::Filesystem};
    pub use crate::domain::{Capability, ClassSpec, DomainError, Property};
    pub use crate::error::{PropgenError, PropgenResult};
    pub use crate::parser::SpecParser;
    pub use crate::synth::synthesize;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
