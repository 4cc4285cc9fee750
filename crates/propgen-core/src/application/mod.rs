//! Application layer: the generation use case and its ports.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `propgen-adapters` implement
//! these; `GenerateService` orchestrates the use case over them.

pub mod error;
pub mod generate_service;
pub mod ports;

pub use error::ApplicationError;
pub use generate_service::{GenerateService, GeneratedClass};
