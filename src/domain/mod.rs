//! Domain layer - Pure business abstractions
//!
//! This layer contains NO I/O. Only domain error types.

pub mod errors;

pub use errors::DomainError;
