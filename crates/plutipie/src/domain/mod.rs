//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains request-scoped entities and errors.

pub mod entities;
pub mod errors;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
