//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (chat platforms, text generators).
//!
//! Implementations of these traits live in the services module or in
//! separate integration crates.

pub mod integration;
pub mod services;

// Re-exports
pub use integration::*;
pub use services::*;
