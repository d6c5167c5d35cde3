//! Service Ports
//!
//! External service interfaces.

mod text_generator;

pub use text_generator::*;
