//! Application Layer
//!
//! Use cases orchestrating domain services for one chat event.

mod assistant;

pub use assistant::*;
