//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl DomainError {
    pub fn validation<T: AsRef<str>>(message: T) -> Self {
        Self::Validation(message.as_ref().to_string())
    }

    pub fn delivery<E: std::fmt::Display>(err: E) -> Self {
        Self::Delivery(err.to_string())
    }
}
