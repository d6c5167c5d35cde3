//! PlutiPie Domain Library
//!
//! Core types and services for a chat bot that answers questions with a
//! generative-language model.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): request-scoped entities and errors
//!   - `entities/`: Question, Persona, IncomingMessage, Answer
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `integration`: chat platform send primitive
//!   - `services/`: text generation interface
//!
//! - **Services** (`services/`): prompt composition, answer fetching,
//!   chunked delivery, routing, and the Gemini client
//!
//! - **Application** (`application/`): the per-event Assistant
//!
//! # Usage
//!
//! ```rust,ignore
//! use plutipie::{Assistant, GeminiClient, Persona, Router};
//!
//! let router = Router::new(Arc::new(Persona::plutus()));
//! let assistant = Assistant::new(router, Arc::new(GeminiClient::new(api_key)));
//! assistant.on_message(&message, &bot, &sink).await;
//! ```

pub mod application;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use application::{Assistant, GENERIC_FAILURE_NOTICE, MISSING_QUESTION_NOTICE};
pub use domain::{
    Answer, BotIdentity, DomainError, IncomingMessage, MessageRef, Persona, PersonaPreset,
    Question, RoleCommand,
};
pub use ports::{GenerationFailure, MessageSink, TextGenerator, TypingGuard, MESSAGE_LIMIT};
pub use services::{
    compose, deliver, split_chunks, AnswerFetcher, Dispatch, GeminiClient, GenerationError,
    Router,
};
