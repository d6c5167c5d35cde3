//! Services
//!
//! The request pipeline: compose a prompt, fetch an answer, deliver it.
//! - prompt: Prompt Composer
//! - answer_fetcher: fail-soft wrapper around a text generator
//! - responder: chunked delivery to a channel sink
//! - router: command / mention classification
//! - gemini: Gemini `generateContent` client

pub mod answer_fetcher;
pub mod gemini;
pub mod prompt;
pub mod responder;
pub mod router;

pub use answer_fetcher::AnswerFetcher;
pub use gemini::{GeminiClient, GenerationError};
pub use prompt::compose;
pub use responder::{deliver, split_chunks};
pub use router::{Dispatch, Router};
