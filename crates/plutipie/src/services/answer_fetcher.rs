//! Answer Fetcher
//!
//! Fail-soft wrapper around a [`TextGenerator`]: every call yields an
//! [`Answer`], never an error.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::Answer;
use crate::ports::TextGenerator;

/// Fetches answers from a text generator
pub struct AnswerFetcher<G: TextGenerator> {
    generator: Arc<G>,
}

impl<G: TextGenerator> AnswerFetcher<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Send the prompt to the generator once
    ///
    /// No retry and no timeout: a hung call hangs this request only.
    pub async fn fetch(&self, prompt: &str) -> Answer {
        let started = Instant::now();

        match self.generator.generate(prompt).await {
            Ok(text) => {
                tracing::debug!(
                    provider = %self.generator.provider_name(),
                    model = %self.generator.model_id(),
                    prompt_len = prompt.len(),
                    answer_len = text.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Answer generated"
                );
                Answer::Generated(text)
            }
            Err(e) => {
                tracing::warn!(
                    provider = %self.generator.provider_name(),
                    model = %self.generator.model_id(),
                    error = %e,
                    "Text generation failed"
                );
                Answer::Failed(e.to_string())
            }
        }
    }
}

impl<G: TextGenerator> Clone for AnswerFetcher<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}
