//! Text Generator Port
//!
//! Abstract interface for a single-shot text generation call.
//! Implementations can be swapped between providers (Gemini, test fakes).

use async_trait::async_trait;
use std::error::Error;

/// Error type returned by text generators
pub type GenerationFailure = Box<dyn Error + Send + Sync>;

/// Text generation interface
///
/// One call per prompt, no streaming. Implementations return the generated
/// text verbatim and must not retry on their own.
///
/// # Example
///
/// ```rust,ignore
/// use plutipie::ports::TextGenerator;
///
/// struct EchoGenerator;
///
/// #[async_trait]
/// impl TextGenerator for EchoGenerator {
///     async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure> {
///         Ok(prompt.to_string())
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure>;

    /// Get the provider name (e.g., "gemini")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
