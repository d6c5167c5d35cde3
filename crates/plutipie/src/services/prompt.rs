//! Prompt Composer
//!
//! Builds the final prompt from the persona's system context, an optional
//! role framing and the user's question.

use crate::domain::entities::Question;

/// Compose the prompt sent to the model
///
/// The system context is prepended exactly once, followed by a blank line
/// and the question with its framing phrase (if any) in front.
pub fn compose(system_context: &str, role_framing: Option<&str>, question: &Question) -> String {
    let framing = role_framing.unwrap_or_default();
    let mut prompt =
        String::with_capacity(system_context.len() + 2 + framing.len() + question.as_str().len());
    prompt.push_str(system_context);
    prompt.push_str("\n\n");
    prompt.push_str(framing);
    prompt.push_str(question.as_str());
    prompt
}
