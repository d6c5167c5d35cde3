//! Platform Integration Port
//!
//! Abstract send primitive for messaging platforms such as Discord.
//!
//! Implementations of this trait should live in separate crates
//! (e.g., plutipie-integration-discord).

use async_trait::async_trait;

use crate::domain::entities::MessageRef;
use crate::domain::errors::DomainError;

/// Hard per-message character ceiling of the chat platform
pub const MESSAGE_LIMIT: usize = 2000;

/// Keeps a channel's typing indicator up until dropped
#[must_use = "typing stops as soon as the guard is dropped"]
pub struct TypingGuard {
    stop: Option<Box<dyn FnOnce() + Send>>,
}

impl TypingGuard {
    /// Guard that runs `stop` when dropped
    pub fn new(stop: impl FnOnce() + Send + 'static) -> Self {
        Self {
            stop: Some(Box::new(stop)),
        }
    }

    /// Guard for sinks without a typing indicator
    pub fn noop() -> Self {
        Self { stop: None }
    }
}

impl Drop for TypingGuard {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl std::fmt::Debug for TypingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypingGuard")
            .field("active", &self.stop.is_some())
            .finish()
    }
}

/// Outbound side of a single chat channel
///
/// A sink is bound to one channel; every call posts into that channel.
/// Payloads passed here are already within [`MESSAGE_LIMIT`].
///
/// # Example
///
/// ```rust,ignore
/// use plutipie::ports::MessageSink;
///
/// struct DiscordChannel { /* ... */ }
///
/// #[async_trait]
/// impl MessageSink for DiscordChannel {
///     async fn send(&self, content: &str) -> Result<(), DomainError> {
///         // Post to the channel
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Post a plain message to the channel
    async fn send(&self, content: &str) -> Result<(), DomainError>;

    /// Post a message as a reply to `target`
    async fn reply(&self, target: MessageRef, content: &str) -> Result<(), DomainError>;

    /// Show a typing indicator until the returned guard is dropped
    fn start_typing(&self) -> TypingGuard {
        TypingGuard::noop()
    }
}
