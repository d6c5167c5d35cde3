//! Discord channel sink

use async_trait::async_trait;
use plutipie::{DomainError, MessageRef, MessageSink, TypingGuard};
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;
use tracing::{debug, error};

/// Send primitive bound to one Discord channel
pub struct ChannelSink {
    http: Arc<Http>,
    channel: ChannelId,
}

impl ChannelSink {
    /// Create a sink for a channel
    pub fn new(http: Arc<Http>, channel: ChannelId) -> Self {
        Self { http, channel }
    }

    pub fn channel_id(&self) -> ChannelId {
        self.channel
    }
}

#[async_trait]
impl MessageSink for ChannelSink {
    async fn send(&self, content: &str) -> Result<(), DomainError> {
        debug!(channel_id = %self.channel, content_len = %content.len(), "Sending message to Discord");

        self.channel
            .say(&self.http, content)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))
            .map_err(DomainError::delivery)?;

        Ok(())
    }

    async fn reply(&self, target: MessageRef, content: &str) -> Result<(), DomainError> {
        debug!(
            channel_id = %self.channel,
            message_id = %target.message_id,
            content_len = %content.len(),
            "Replying to Discord message"
        );

        self.channel
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(content)
                    .reference_message((self.channel, MessageId::new(target.message_id))),
            )
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord reply"))
            .map_err(DomainError::delivery)?;

        Ok(())
    }

    /// serenity re-sends the indicator every few seconds until stopped
    fn start_typing(&self) -> TypingGuard {
        let typing = self.channel.start_typing(&self.http);
        TypingGuard::new(move || {
            typing.stop();
        })
    }
}
