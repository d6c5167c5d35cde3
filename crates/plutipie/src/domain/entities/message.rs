//! Message Entity
//!
//! Platform-neutral view of a chat message and the references needed to
//! answer it.

use serde::{Deserialize, Serialize};

/// Reference to a prior message, used as a reply target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    /// Platform-specific message ID
    pub message_id: u64,
}

impl MessageRef {
    pub fn new(message_id: u64) -> Self {
        Self { message_id }
    }
}

/// A message received from the chat platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Platform-specific message ID
    pub id: u64,
    /// Author's platform-specific ID
    pub author_id: u64,
    /// Whether the author is a bot account
    #[serde(default)]
    pub author_is_bot: bool,
    /// Message content
    pub content: String,
    /// IDs of users mentioned in the message
    #[serde(default)]
    pub mentions: Vec<u64>,
    /// Whether the message pings @everyone / @here
    #[serde(default)]
    pub mention_everyone: bool,
}

impl IncomingMessage {
    /// Create a new message with no mentions
    pub fn new(id: u64, author_id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            author_id,
            author_is_bot: false,
            content: content.into(),
            mentions: Vec::new(),
            mention_everyone: false,
        }
    }

    /// Add a mentioned user
    pub fn with_mention(mut self, user_id: u64) -> Self {
        self.mentions.push(user_id);
        self
    }

    /// Set the mention-everyone flag
    pub fn with_mention_everyone(mut self, mention_everyone: bool) -> Self {
        self.mention_everyone = mention_everyone;
        self
    }

    /// Mark the author as a bot account
    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }

    pub fn mentions_user(&self, user_id: u64) -> bool {
        self.mentions.contains(&user_id)
    }

    /// Reference to this message for replies
    pub fn reply_ref(&self) -> MessageRef {
        MessageRef::new(self.id)
    }
}

/// The bot's own identity on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotIdentity {
    pub user_id: u64,
}

impl BotIdentity {
    pub fn new(user_id: u64) -> Self {
        Self { user_id }
    }

    /// Mention tags that address this bot (`<@id>` and the nickname form `<@!id>`)
    pub fn mention_tags(&self) -> [String; 2] {
        [
            format!("<@{}>", self.user_id),
            format!("<@!{}>", self.user_id),
        ]
    }

    /// Remove every mention tag of this bot from `content`
    pub fn strip_mentions(&self, content: &str) -> String {
        self.mention_tags()
            .iter()
            .fold(content.to_string(), |acc, tag| acc.replace(tag.as_str(), ""))
    }
}
