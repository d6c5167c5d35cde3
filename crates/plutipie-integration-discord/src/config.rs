//! Discord configuration

use serde::{Deserialize, Serialize};
use serenity::prelude::GatewayIntents;

/// Configuration for Discord integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Whether to answer in direct messages
    pub respond_to_dms: bool,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            respond_to_dms: true,
        }
    }

    /// Enable or disable direct messages
    pub fn with_dms(mut self, enable: bool) -> Self {
        self.respond_to_dms = enable;
        self
    }

    /// Gateway intents needed to read and answer messages
    pub fn intents(&self) -> GatewayIntents {
        let mut intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
        if self.respond_to_dms {
            intents |= GatewayIntents::DIRECT_MESSAGES;
        }
        intents
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}
