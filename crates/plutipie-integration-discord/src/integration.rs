//! Discord client startup

use plutipie::{Assistant, TextGenerator};
use serenity::Client;
use std::sync::Arc;
use tracing::info;

use crate::config::DiscordConfig;
use crate::handler::DiscordHandler;

/// Runs the assistant on a Discord gateway connection
pub struct DiscordIntegration<G: TextGenerator> {
    config: DiscordConfig,
    assistant: Arc<Assistant<G>>,
}

impl<G: TextGenerator + 'static> DiscordIntegration<G> {
    /// Create a new Discord integration
    pub fn new(config: DiscordConfig, assistant: Arc<Assistant<G>>) -> Self {
        Self { config, assistant }
    }

    /// Connect to the gateway and handle events until the connection ends
    pub async fn run(self) -> Result<(), serenity::Error> {
        let intents = self.config.intents();
        let handler = DiscordHandler::new(self.assistant, self.config.clone());

        let mut client = Client::builder(&self.config.token, intents)
            .event_handler(handler)
            .await?;

        info!("🚀 Starting bot...");
        client.start().await
    }
}
