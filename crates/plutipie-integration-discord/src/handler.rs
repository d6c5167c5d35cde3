//! Gateway event handler

use plutipie::{Assistant, BotIdentity, IncomingMessage, TextGenerator};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::gateway::Ready;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

use crate::client::ChannelSink;
use crate::config::DiscordConfig;

/// serenity event handler forwarding messages to the assistant
pub struct DiscordHandler<G: TextGenerator> {
    assistant: Arc<Assistant<G>>,
    config: DiscordConfig,
    bot: OnceLock<BotIdentity>,
}

impl<G: TextGenerator> DiscordHandler<G> {
    pub fn new(assistant: Arc<Assistant<G>>, config: DiscordConfig) -> Self {
        Self {
            assistant,
            config,
            bot: OnceLock::new(),
        }
    }

    /// The bot's identity, recorded on `ready` or fetched on first use
    async fn identity(&self, ctx: &Context) -> Option<BotIdentity> {
        if let Some(bot) = self.bot.get() {
            return Some(*bot);
        }

        match ctx.http.get_current_user().await {
            Ok(user) => Some(*self.bot.get_or_init(|| BotIdentity::new(user.id.get()))),
            Err(e) => {
                warn!(error = %e, "Failed to fetch bot user");
                None
            }
        }
    }
}

/// Convert a serenity message into the platform-neutral form
fn to_incoming(msg: &SerenityMessage) -> IncomingMessage {
    IncomingMessage {
        id: msg.id.get(),
        author_id: msg.author.id.get(),
        author_is_bot: msg.author.bot,
        content: msg.content.clone(),
        mentions: msg.mentions.iter().map(|u| u.id.get()).collect(),
        mention_everyone: msg.mention_everyone,
    }
}

#[async_trait]
impl<G: TextGenerator + 'static> EventHandler for DiscordHandler<G> {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        let _ = self.bot.set(BotIdentity::new(ready.user.id.get()));

        info!("✅ {} has connected to Discord!", ready.user.name);
        info!("📊 Bot is active in {} server(s)", ready.guilds.len());
        info!(
            persona = %self.assistant.persona().name,
            prefix = %self.assistant.router().prefix(),
            "🤖 Ready to answer questions!"
        );
    }

    async fn message(&self, ctx: Context, msg: SerenityMessage) {
        if msg.guild_id.is_none() && !self.config.respond_to_dms {
            debug!(channel_id = %msg.channel_id, "Ignoring direct message");
            return;
        }

        let Some(bot) = self.identity(&ctx).await else {
            return;
        };

        let sink = ChannelSink::new(Arc::clone(&ctx.http), msg.channel_id);
        self.assistant
            .on_message(&to_incoming(&msg), &bot, &sink)
            .await;
    }
}
