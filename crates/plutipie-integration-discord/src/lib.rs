//! Discord Integration for PlutiPie
//!
//! This crate connects the PlutiPie assistant to Discord through serenity's
//! gateway client.
//!
//! # Usage
//!
//! ```rust,ignore
//! use plutipie_integration_discord::{DiscordConfig, DiscordIntegration};
//!
//! let config = DiscordConfig::new("your-bot-token");
//! DiscordIntegration::new(config, assistant).run().await?;
//! ```

mod client;
mod config;
mod handler;
mod integration;

pub use client::ChannelSink;
pub use config::DiscordConfig;
pub use handler::DiscordHandler;
pub use integration::DiscordIntegration;
