//! PlutiPie bot - answers Discord questions with Gemini
//!
//! Loads secrets and persona, then runs the Discord gateway client until
//! the connection ends.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use plutipie::{Assistant, GeminiClient, PersonaPreset, Router, TextGenerator};
use plutipie_integration_discord::{DiscordConfig, DiscordIntegration};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{load_env, resolve_persona, Secrets};

#[derive(Parser, Debug)]
#[command(name = "plutipie")]
#[command(about = "PlutiPie - Discord question answering bot", long_about = None)]
#[command(version)]
struct Cli {
    /// Load environment from this file instead of .env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Built-in persona: plutus or community
    #[arg(long, env = "PLUTIPIE_PERSONA", default_value_t = PersonaPreset::Plutus)]
    persona: PersonaPreset,

    /// TOML persona file (overrides --persona)
    #[arg(long, env = "PLUTIPIE_PERSONA_FILE")]
    persona_file: Option<PathBuf>,

    /// Command prefix
    #[arg(
        long,
        env = "COMMAND_PREFIX",
        default_value = "!",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    prefix: String,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL")]
    model: Option<String>,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_BASE_URL")]
    base_url: Option<String>,

    /// Do not answer mentions
    #[arg(long)]
    no_mentions: bool,

    /// Do not answer direct messages
    #[arg(long)]
    no_dms: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env(Cli::parse().env_file.as_deref())?;
    // Parsed again so env-backed flags see values from the env file
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secrets = Secrets::from_env()?;
    let persona = resolve_persona(cli.persona, cli.persona_file.as_deref())
        .context("Failed to resolve persona")?;

    tracing::info!(
        persona = %persona.name,
        commands = persona.commands.len(),
        prefix = %cli.prefix,
        "🧠 PlutiPie initializing..."
    );

    let mut gemini = GeminiClient::new(secrets.gemini_api_key);
    if let Some(model) = cli.model {
        gemini = gemini.with_model(model);
    }
    if let Some(base_url) = cli.base_url {
        gemini = gemini.with_base_url(base_url);
    }
    tracing::info!(model = %gemini.model_id(), "✅ Using Gemini model");

    let router = Router::new(Arc::new(persona))
        .with_prefix(cli.prefix)
        .with_mentions(!cli.no_mentions);
    let assistant = Arc::new(Assistant::new(router, Arc::new(gemini)));

    let discord = DiscordConfig::new(secrets.discord_token).with_dms(!cli.no_dms);

    DiscordIntegration::new(discord, assistant)
        .run()
        .await
        .context("Discord client stopped")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "plutipie",
            "--persona",
            "community",
            "--prefix",
            "?",
            "--model",
            "gemini-2.0-flash",
            "--no-mentions",
        ])
        .unwrap();

        assert_eq!(cli.persona, PersonaPreset::Community);
        assert_eq!(cli.prefix, "?");
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert!(cli.no_mentions);
        assert!(!cli.no_dms);
        assert!(cli.env_file.is_none());
    }

    #[test]
    fn test_cli_env_file() {
        let cli = Cli::try_parse_from(["plutipie", "--env-file", "custom.env"]).unwrap();
        assert_eq!(cli.env_file, Some(PathBuf::from("custom.env")));
    }

    #[test]
    fn test_cli_rejects_empty_prefix() {
        assert!(Cli::try_parse_from(["plutipie", "--prefix", ""]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_persona() {
        assert!(Cli::try_parse_from(["plutipie", "--persona", "pirate"]).is_err());
    }
}
