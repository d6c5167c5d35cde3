//! Configuration management for the PlutiPie bot
//!
//! Secrets come from the environment (optionally seeded from `.env`);
//! everything else comes from CLI flags, which fall back to env vars.

use anyhow::Context;
use plutipie::{Persona, PersonaPreset};
use std::path::Path;
use thiserror::Error;

pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set. Please set DISCORD_TOKEN and GEMINI_API_KEY in your environment or .env file")]
    MissingVar(&'static str),

    #[error("Failed to load persona: {0}")]
    Persona(#[from] plutipie::DomainError),
}

/// Required secrets
#[derive(Clone)]
pub struct Secrets {
    pub discord_token: String,
    pub gemini_api_key: String,
}

impl Secrets {
    /// Read both secrets from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read both secrets through `lookup`; blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        Ok(Self {
            discord_token: require(DISCORD_TOKEN_VAR)?,
            gemini_api_key: require(GEMINI_API_KEY_VAR)?,
        })
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("discord_token", &"***")
            .field("gemini_api_key", &"***")
            .finish()
    }
}

/// Seed the process environment from `path`, or from `.env` when present.
///
/// Variables already set in the environment are kept. An explicit file that
/// cannot be read is an error; a missing `.env` is not.
pub fn load_env(path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => dotenvy::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display())),
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    }
}

/// Pick the persona: a TOML file wins over the built-in preset
pub fn resolve_persona(
    preset: PersonaPreset,
    file: Option<&Path>,
) -> Result<Persona, ConfigError> {
    match file {
        Some(path) => Ok(Persona::load(path)?),
        None => Ok(preset.persona()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_secrets_loaded() {
        let secrets = Secrets::from_lookup(lookup(&[
            ("DISCORD_TOKEN", " token "),
            ("GEMINI_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(secrets.discord_token, "token");
        assert_eq!(secrets.gemini_api_key, "key");
        let debug = format!("{:?}", secrets);
        assert!(debug.contains("***"));
        assert!(!debug.contains("\"token\""));
    }

    #[test]
    fn test_missing_discord_token() {
        let err = Secrets::from_lookup(lookup(&[("GEMINI_API_KEY", "key")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DISCORD_TOKEN")));
        assert!(err.to_string().starts_with("DISCORD_TOKEN is not set"));
    }

    #[test]
    fn test_blank_gemini_key_is_missing() {
        let err = Secrets::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("GEMINI_API_KEY", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("GEMINI_API_KEY")));
    }

    #[test]
    fn test_load_env_file() {
        let path = std::env::temp_dir().join(format!("plutipie-{}.env", std::process::id()));
        fs::write(&path, "PLUTIPIE_TEST_LOG_FILTER=debug\n").unwrap();

        load_env(Some(path.as_path())).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            std::env::var("PLUTIPIE_TEST_LOG_FILTER").as_deref(),
            Ok("debug")
        );
    }

    #[test]
    fn test_load_env_missing_file() {
        let path = PathBuf::from("/nonexistent/plutipie/custom.env");
        let err = load_env(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("custom.env"));
    }

    #[test]
    fn test_resolve_persona_preset() {
        let persona = resolve_persona(PersonaPreset::Community, None).unwrap();
        assert_eq!(persona, Persona::community());
    }

    #[test]
    fn test_resolve_persona_file() {
        let path = std::env::temp_dir().join(format!(
            "plutipie-persona-{}.toml",
            std::process::id()
        ));
        fs::write(
            &path,
            "name = \"Club\"\nsystem_context = \"Be kind.\"\n\n[[command]]\nname = \"ask\"\n",
        )
        .unwrap();

        let persona = resolve_persona(PersonaPreset::Plutus, Some(path.as_path())).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(persona.name, "Club");
        assert!(persona.command("ask").is_some());
    }

    #[test]
    fn test_resolve_persona_missing_file() {
        let path = PathBuf::from("/nonexistent/plutipie/persona.toml");
        let err = resolve_persona(PersonaPreset::Plutus, Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Persona(_)));
    }
}
