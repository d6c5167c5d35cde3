//! Persona - System context and command role framings
//!
//! A persona decides how the assistant introduces itself to the model and
//! which commands it answers. It is loaded once at startup and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::errors::DomainError;

const PLUTUS_SYSTEM_CONTEXT: &str = r#"You are PlutiPie, the helpful AI assistant for Plutus - a finance and entrepreneurship club.

About Plutus:
Plutus is a finance club focused on three main areas:
1. Creating and identifying products
2. Product design and development
3. Business pitching and presentation

Your Role:
- Help new members understand the club and its activities
- Answer questions about finance, product development, and business concepts
- Provide advice on projects and campaigns
- Guide members through their entrepreneurial journey
- Explain concepts related to product design, market analysis, and pitching

When answering:
- Be encouraging and supportive to new members
- Provide clear, practical, and actionable advice
- If a question is outside your expertise, acknowledge it and suggest resources
- Keep responses concise but informative
- Use examples relevant to student entrepreneurs when possible

Remember: You're here to help Plutus members grow their skills in finance, product creation, and business communication."#;

// Lines end with a space before the newline
const COMMUNITY_SYSTEM_CONTEXT: &str = "You are a helpful assistant for a community focused on finance and product design. \n\
Provide clear, accurate, and practical answers. If a question is outside your expertise, \n\
acknowledge limitations and suggest where they might find better information. Keep responses \n\
concise but informative.";

/// A command the bot answers, with its optional role framing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCommand {
    /// Command name without prefix (e.g. "finance")
    pub name: String,
    /// One-line description shown by the help command
    #[serde(default)]
    pub help: String,
    /// Phrase placed in front of the question (e.g. "As a finance expert, ")
    #[serde(default)]
    pub framing: Option<String>,
}

impl RoleCommand {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            framing: None,
        }
    }

    pub fn with_framing(mut self, framing: impl Into<String>) -> Self {
        self.framing = Some(framing.into());
        self
    }

    /// Framing phrase, treating an empty string as absent
    pub fn framing(&self) -> Option<&str> {
        self.framing.as_deref().filter(|f| !f.is_empty())
    }
}

/// Assistant persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name used in logs and help output
    pub name: String,
    /// Instructional text prepended to every prompt
    pub system_context: String,
    /// Commands in the order they are listed by help
    #[serde(default, rename = "command")]
    pub commands: Vec<RoleCommand>,
}

impl Persona {
    /// PlutiPie, the Plutus club assistant
    pub fn plutus() -> Self {
        let framed = |domain: &str| {
            format!("As a {domain} expert helping Plutus club members, answer this: ")
        };

        Self {
            name: "PlutiPie".to_string(),
            system_context: PLUTUS_SYSTEM_CONTEXT.to_string(),
            commands: vec![
                RoleCommand::new(
                    "ask",
                    "Ask a question about Plutus, finance, or product design",
                ),
                RoleCommand::new("finance", "Ask a finance-related question")
                    .with_framing(framed("finance")),
                RoleCommand::new("design", "Ask a product design question")
                    .with_framing(framed("product design")),
                RoleCommand::new("pitch", "Get advice on business pitching")
                    .with_framing(framed("business pitching")),
            ],
        }
    }

    /// Generic finance and product design community assistant
    pub fn community() -> Self {
        Self {
            name: "Community Assistant".to_string(),
            system_context: COMMUNITY_SYSTEM_CONTEXT.to_string(),
            commands: vec![
                RoleCommand::new(
                    "ask",
                    "Ask a question about finance, product design, or other topics",
                ),
                RoleCommand::new("finance", "Ask a finance-related question")
                    .with_framing("As a finance expert, "),
                RoleCommand::new("design", "Ask a product design question")
                    .with_framing("As a product design expert, "),
            ],
        }
    }

    /// Parse a persona from TOML
    ///
    /// ```toml
    /// name = "PlutiPie"
    /// system_context = "You are ..."
    ///
    /// [[command]]
    /// name = "finance"
    /// help = "Ask a finance-related question"
    /// framing = "As a finance expert, "
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, DomainError> {
        let persona: Persona = toml::from_str(content)
            .map_err(|e| DomainError::Validation(format!("Invalid persona file: {}", e)))?;
        persona.validate()?;
        Ok(persona)
    }

    /// Load a persona from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Validation(format!("Failed to read persona from {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Look up a command by its exact name
    pub fn command(&self, name: &str) -> Option<&RoleCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.system_context.trim().is_empty() {
            return Err(DomainError::validation(
                "Persona system_context cannot be empty",
            ));
        }

        for (i, command) in self.commands.iter().enumerate() {
            let name = command.name.trim();
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(DomainError::Validation(format!(
                    "Invalid command name {:?}",
                    command.name
                )));
            }
            if self.commands[..i].iter().any(|c| c.name.trim() == name) {
                return Err(DomainError::Validation(format!(
                    "Duplicate command {:?}",
                    command.name
                )));
            }
        }

        Ok(())
    }
}

/// Built-in personas selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaPreset {
    #[default]
    Plutus,
    Community,
}

impl PersonaPreset {
    pub fn persona(self) -> Persona {
        match self {
            Self::Plutus => Persona::plutus(),
            Self::Community => Persona::community(),
        }
    }
}

impl fmt::Display for PersonaPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plutus => write!(f, "plutus"),
            Self::Community => write!(f, "community"),
        }
    }
}

impl FromStr for PersonaPreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plutus" => Ok(Self::Plutus),
            "community" => Ok(Self::Community),
            other => Err(DomainError::Validation(format!(
                "Unknown persona '{}', expected 'plutus' or 'community'",
                other
            ))),
        }
    }
}
