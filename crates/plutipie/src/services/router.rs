//! Command / Mention Router
//!
//! Classifies each incoming message into exactly one [`Dispatch`], so a
//! single event can never trigger two replies.

use std::sync::Arc;

use crate::domain::entities::{BotIdentity, IncomingMessage, MessageRef, Persona, Question};

/// Default command prefix
pub const DEFAULT_PREFIX: &str = "!";

/// Built-in command listing the persona's commands
pub const HELP_COMMAND: &str = "help";

/// What to do with an incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A known command with its question
    Command { command: String, question: Question },
    /// A known command invoked without a question
    MissingArgument { command: String },
    /// The built-in help command
    Help,
    /// The bot was mentioned with a question
    Mention {
        question: Question,
        reply_to: MessageRef,
    },
    /// Nothing to answer
    Ignore,
}

/// Decides, per message, between command, mention and ignore
#[derive(Debug, Clone)]
pub struct Router {
    persona: Arc<Persona>,
    prefix: String,
    respond_to_mentions: bool,
}

impl Router {
    pub fn new(persona: Arc<Persona>) -> Self {
        Self {
            persona,
            prefix: DEFAULT_PREFIX.to_string(),
            respond_to_mentions: true,
        }
    }

    /// Set the command prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable or disable answering mentions
    pub fn with_mentions(mut self, enable: bool) -> Self {
        self.respond_to_mentions = enable;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn responds_to_mentions(&self) -> bool {
        self.respond_to_mentions
    }

    /// Classify a message
    ///
    /// Command matching takes precedence: a message starting with the prefix
    /// is never treated as a mention, even if it mentions the bot.
    pub fn classify(&self, message: &IncomingMessage, bot: &BotIdentity) -> Dispatch {
        if message.author_id == bot.user_id || message.author_is_bot {
            return Dispatch::Ignore;
        }

        if let Some(rest) = message.content.strip_prefix(self.prefix.as_str()) {
            return self.classify_command(rest);
        }

        if self.respond_to_mentions
            && message.mentions_user(bot.user_id)
            && !message.mention_everyone
        {
            return match Question::parse(bot.strip_mentions(&message.content)) {
                Ok(question) => Dispatch::Mention {
                    question,
                    reply_to: message.reply_ref(),
                },
                Err(_) => Dispatch::Ignore,
            };
        }

        Dispatch::Ignore
    }

    fn classify_command(&self, rest: &str) -> Dispatch {
        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument),
            None => (rest, ""),
        };

        if name.is_empty() {
            return Dispatch::Ignore;
        }

        let Some(command) = self.persona.command(name) else {
            if name == HELP_COMMAND {
                return Dispatch::Help;
            }
            tracing::debug!(command = %name, "Ignoring unknown command");
            return Dispatch::Ignore;
        };

        match Question::parse(argument) {
            Ok(question) => Dispatch::Command {
                command: command.name.clone(),
                question,
            },
            Err(_) => Dispatch::MissingArgument {
                command: command.name.clone(),
            },
        }
    }
}
