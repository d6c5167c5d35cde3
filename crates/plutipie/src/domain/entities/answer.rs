//! Answer Entity
//!
//! Result of one text-generation request. Failures are carried as data and
//! only turned into user-facing text when the answer is delivered.

use serde::Serialize;
use std::fmt;

/// Prefix shown to users when generation failed
pub const FAILURE_PREFIX: &str = "Sorry, I couldn't generate a response: ";

/// Outcome of asking the remote model a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Answer {
    /// Text returned by the model, verbatim
    Generated(String),
    /// Description of why generation failed
    Failed(String),
}

impl Answer {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Collapse into the text that is sent to the channel
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Failed(detail) => format!("{FAILURE_PREFIX}{detail}"),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated(text) => f.write_str(text),
            Self::Failed(detail) => write!(f, "{FAILURE_PREFIX}{detail}"),
        }
    }
}
