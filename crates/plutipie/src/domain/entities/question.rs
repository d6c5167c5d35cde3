//! Question - Validated user question
//!
//! Pure domain entity without infrastructure dependencies.

use serde::Serialize;
use std::fmt;

use crate::domain::errors::DomainError;

/// A trimmed, non-empty question ready to be composed into a prompt.
///
/// The only way to obtain a `Question` is through [`Question::parse`], so an
/// empty question can never reach the answer fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question(String);

impl Question {
    /// Trim the raw text and reject it if nothing is left
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Question cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Question {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
