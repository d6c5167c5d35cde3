//! In-memory fakes shared by unit tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::MessageRef;
use crate::domain::errors::DomainError;
use crate::ports::{GenerationFailure, MessageSink, TextGenerator, TypingGuard};

/// One recorded outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Post(String),
    Reply(MessageRef, String),
    TypingStarted,
    TypingStopped,
}

impl Sent {
    pub fn content(&self) -> Option<&str> {
        match self {
            Sent::Post(c) | Sent::Reply(_, c) => Some(c),
            Sent::TypingStarted | Sent::TypingStopped => None,
        }
    }
}

/// Sink that records every call, optionally failing on the n-th message
#[derive(Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<Sent>>>,
    fail_on: Option<usize>,
    messages: AtomicUsize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the message send with this zero-based index
    pub fn failing_on(index: usize) -> Self {
        Self {
            fail_on: Some(index),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Recorded messages without typing indicators
    pub fn messages(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| s.content().is_some())
            .collect()
    }

    fn record(&self, entry: Sent) -> Result<(), DomainError> {
        let index = self.messages.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(index) {
            return Err(DomainError::Delivery("connection reset".to_string()));
        }
        self.sent.lock().unwrap().push(entry);
        Ok(())
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn send(&self, content: &str) -> Result<(), DomainError> {
        self.record(Sent::Post(content.to_string()))
    }

    async fn reply(&self, target: MessageRef, content: &str) -> Result<(), DomainError> {
        self.record(Sent::Reply(target, content.to_string()))
    }

    fn start_typing(&self) -> TypingGuard {
        self.sent.lock().unwrap().push(Sent::TypingStarted);
        let sent = Arc::clone(&self.sent);
        TypingGuard::new(move || sent.lock().unwrap().push(Sent::TypingStopped))
    }
}

/// Generator returning a fixed result and recording prompts
pub struct ScriptedGenerator {
    result: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            result: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.result {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        "scripted-1"
    }
}
