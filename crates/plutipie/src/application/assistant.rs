//! Assistant Application Service (Use Case)
//!
//! Process-wide context built once at startup and shared by every event
//! handler. Turns a [`Dispatch`] into messages on a channel sink.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::domain::entities::{BotIdentity, IncomingMessage, MessageRef, Persona, Question};
use crate::domain::errors::DomainError;
use crate::ports::{MessageSink, TextGenerator};
use crate::services::{compose, deliver, AnswerFetcher, Dispatch, Router};

/// Sent when a command is invoked without a question
pub const MISSING_QUESTION_NOTICE: &str = "❌ Please provide a question after the command!";

/// Sent when handling a command fails for any other reason
pub const GENERIC_FAILURE_NOTICE: &str = "❌ An error occurred while processing your command.";

/// Application service answering chat questions
pub struct Assistant<G: TextGenerator> {
    router: Router,
    fetcher: AnswerFetcher<G>,
}

impl<G: TextGenerator> Assistant<G> {
    pub fn new(router: Router, generator: Arc<G>) -> Self {
        Self {
            router,
            fetcher: AnswerFetcher::new(generator),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn persona(&self) -> &Persona {
        self.router.persona()
    }

    /// Classify and answer one incoming message
    pub async fn on_message<S>(&self, message: &IncomingMessage, bot: &BotIdentity, sink: &S)
    where
        S: MessageSink + ?Sized,
    {
        let dispatch = self.router.classify(message, bot);
        self.handle(dispatch, sink).await;
    }

    /// Act on a classified message
    ///
    /// Never fails: delivery errors are logged and, where possible,
    /// reported to the channel with a generic notice.
    pub async fn handle<S>(&self, dispatch: Dispatch, sink: &S)
    where
        S: MessageSink + ?Sized,
    {
        let result = match dispatch {
            Dispatch::Ignore => return,
            Dispatch::Command { command, question } => {
                tracing::info!(command = %command, "📨 Command received");
                let framing = self
                    .persona()
                    .command(&command)
                    .and_then(|c| c.framing());
                self.answer(sink, framing, &question, None).await
            }
            Dispatch::Mention { question, reply_to } => {
                tracing::info!(message_id = reply_to.message_id, "📨 Mention received");
                self.answer(sink, None, &question, Some(reply_to)).await
            }
            Dispatch::MissingArgument { command } => {
                tracing::debug!(command = %command, "Command invoked without a question");
                sink.send(MISSING_QUESTION_NOTICE).await
            }
            Dispatch::Help => deliver(sink, &self.help_text(), None).await,
        };

        if let Err(e) = result {
            tracing::error!(error = %e, "Failed to handle message");
            if let Err(e) = sink.send(GENERIC_FAILURE_NOTICE).await {
                tracing::error!(error = %e, "Failed to send failure notice");
            }
        }
    }

    async fn answer<S>(
        &self,
        sink: &S,
        framing: Option<&str>,
        question: &Question,
        reply_to: Option<MessageRef>,
    ) -> Result<(), DomainError>
    where
        S: MessageSink + ?Sized,
    {
        // Held until the last chunk is out
        let _typing = sink.start_typing();

        let prompt = compose(&self.persona().system_context, framing, question);
        let answer = self.fetcher.fetch(&prompt).await;

        deliver(sink, &answer.into_text(), reply_to).await
    }

    /// Command listing for the help command
    pub fn help_text(&self) -> String {
        let prefix = self.router.prefix();
        let persona = self.persona();

        let mut text = format!("**{}** commands:\n", persona.name);
        for command in &persona.commands {
            if command.help.is_empty() {
                let _ = writeln!(text, "`{}{} <question>`", prefix, command.name);
            } else {
                let _ = writeln!(
                    text,
                    "`{}{} <question>` - {}",
                    prefix, command.name, command.help
                );
            }
        }
        if self.router.responds_to_mentions() {
            text.push_str("\nYou can also mention me with a question.");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSink, ScriptedGenerator, Sent};

    const BOT: BotIdentity = BotIdentity { user_id: 42 };

    fn assistant(generator: ScriptedGenerator) -> (Assistant<ScriptedGenerator>, Arc<ScriptedGenerator>) {
        let generator = Arc::new(generator);
        let router = Router::new(Arc::new(Persona::plutus()));
        (Assistant::new(router, generator.clone()), generator)
    }

    #[tokio::test]
    async fn test_command_answer_is_plain_post() {
        let (assistant, generator) = assistant(ScriptedGenerator::ok("Bonds are loans."));
        let sink = RecordingSink::new();
        let msg = IncomingMessage::new(10, 1, "!finance what are bonds?");

        assistant.on_message(&msg, &BOT, &sink).await;

        assert_eq!(
            sink.sent(),
            vec![
                Sent::TypingStarted,
                Sent::Post("Bonds are loans.".to_string()),
                Sent::TypingStopped,
            ]
        );
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("You are PlutiPie"));
        assert!(prompts[0].ends_with(
            "\n\nAs a finance expert helping Plutus club members, answer this: what are bonds?"
        ));
    }

    #[tokio::test]
    async fn test_typing_held_until_last_chunk() {
        let (assistant, generator) = assistant(ScriptedGenerator::ok("y".repeat(2500)));
        let sink = RecordingSink::new();
        let msg = IncomingMessage::new(10, 1, "<@42> long answer please").with_mention(42);

        assistant.on_message(&msg, &BOT, &sink).await;

        let sent = sink.sent();
        assert_eq!(generator.prompts().len(), 1);
        assert_eq!(sent.len(), 4);
        assert_eq!(sent[0], Sent::TypingStarted);
        assert!(matches!(sent[1], Sent::Reply(_, ref c) if c.len() == 2000));
        assert!(matches!(sent[2], Sent::Post(ref c) if c.len() == 500));
        assert_eq!(sent[3], Sent::TypingStopped);
    }

    #[tokio::test]
    async fn test_typing_stops_when_delivery_fails() {
        let (assistant, _) = assistant(ScriptedGenerator::ok("x".repeat(3000)));
        let sink = RecordingSink::failing_on(0);

        assistant
            .on_message(&IncomingMessage::new(10, 1, "!ask anything"), &BOT, &sink)
            .await;

        assert_eq!(
            sink.sent(),
            vec![
                Sent::TypingStarted,
                Sent::TypingStopped,
                Sent::Post(GENERIC_FAILURE_NOTICE.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_mention_answer_is_reply() {
        let (assistant, generator) = assistant(ScriptedGenerator::ok("A cap table lists owners."));
        let sink = RecordingSink::new();
        let msg = IncomingMessage::new(10, 1, "<@42> what is a cap table?").with_mention(42);

        assistant.on_message(&msg, &BOT, &sink).await;

        assert_eq!(
            sink.messages(),
            vec![Sent::Reply(
                MessageRef::new(10),
                "A cap table lists owners.".to_string()
            )]
        );
        assert!(generator.prompts()[0].ends_with("\n\nwhat is a cap table?"));
    }

    #[tokio::test]
    async fn test_prefixed_mention_replies_once() {
        let (assistant, generator) = assistant(ScriptedGenerator::ok("once"));
        let sink = RecordingSink::new();
        let msg = IncomingMessage::new(10, 1, "!ask <@42> hello?").with_mention(42);

        assistant.on_message(&msg, &BOT, &sink).await;

        assert_eq!(sink.messages(), vec![Sent::Post("once".to_string())]);
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_mention_everyone_gets_no_reply() {
        let (assistant, generator) = assistant(ScriptedGenerator::ok("unused"));
        let sink = RecordingSink::new();
        let msg = IncomingMessage::new(10, 1, "@everyone <@42> hi")
            .with_mention(42)
            .with_mention_everyone(true);

        assistant.on_message(&msg, &BOT, &sink).await;

        assert!(sink.sent().is_empty());
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_missing_question_skips_remote_call() {
        let (assistant, generator) = assistant(ScriptedGenerator::ok("unused"));
        let sink = RecordingSink::new();

        assistant
            .on_message(&IncomingMessage::new(10, 1, "!design"), &BOT, &sink)
            .await;

        assert_eq!(
            sink.sent(),
            vec![Sent::Post(MISSING_QUESTION_NOTICE.to_string())]
        );
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_is_reported_as_text() {
        let (assistant, _) = assistant(ScriptedGenerator::failing("timeout"));
        let sink = RecordingSink::new();

        assistant
            .on_message(&IncomingMessage::new(10, 1, "!ask anything"), &BOT, &sink)
            .await;

        assert_eq!(
            sink.messages(),
            vec![Sent::Post(
                "Sorry, I couldn't generate a response: timeout".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_long_answer_mention_is_chunked() {
        let (assistant, _) = assistant(ScriptedGenerator::ok("m".repeat(4500)));
        let sink = RecordingSink::new();
        let msg = IncomingMessage::new(10, 1, "<@42> essay please").with_mention(42);

        assistant.on_message(&msg, &BOT, &sink).await;

        let sent = sink.messages();
        assert_eq!(sent.len(), 3);
        assert!(matches!(sent[0], Sent::Reply(r, _) if r == MessageRef::new(10)));
        assert!(matches!(sent[1], Sent::Post(_)));
        assert!(matches!(sent[2], Sent::Post(ref c) if c.len() == 500));
    }

    #[tokio::test]
    async fn test_delivery_failure_sends_generic_notice() {
        let (assistant, _) = assistant(ScriptedGenerator::ok("x".repeat(3000)));
        let sink = RecordingSink::failing_on(1);

        assistant
            .on_message(&IncomingMessage::new(10, 1, "!ask long one"), &BOT, &sink)
            .await;

        assert_eq!(
            sink.messages(),
            vec![
                Sent::Post("x".repeat(2000)),
                Sent::Post(GENERIC_FAILURE_NOTICE.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_command_is_silent() {
        let (assistant, generator) = assistant(ScriptedGenerator::ok("unused"));
        let sink = RecordingSink::new();

        assistant
            .on_message(&IncomingMessage::new(10, 1, "!weather"), &BOT, &sink)
            .await;

        assert!(sink.sent().is_empty());
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let (assistant, _) = assistant(ScriptedGenerator::ok("unused"));
        let sink = RecordingSink::new();

        assistant
            .on_message(&IncomingMessage::new(10, 1, "!help"), &BOT, &sink)
            .await;

        let sent = sink.sent();
        assert_eq!(sent.len(), 1);
        let text = sent[0].content().unwrap();
        assert!(text.starts_with("**PlutiPie** commands:"));
        assert!(text.contains("`!pitch <question>` - Get advice on business pitching"));
        assert!(text.contains("mention me"));
    }
}
