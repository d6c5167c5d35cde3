//! Chunked Responder
//!
//! Delivers text of any length to a channel, split into segments that fit
//! the platform's per-message ceiling.

use crate::domain::entities::MessageRef;
use crate::domain::errors::DomainError;
use crate::ports::{MessageSink, MESSAGE_LIMIT};

/// Split `content` into contiguous segments of at most `limit` characters
///
/// Hard split on character count with no regard for word boundaries.
/// Segments never cut a UTF-8 sequence and joining them yields `content`.
pub fn split_chunks(content: &str, limit: usize) -> Vec<&str> {
    assert!(limit > 0, "chunk limit must be positive");

    let mut chunks = Vec::with_capacity(content.len() / limit + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in content.char_indices() {
        if count == limit {
            chunks.push(&content[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < content.len() {
        chunks.push(&content[start..]);
    }

    chunks
}

/// Send `content` to `sink`, replying to `reply_target` with the first segment
///
/// Segments are sent strictly in order. The first failed send aborts the
/// remaining segments and its error is returned; nothing is retried.
pub async fn deliver<S>(
    sink: &S,
    content: &str,
    reply_target: Option<MessageRef>,
) -> Result<(), DomainError>
where
    S: MessageSink + ?Sized,
{
    let chunks = split_chunks(content, MESSAGE_LIMIT);
    if chunks.is_empty() {
        tracing::debug!("Nothing to deliver");
        return Ok(());
    }

    tracing::debug!(
        content_len = content.len(),
        chunks = chunks.len(),
        reply = reply_target.is_some(),
        "Delivering response"
    );

    for (i, chunk) in chunks.into_iter().enumerate() {
        match reply_target {
            Some(target) if i == 0 => sink.reply(target, chunk).await?,
            _ => sink.send(chunk).await?,
        }
    }

    Ok(())
}
