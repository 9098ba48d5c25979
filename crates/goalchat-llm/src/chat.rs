//! The seam between the gateway and whatever model answers it.

use std::future::Future;
use std::pin::Pin;

use goalchat_core::models::chat::ChatMessage;
use tracing::info;

use crate::error::LlmError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A stateless chat-completion backend.
///
/// The backend sees the whole history on every call and returns the content
/// of one new assistant turn. Methods return boxed futures for dyn
/// compatibility.
pub trait ChatCompletion: Send + Sync {
    fn complete<'a>(&'a self, history: &'a [ChatMessage]) -> BoxFuture<'a, Result<String, LlmError>>;
}

/// Run one completion and return the input history with the assistant reply
/// appended.
pub async fn respond(
    backend: &dyn ChatCompletion,
    mut history: Vec<ChatMessage>,
) -> Result<Vec<ChatMessage>, LlmError> {
    let reply = backend.complete(&history).await?;

    info!(
        history_len = history.len(),
        reply_len = reply.len(),
        "assistant turn received"
    );

    history.push(ChatMessage::assistant(reply));
    Ok(history)
}
