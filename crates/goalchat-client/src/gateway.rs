//! Client side of `POST /api/llm`.

use serde::Serialize;
use tracing::debug;

use goalchat_core::models::chat::ChatMessage;

use crate::error::GatewayError;

/// Sends the whole conversation and receives it back with one more turn.
///
/// The service is stateless, so every call carries the full history. The
/// call blocks until the gateway answers; no timeout is applied beyond the
/// transport's own.
pub trait Gateway {
    fn send(&self, history: &[ChatMessage]) -> Result<Vec<ChatMessage>, GatewayError>;
}

impl<G: Gateway + ?Sized> Gateway for &G {
    fn send(&self, history: &[ChatMessage]) -> Result<Vec<ChatMessage>, GatewayError> {
        (**self).send(history)
    }
}

#[derive(Serialize)]
struct LlmRequest<'a> {
    history: &'a [ChatMessage],
}

/// HTTP gateway client.
pub struct HttpGateway {
    agent: ureq::Agent,
    url: String,
}

impl HttpGateway {
    /// `base_url` is the gateway origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            url: format!("{}/api/llm", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Gateway for HttpGateway {
    fn send(&self, history: &[ChatMessage]) -> Result<Vec<ChatMessage>, GatewayError> {
        debug!(url = %self.url, messages = history.len(), "sending history to gateway");

        let mut response = self
            .agent
            .post(&self.url)
            .send_json(&LlmRequest { history })?;

        let reply: Vec<ChatMessage> = response
            .body_mut()
            .read_json()
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        debug!(messages = reply.len(), "gateway replied");
        Ok(reply)
    }
}
