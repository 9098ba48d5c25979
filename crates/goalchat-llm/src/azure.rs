//! Azure OpenAI chat-completions backend.
//!
//! Requests go to
//! `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version={api_version}`
//! authenticated with the `api-key` header. Streaming is never requested; the
//! first choice's message content becomes the assistant turn.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use goalchat_core::models::chat::ChatMessage;

use crate::chat::{BoxFuture, ChatCompletion};
use crate::error::LlmError;
use crate::params::GenerationParams;

/// Connection and model settings for one Azure OpenAI deployment.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
    pub model: String,
    pub params: GenerationParams,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
    model: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct AzureOpenAiClient {
    client: Client,
    config: AzureConfig,
}

impl AzureOpenAiClient {
    pub fn new(config: AzureConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }

    /// The JSON body sent for `history`.
    pub fn request_body(&self, history: &[ChatMessage]) -> Result<serde_json::Value, LlmError> {
        Ok(serde_json::to_value(self.request(history))?)
    }

    fn request<'a>(&'a self, history: &'a [ChatMessage]) -> CompletionRequest<'a> {
        CompletionRequest {
            messages: history,
            model: &self.config.model,
            stream: false,
            temperature: self.config.params.temperature(),
            max_completion_tokens: self.config.params.max_completion_tokens(),
        }
    }

    async fn chat_completion(&self, history: &[ChatMessage]) -> Result<String, LlmError> {
        info!(
            model = %self.config.model,
            deployment = %self.config.deployment,
            messages = history.len(),
            "requesting chat completion"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.config.api_key)
            .json(&self.request(history))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "completion service rejected request");
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_completion(&body)
    }
}

impl ChatCompletion for AzureOpenAiClient {
    fn complete<'a>(&'a self, history: &'a [ChatMessage]) -> BoxFuture<'a, Result<String, LlmError>> {
        Box::pin(self.chat_completion(history))
    }
}

/// Pull the first choice's content out of a chat-completions response body.
/// A `null` content (e.g. a filtered reply) becomes an empty string.
pub fn parse_completion(body: &str) -> Result<String, LlmError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::ResponseParse(format!("invalid completion response: {e}")))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ResponseParse("no choices in response".to_string()))?;

    Ok(choice.message.content.unwrap_or_default())
}
