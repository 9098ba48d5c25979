use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request failed: {0}")]
    Request(String),

    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Request(e.to_string())
    }
}
