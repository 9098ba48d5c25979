use serde::{Deserialize, Serialize};

/// Default sampling temperature for conversational models.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default output budget for reasoning models.
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 4096;

/// Generation parameters sent alongside the conversation.
///
/// Reasoning models reject `temperature` and take an output token budget
/// instead, so exactly one of the two is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationParams {
    Temperature(f32),
    MaxCompletionTokens(u32),
}

impl GenerationParams {
    /// Pick the parameter family the given model accepts.
    pub fn for_model(model: &str, temperature: f32, max_completion_tokens: u32) -> Self {
        if is_reasoning_model(model) {
            GenerationParams::MaxCompletionTokens(max_completion_tokens)
        } else {
            GenerationParams::Temperature(temperature)
        }
    }

    pub fn temperature(&self) -> Option<f32> {
        match self {
            GenerationParams::Temperature(t) => Some(*t),
            GenerationParams::MaxCompletionTokens(_) => None,
        }
    }

    pub fn max_completion_tokens(&self) -> Option<u32> {
        match self {
            GenerationParams::Temperature(_) => None,
            GenerationParams::MaxCompletionTokens(n) => Some(*n),
        }
    }
}

/// Reasoning model families: `o1`, `o3`, `o4-mini`, `gpt-5`, ...
pub fn is_reasoning_model(model: &str) -> bool {
    let model = model.trim().to_ascii_lowercase();
    if model.starts_with("gpt-5") {
        return true;
    }
    let mut chars = model.chars();
    chars.next() == Some('o') && chars.next().is_some_and(|c| c.is_ascii_digit())
}
