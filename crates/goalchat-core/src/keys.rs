//! Key names used in the client-side key-value store.

/// The user-editable system prompt, stored as plain text.
pub const SYSTEM_PROMPT: &str = "chatbotPrompt";

/// The conversation history, stored as a JSON array of `{role, content}`.
pub const CHAT_MESSAGES: &str = "chatMessages";
