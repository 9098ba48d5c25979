use serde::{Deserialize, Serialize};

use crate::interpret;
use crate::models::goal::Goal;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single turn in the conversation.
///
/// `content` is the text exchanged with the completion service and is the
/// only thing persisted or sent over the wire. `visible_text` is derived from
/// it when the message is constructed or deserialized:
///
/// - user turns show `content` verbatim,
/// - assistant turns show the `text` field of the JSON reply, or the raw
///   content when it is not a JSON object with a string `text`,
/// - system turns show nothing.
///
/// Goals carried by an assistant reply are parsed in the same pass and kept
/// alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireMessage", into = "WireMessage")]
pub struct ChatMessage {
    role: Role,
    content: String,
    visible_text: String,
    goals: Vec<Goal>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        let content = content.into();
        let interpret::Interpretation { text, goals } = interpret::interpret_turn(role, &content);
        Self {
            role,
            content,
            visible_text: text,
            goals,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }

    /// Goals in this turn's reply. Empty for user and system turns.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Whether the presentation layer should render this turn.
    pub fn is_displayed(&self) -> bool {
        self.role != Role::System
    }
}

/// The `{role, content}` shape shared by the store, the gateway and the
/// upstream completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireMessage {
    role: Role,
    content: String,
}

impl From<WireMessage> for ChatMessage {
    fn from(wire: WireMessage) -> Self {
        ChatMessage::new(wire.role, wire.content)
    }
}

impl From<ChatMessage> for WireMessage {
    fn from(message: ChatMessage) -> Self {
        WireMessage {
            role: message.role,
            content: message.content,
        }
    }
}
