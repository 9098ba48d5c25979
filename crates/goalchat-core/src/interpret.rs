//! Interpretation of assistant replies.
//!
//! The coach is prompted to answer with a JSON object embedded in the message
//! content:
//!
//! ```json
//! { "text": "Great!", "goals": [{ "goal": "Travel", "focus": "Airport English" }] }
//! ```
//!
//! Nothing enforces that shape. Every function here is total: malformed,
//! truncated or oddly typed content degrades to "show the raw content, no
//! goals" and never produces an error.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::chat::{ChatMessage, Role};
use crate::models::goal::Goal;

/// Display text and goals pulled out of one assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub text: String,
    pub goals: Vec<Goal>,
}

/// Parse `content` once and return both the display text and the goals.
pub fn interpret(content: &str) -> Interpretation {
    match parse_object(content) {
        Some(object) => Interpretation {
            text: text_field(&object).unwrap_or_else(|| content.to_string()),
            goals: goals_field(&object),
        },
        None => Interpretation {
            text: content.to_string(),
            goals: Vec::new(),
        },
    }
}

/// Interpret one turn according to its role. User turns show their content
/// verbatim, system turns show nothing, and only assistant turns are parsed
/// for a JSON reply and goals.
pub fn interpret_turn(role: Role, content: &str) -> Interpretation {
    match role {
        Role::Assistant => interpret(content),
        Role::User => Interpretation {
            text: content.to_string(),
            goals: Vec::new(),
        },
        Role::System => Interpretation {
            text: String::new(),
            goals: Vec::new(),
        },
    }
}

/// The `text` field of a JSON reply, or `content` verbatim.
pub fn visible_text(content: &str) -> String {
    parse_object(content)
        .and_then(|object| text_field(&object))
        .unwrap_or_else(|| content.to_string())
}

/// The `goals` field of a JSON reply, trimmed, in order. Empty when the
/// content is not JSON or carries no goals.
pub fn goals(content: &str) -> Vec<Goal> {
    parse_object(content)
        .map(|object| goals_field(&object))
        .unwrap_or_default()
}

/// Display text for a message, recomputed from its content, as the
/// presentation layer shows it.
pub fn extract_visible_text(message: &ChatMessage) -> String {
    interpret_turn(message.role(), message.content()).text
}

/// Goals carried by a message, recomputed from its content. Only assistant
/// turns carry goals.
pub fn extract_goals(message: &ChatMessage) -> Vec<Goal> {
    interpret_turn(message.role(), message.content()).goals
}

fn parse_object(content: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(object)) => Some(object),
        Ok(_) => {
            debug!("assistant content is JSON but not an object");
            None
        }
        Err(e) => {
            debug!(error = %e, "assistant content is not JSON");
            None
        }
    }
}

fn text_field(object: &Map<String, Value>) -> Option<String> {
    object.get("text").and_then(Value::as_str).map(str::to_string)
}

/// Entries without a string `goal` and `focus` are skipped one by one, so a
/// single bad entry does not drop its well-formed siblings.
fn goals_field(object: &Map<String, Value>) -> Vec<Goal> {
    let Some(entries) = object.get("goals").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let goal = entry.get("goal").and_then(Value::as_str);
            let focus = entry.get("focus").and_then(Value::as_str);
            match (goal, focus) {
                (Some(goal), Some(focus)) => Some(Goal::new(goal, focus)),
                _ => {
                    debug!(entry = %entry, "skipping malformed goal entry");
                    None
                }
            }
        })
        .collect()
}
