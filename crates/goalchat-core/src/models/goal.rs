use serde::{Deserialize, Serialize};

/// A learning goal the coach summarised for the user.
///
/// Goals have no identity key. Two goals with the same title are distinct
/// entries and are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub title: String,
    pub focus: String,
}

impl Goal {
    /// Build a goal from raw model output, trimming both fields.
    pub fn new(title: &str, focus: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            focus: focus.trim().to_string(),
        }
    }
}
