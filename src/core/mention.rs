use serde::{Deserialize, Serialize};

/// A player tagged in a chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mention {
    /// Display name, used as the player identifier on the ladder
    pub name: String,

    /// Marker as it appears in the message text (e.g. `@Alice`)
    pub mention_name: String,
}

impl Mention {
    pub fn new(name: impl Into<String>, mention_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mention_name: mention_name.into(),
        }
    }
}

/// Mention field exactly as the chat platform delivered it.
///
/// Anything that is not a list of mention records lands in `Malformed`
/// so the parser can report a formatting problem instead of failing
/// to decode the whole event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Mentions {
    List(Vec<Mention>),
    Malformed(serde_json::Value),
}

impl From<Vec<Mention>> for Mentions {
    fn from(mentions: Vec<Mention>) -> Self {
        Mentions::List(mentions)
    }
}
