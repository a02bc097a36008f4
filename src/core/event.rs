use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Mention, Mentions};

/// Identifier of the chat room an event came from.
///
/// Every room keeps its own ladder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RoomId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Room ids arrive as numbers from the chat platform and as strings
/// from everything else
impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IdValue {
            Int(u64),
            String(String),
        }

        match IdValue::deserialize(deserializer)? {
            IdValue::Int(i) => Ok(RoomId::from(i)),
            IdValue::String(s) => Ok(RoomId(s)),
        }
    }
}

/// A chat message addressed to the bot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomMessage {
    pub room_id: RoomId,

    /// Raw message text, e.g. `/TT @Alice beats @Bob`
    pub message: String,

    /// Tagged players, absent for plain commands
    #[serde(default)]
    pub mentions: Option<Mentions>,
}

impl RoomMessage {
    pub fn new(room_id: impl Into<RoomId>, message: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            message: message.into(),
            mentions: None,
        }
    }

    pub fn with_mentions(mut self, mentions: Vec<Mention>) -> Self {
        self.mentions = Some(Mentions::List(mentions));
        self
    }
}

/// Room-message webhook body as posted by the chat platform
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    pub item: WebhookItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookItem {
    pub message: WebhookMessage,
    pub room: WebhookRoom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookMessage {
    pub message: String,
    #[serde(default)]
    pub mentions: Option<Mentions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRoom {
    pub id: RoomId,
}

impl From<WebhookPayload> for RoomMessage {
    fn from(payload: WebhookPayload) -> Self {
        let WebhookItem { message, room } = payload.item;
        Self {
            room_id: room.id,
            message: message.message,
            mentions: message.mentions,
        }
    }
}
