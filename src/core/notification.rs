use serde::{Deserialize, Serialize};

/// Colour tag the chat platform uses to style a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageColor {
    /// Match result recorded
    Green,
    /// Standings listing
    Orange,
    /// Rejected report
    Red,
}

impl MessageColor {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageColor::Green => "green",
            MessageColor::Orange => "orange",
            MessageColor::Red => "red",
        }
    }
}

/// Formatted reply for the originating room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub color: MessageColor,
}

impl Notification {
    pub fn new(message: impl Into<String>, color: MessageColor) -> Self {
        Self {
            message: message.into(),
            color,
        }
    }

    pub fn is_error(&self) -> bool {
        self.color == MessageColor::Red
    }
}
