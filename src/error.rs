use thiserror::Error;

/// Why a match report could not be read.
///
/// The display strings are shown to the chat room as-is, followed by the
/// usage hint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Mentions were missing or not a list
    #[error("Something is wrong with the formatting there.")]
    Format,

    /// Anything other than exactly two players tagged
    #[error("The 2 players should be tagged with their @MentionName.")]
    PlayerCount { found: usize },
}

/// Main error type for the ladder
#[derive(Error, Debug)]
pub enum LadderError {
    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Message delivery errors
    #[error("Sink '{sink}' error: {message}")]
    Sink { sink: String, message: String },

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LadderError>;
