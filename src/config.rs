use crate::error::{LadderError, Result};

const DEFAULT_COMMAND: &str = "/TT";
const DEFAULT_RANKINGS_KEYWORD: &str = "rankings";

/// Ladder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderConfig {
    /// Slash command the bot is registered under, quoted in the usage hint
    pub command: String,
    /// Second token that turns a message into a standings query
    pub rankings_keyword: String,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            rankings_keyword: DEFAULT_RANKINGS_KEYWORD.to_string(),
        }
    }
}

impl LadderConfig {
    /// Load configuration from environment variables.
    ///
    /// - `TT_COMMAND` - slash command (default: `/TT`)
    /// - `TT_RANKINGS_KEYWORD` - standings keyword (default: `rankings`)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(command) = std::env::var("TT_COMMAND") {
            config = config.with_command(command)?;
        }
        if let Ok(keyword) = std::env::var("TT_RANKINGS_KEYWORD") {
            config = config.with_rankings_keyword(keyword)?;
        }

        Ok(config)
    }

    /// Override the slash command
    pub fn with_command(mut self, command: impl Into<String>) -> Result<Self> {
        let command = command.into();
        if command.trim().is_empty() || command.contains(char::is_whitespace) {
            return Err(LadderError::Config(format!(
                "command must be a single non-empty token, got {:?}",
                command
            )));
        }
        self.command = command;
        Ok(self)
    }

    /// Override the standings keyword
    pub fn with_rankings_keyword(mut self, keyword: impl Into<String>) -> Result<Self> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() || keyword.contains(char::is_whitespace) {
            return Err(LadderError::Config(format!(
                "rankings keyword must be a single non-empty token, got {:?}",
                keyword
            )));
        }
        self.rankings_keyword = keyword;
        Ok(self)
    }

    /// Guidance appended to every error message
    pub fn usage_hint(&self) -> String {
        format!("Try: <br />{} @Winner beats @Loser", self.command)
    }
}
