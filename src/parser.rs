use serde::{Deserialize, Serialize};

use crate::core::{Mention, Mentions};
use crate::error::ParseError;

/// Winner and loser of one reported match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: String,
    pub loser: String,
}

impl MatchOutcome {
    pub fn new(winner: impl Into<String>, loser: impl Into<String>) -> Self {
        Self {
            winner: winner.into(),
            loser: loser.into(),
        }
    }
}

/// What a message asks the bot to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// `/TT rankings`
    ShowRankings,
    /// `/TT @Winner beats @Loser`
    ReportMatch { winner: String, loser: String },
    /// A match report that could not be read
    ParseError { reason: ParseError },
}

/// True when `text` is exactly `<command> <keyword>`, keyword case-insensitive
pub fn is_rankings_query(text: &str, rankings_keyword: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.len() == 2 && tokens[1].to_lowercase() == rankings_keyword.to_lowercase()
}

/// Classify a message and, for match reports, extract the result
pub fn parse_command(
    text: &str,
    mentions: Option<&Mentions>,
    rankings_keyword: &str,
) -> ParsedCommand {
    if is_rankings_query(text, rankings_keyword) {
        return ParsedCommand::ShowRankings;
    }

    match parse_match(text, mentions) {
        Ok(MatchOutcome { winner, loser }) => ParsedCommand::ReportMatch { winner, loser },
        Err(reason) => ParsedCommand::ParseError { reason },
    }
}

/// Work out who won from the two tagged players.
///
/// Whoever is tagged first in the text wins ("@Winner beats @Loser"),
/// regardless of the order of the mention list.
pub fn parse_match(text: &str, mentions: Option<&Mentions>) -> Result<MatchOutcome, ParseError> {
    let mentions = match mentions {
        Some(Mentions::List(list)) => list,
        Some(Mentions::Malformed(_)) | None => return Err(ParseError::Format),
    };

    let [first, second] = mentions.as_slice() else {
        return Err(ParseError::PlayerCount {
            found: mentions.len(),
        });
    };

    let (winner, loser) = if marker_position(text, first) > marker_position(text, second) {
        (second, first)
    } else {
        (first, second)
    };

    Ok(MatchOutcome::new(winner.name.clone(), loser.name.clone()))
}

/// Byte offset of the mention marker; a missing marker sorts first
fn marker_position(text: &str, mention: &Mention) -> Option<usize> {
    text.find(&mention.mention_name)
}
