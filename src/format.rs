//! Chat message text. Player names are inserted verbatim; the chat
//! platform renders the result as HTML.

use crate::core::{MessageColor, Notification};
use crate::error::ParseError;
use crate::parser::MatchOutcome;

/// Congratulate the winner and console the loser
pub fn match_result(outcome: &MatchOutcome) -> String {
    format!(
        "Well done {}!</br >Better luck next time {}!",
        outcome.winner, outcome.loser
    )
}

/// Numbered list of the ladder, top rank first
pub fn standings<S: AsRef<str>>(players: &[S]) -> String {
    let items: String = players
        .iter()
        .map(|p| format!("<li>{}</li>", p.as_ref()))
        .collect();
    format!("<b>Player rankings currently stand at:</b><ol>{}</ol>", items)
}

/// Rejection reason followed by the usage hint
pub fn parse_failure(reason: &ParseError, usage_hint: &str) -> String {
    format!("{} {}", reason, usage_hint)
}

pub fn match_notification(outcome: &MatchOutcome) -> Notification {
    Notification::new(match_result(outcome), MessageColor::Green)
}

pub fn standings_notification<S: AsRef<str>>(players: &[S]) -> Notification {
    Notification::new(standings(players), MessageColor::Orange)
}

pub fn error_notification(reason: &ParseError, usage_hint: &str) -> Notification {
    Notification::new(parse_failure(reason, usage_hint), MessageColor::Red)
}
