use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::LadderConfig;
use crate::core::{Notification, RoomId, RoomMessage};
use crate::format;
use crate::parser::{self, MatchOutcome, ParsedCommand};
use crate::ranking::{LadderPolicy, RankingPolicy, RankingTable};

/// Ladder orchestrator: one ranking table per room
pub struct LadderEngine {
    config: LadderConfig,
    policy: Arc<dyn RankingPolicy>,
    rooms: Mutex<HashMap<RoomId, RankingTable>>,
}

impl LadderEngine {
    /// Create engine with the challenge-ladder policy
    pub fn new(config: LadderConfig) -> Self {
        Self::with_policy(config, Arc::new(LadderPolicy::new()))
    }

    /// Create engine with a custom ranking policy
    pub fn with_policy(config: LadderConfig, policy: Arc<dyn RankingPolicy>) -> Self {
        tracing::info!("✅ Ladder engine initialized with '{}' policy", policy.name());
        Self {
            config,
            policy,
            rooms: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Classify a room message without touching any table
    pub fn parse(&self, event: &RoomMessage) -> ParsedCommand {
        parser::parse_command(
            &event.message,
            event.mentions.as_ref(),
            &self.config.rankings_keyword,
        )
    }

    /// Handle one incoming message and build the reply for its room
    pub fn handle_event(&self, event: &RoomMessage) -> Notification {
        match self.parse(event) {
            ParsedCommand::ShowRankings => self.render_standings(&event.room_id),
            ParsedCommand::ReportMatch { winner, loser } => {
                let outcome = MatchOutcome { winner, loser };
                self.record_match(&event.room_id, &outcome);
                format::match_notification(&outcome)
            }
            ParsedCommand::ParseError { reason } => {
                tracing::warn!(
                    "⚠️ Rejected report in room {}: {:?} ({:?})",
                    event.room_id,
                    reason,
                    event.message
                );
                format::error_notification(&reason, &self.config.usage_hint())
            }
        }
    }

    /// Apply a result to the room's table, creating the table on first use
    pub fn record_match(&self, room: &RoomId, outcome: &MatchOutcome) {
        let mut rooms = self.lock_rooms();
        let table = rooms.entry(room.clone()).or_default();

        self.policy.apply(table, outcome);

        tracing::info!(
            "🏓 {} beat {} in room {}",
            outcome.winner,
            outcome.loser,
            room
        );
        tracing::debug!("Standings for room {}: {:?}", room, table.snapshot());
    }

    /// Current order of a room's ladder, top rank first
    pub fn standings(&self, room: &RoomId) -> Vec<String> {
        self.lock_rooms()
            .get(room)
            .map(RankingTable::snapshot)
            .unwrap_or_default()
    }

    /// Standings message for a room
    pub fn render_standings(&self, room: &RoomId) -> Notification {
        let players = self.standings(room);
        tracing::debug!("Rendering {} players for room {}", players.len(), room);
        format::standings_notification(&players)
    }

    /// Rooms that have a ladder, in id order
    pub fn rooms(&self) -> Vec<RoomId> {
        let mut rooms: Vec<RoomId> = self.lock_rooms().keys().cloned().collect();
        rooms.sort();
        rooms
    }

    // Every mutation leaves a valid table behind, so a panic elsewhere
    // while holding the lock does not invalidate the data.
    fn lock_rooms(&self) -> MutexGuard<'_, HashMap<RoomId, RankingTable>> {
        self.rooms.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LadderEngine {
    fn default() -> Self {
        Self::new(LadderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mention, MessageColor, Mentions};

    fn report(room: &str, text: &str, players: &[&str]) -> RoomMessage {
        RoomMessage::new(room, text).with_mentions(
            players
                .iter()
                .map(|p| Mention::new(*p, format!("@{}", p)))
                .collect(),
        )
    }

    #[test]
    fn test_first_match_on_empty_ladder() {
        let engine = LadderEngine::default();
        let reply = engine.handle_event(&report("1", "/TT @A beats @B", &["A", "B"]));

        assert_eq!(engine.standings(&RoomId::from("1")), vec!["A", "B"]);
        assert!(reply.message.contains("Well done A!"));
        assert!(reply.message.contains("Better luck next time B!"));
        assert_eq!(reply.color, MessageColor::Green);
    }

    #[test]
    fn test_upset_swaps_players() {
        let engine = LadderEngine::default();
        let room = RoomId::from("1");
        engine.record_match(&room, &MatchOutcome::new("B", "A"));
        assert_eq!(engine.standings(&room), vec!["B", "A"]);

        engine.handle_event(&report("1", "/TT @A beats @B", &["B", "A"]));
        assert_eq!(engine.standings(&room), vec!["A", "B"]);
    }

    #[test]
    fn test_rankings_query() {
        let engine = LadderEngine::default();
        let room = RoomId::from("1");
        engine.record_match(&room, &MatchOutcome::new("A", "B"));
        engine.record_match(&room, &MatchOutcome::new("B", "C"));

        let reply = engine.handle_event(&RoomMessage::new("1", "/TT rankings"));
        assert_eq!(
            reply.message,
            "<b>Player rankings currently stand at:</b><ol><li>A</li><li>B</li><li>C</li></ol>"
        );
        assert_eq!(reply.color, MessageColor::Orange);
    }

    #[test]
    fn test_single_mention_error() {
        let engine = LadderEngine::default();
        let reply = engine.handle_event(&report("1", "/TT @A beats nobody", &["A"]));

        assert_eq!(
            reply.message,
            "The 2 players should be tagged with their @MentionName. Try: <br />/TT @Winner beats @Loser"
        );
        assert!(reply.is_error());
        assert!(engine.standings(&RoomId::from("1")).is_empty());
    }

    #[test]
    fn test_malformed_mentions_error() {
        let engine = LadderEngine::default();
        let mut event = RoomMessage::new("1", "/TT @A beats @B");
        event.mentions = Some(Mentions::Malformed(serde_json::json!("@A @B")));

        let reply = engine.handle_event(&event);
        assert_eq!(
            reply.message,
            "Something is wrong with the formatting there. Try: <br />/TT @Winner beats @Loser"
        );
        assert!(reply.is_error());
    }

    #[test]
    fn test_failed_parse_leaves_table_alone() {
        let engine = LadderEngine::default();
        let room = RoomId::from("1");
        engine.record_match(&room, &MatchOutcome::new("A", "B"));

        engine.handle_event(&report("1", "/TT @A @B @C", &["A", "B", "C"]));
        engine.handle_event(&RoomMessage::new("1", "/TT @C beats @A"));

        assert_eq!(engine.standings(&room), vec!["A", "B"]);
    }

    #[test]
    fn test_rooms_are_isolated() {
        let engine = LadderEngine::default();
        engine.handle_event(&report("1", "/TT @A beats @B", &["A", "B"]));
        engine.handle_event(&report("2", "/TT @C beats @D", &["C", "D"]));

        assert_eq!(engine.standings(&RoomId::from("1")), vec!["A", "B"]);
        assert_eq!(engine.standings(&RoomId::from("2")), vec!["C", "D"]);
        assert_eq!(engine.rooms(), vec![RoomId::from("1"), RoomId::from("2")]);
    }

    #[test]
    fn test_unknown_room_renders_empty_list() {
        let engine = LadderEngine::default();
        let reply = engine.render_standings(&RoomId::from("nowhere"));
        assert_eq!(reply.message, "<b>Player rankings currently stand at:</b><ol></ol>");
        assert!(engine.rooms().is_empty());
    }

    #[test]
    fn test_custom_keyword() {
        let config = LadderConfig::default().with_rankings_keyword("ladder").unwrap();
        let engine = LadderEngine::new(config);

        let reply = engine.handle_event(&RoomMessage::new("1", "/TT Ladder"));
        assert_eq!(reply.color, MessageColor::Orange);

        let reply = engine.handle_event(&RoomMessage::new("1", "/TT rankings"));
        assert!(reply.is_error());
    }
}
