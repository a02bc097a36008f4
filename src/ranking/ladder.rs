use crate::parser::MatchOutcome;
use crate::ranking::{RankingPolicy, RankingTable};

/// Challenge ladder: an upset is settled with single adjacent swaps, not a re-sort.
///
/// | winner ranked | loser ranked | effect                                   |
/// |---------------|--------------|------------------------------------------|
/// | no            | no           | append winner, then loser                |
/// | yes           | yes          | winner below loser: winner up, loser down |
/// | yes           | no           | append loser                             |
/// | no            | yes          | winner takes the loser's rung            |
pub struct LadderPolicy;

impl LadderPolicy {
    pub fn new() -> Self {
        Self
    }

    fn climb(table: &mut RankingTable, winner: usize, loser: usize) {
        // winner > loser >= 0, so there is always a rung above the winner
        table.swap_adjacent(winner - 1);

        // That swap already pushed the loser down when they were neighbours
        if winner - 1 == loser {
            return;
        }

        table.swap_adjacent(loser);
    }
}

impl Default for LadderPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingPolicy for LadderPolicy {
    fn apply(&self, table: &mut RankingTable, outcome: &MatchOutcome) {
        let winner = table.index_of(&outcome.winner);
        let loser = table.index_of(&outcome.loser);

        match (winner, loser) {
            (None, None) => {
                table.append(outcome.winner.clone());
                table.append(outcome.loser.clone());
            }
            (Some(w), Some(l)) => {
                if w > l {
                    Self::climb(table, w, l);
                }
            }
            (Some(_), None) => {
                table.append(outcome.loser.clone());
            }
            (None, Some(l)) => {
                table.insert_at(l, outcome.winner.clone());
            }
        }
    }

    fn name(&self) -> &str {
        "ladder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(winner: &str, loser: &str) -> MatchOutcome {
        MatchOutcome::new(winner, loser)
    }

    fn apply(players: &[&str], winner: &str, loser: &str) -> Vec<String> {
        let mut table = RankingTable::from_players(players.iter().copied());
        LadderPolicy::new().apply(&mut table, &outcome(winner, loser));
        table.snapshot()
    }

    #[test]
    fn test_new_players_appended_in_order() {
        assert_eq!(apply(&[], "A", "B"), vec!["A", "B"]);
        assert_eq!(apply(&["X", "Y"], "A", "B"), vec!["X", "Y", "A", "B"]);
    }

    #[test]
    fn test_adjacent_upset_is_single_swap() {
        assert_eq!(apply(&["B", "A"], "A", "B"), vec!["A", "B"]);
        assert_eq!(apply(&["X", "B", "A", "Y"], "A", "B"), vec!["X", "A", "B", "Y"]);
    }

    #[test]
    fn test_distant_upset_moves_each_one_rung() {
        assert_eq!(
            apply(&["L", "X", "Y", "W", "Z"], "W", "L"),
            vec!["X", "L", "W", "Y", "Z"]
        );
    }

    #[test]
    fn test_upset_with_one_player_between() {
        // Winner passes X, then the loser drops below the winner
        assert_eq!(apply(&["L", "X", "W"], "W", "L"), vec!["W", "L", "X"]);
    }

    #[test]
    fn test_upset_always_moves_loser_down() {
        let policy = LadderPolicy::new();
        for gap in 1..5 {
            let mut players: Vec<String> = vec!["L".to_string()];
            players.extend((0..gap - 1).map(|i| format!("X{}", i)));
            players.push("W".to_string());
            players.push("Z".to_string());

            let mut table = RankingTable::from_players(players.clone());
            policy.apply(&mut table, &outcome("W", "L"));

            let loser_after = table.index_of("L").unwrap();
            assert!(loser_after > 0, "gap {}: {:?}", gap, table.snapshot());
            assert!(
                table.index_of("W").unwrap() < players.len() - 2,
                "gap {}: {:?}",
                gap,
                table.snapshot()
            );
        }
    }

    #[test]
    fn test_expected_result_is_noop() {
        assert_eq!(apply(&["A", "B", "C"], "A", "C"), vec!["A", "B", "C"]);
        assert_eq!(apply(&["A", "B"], "A", "B"), vec!["A", "B"]);
    }

    #[test]
    fn test_repeated_result_is_idempotent() {
        let policy = LadderPolicy::new();
        let mut table = RankingTable::from_players(["B", "A"]);
        policy.apply(&mut table, &outcome("A", "B"));
        let after_first = table.snapshot();
        policy.apply(&mut table, &outcome("A", "B"));
        assert_eq!(table.snapshot(), after_first);
    }

    #[test]
    fn test_known_winner_new_loser() {
        assert_eq!(apply(&["A", "B"], "A", "C"), vec!["A", "B", "C"]);
        assert_eq!(apply(&["A", "B"], "B", "C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_new_winner_takes_loser_rung() {
        assert_eq!(apply(&["A", "B", "C"], "D", "B"), vec!["A", "D", "B", "C"]);
        assert_eq!(apply(&["A"], "D", "A"), vec!["D", "A"]);
    }

    #[test]
    fn test_self_match_never_duplicates() {
        assert_eq!(apply(&[], "A", "A"), vec!["A"]);
        assert_eq!(apply(&["A"], "A", "A"), vec!["A"]);
    }

    #[test]
    fn test_adjacent_upset_leaves_others_in_place() {
        let before = ["P", "Q", "B", "A", "R", "S"];
        let after = apply(&before, "A", "B");

        for (i, player) in before.iter().enumerate() {
            let new_index = after.iter().position(|p| p == player).unwrap();
            match *player {
                "A" => assert_eq!(new_index, i - 1),
                "B" => assert_eq!(new_index, i + 1),
                _ => assert_eq!(new_index, i),
            }
        }
    }
}
