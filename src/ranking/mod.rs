pub mod ladder;
pub mod table;

use crate::parser::MatchOutcome;

pub use ladder::LadderPolicy;
pub use table::RankingTable;

/// Trait for rank adjustment strategies
pub trait RankingPolicy: Send + Sync {
    /// Apply a match result to the table in place
    fn apply(&self, table: &mut RankingTable, outcome: &MatchOutcome);

    /// Get policy name for logging
    fn name(&self) -> &str;
}
