/// Ordered, duplicate-free list of players; index 0 is the top rank.
///
/// The only ways to change the order are the primitives below, each of
/// which keeps every player at most once in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingTable {
    players: Vec<String>,
}

impl RankingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an existing order, dropping repeated names
    pub fn from_players<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for player in players {
            table.append(player);
        }
        table
    }

    /// Position of `player`, if ranked
    pub fn index_of(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    pub fn contains(&self, player: &str) -> bool {
        self.index_of(player).is_some()
    }

    /// Add `player` at the bottom. Returns `false` if already ranked.
    pub fn append(&mut self, player: impl Into<String>) -> bool {
        let player = player.into();
        if self.contains(&player) {
            return false;
        }
        self.players.push(player);
        true
    }

    /// Put `player` at `index`, pushing everyone from there down one rung.
    ///
    /// Returns `false` if the player is already ranked or `index` is past
    /// the end of the table.
    pub fn insert_at(&mut self, index: usize, player: impl Into<String>) -> bool {
        let player = player.into();
        if index > self.players.len() || self.contains(&player) {
            return false;
        }
        self.players.insert(index, player);
        true
    }

    /// Exchange the players at `index` and `index + 1`.
    ///
    /// Returns `false` (and leaves the table alone) when there is no
    /// player below `index`.
    pub fn swap_adjacent(&mut self, index: usize) -> bool {
        if index + 1 >= self.players.len() {
            return false;
        }
        self.players.swap(index, index + 1);
        true
    }

    /// Copy of the current order
    pub fn snapshot(&self) -> Vec<String> {
        self.players.clone()
    }
}
