use super::GameState;
use crate::types::Player;

impl GameState {
    /// The best score on the roster, 0 with no players.
    pub fn high_score(&self) -> u32 {
        self.players.iter().map(Player::score).max().unwrap_or(0)
    }

    /// Every player tied at the high score. Ties are allowed and all
    /// co-winners are reported.
    pub fn winners(&self) -> Vec<&Player> {
        if self.players.is_empty() {
            return Vec::new();
        }
        let high = self.high_score();
        self.players.iter().filter(|p| p.score() == high).collect()
    }

    /// (name, score) pairs sorted by score descending, roster order within
    /// ties.
    pub fn standings(&self) -> Vec<(&str, u32)> {
        let mut standings: Vec<(&str, u32)> = self
            .players
            .iter()
            .map(|p| (p.name(), p.score()))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }
}
