use super::GameState;
use crate::types::Player;

impl GameState {
    /// Add a player to the roster. Turn order follows insertion order; the
    /// first player added takes the first turn.
    pub fn add_player(&mut self, name: String) -> usize {
        let index = self.players.len();
        tracing::info!("Player {} joined as #{}", name, index + 1);
        self.players.push(Player::new(name));
        index
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Award one point for a correct answer. Returns the player's new score.
    pub fn award_point(&mut self, index: usize) -> Result<u32, String> {
        let player = self
            .players
            .get_mut(index)
            .ok_or_else(|| format!("no player at index {index}"))?;
        player.add_point();
        tracing::info!("{} scored, now at {}", player.name(), player.score());
        Ok(player.score())
    }
}
