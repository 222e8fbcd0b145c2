//! Engine-backed player.

use super::Player;
use crate::engine::{self, GameState, Mark, Position};
use anyhow::Result;
use tracing::debug;

/// Player that asks the search engine for its move.
pub struct EnginePlayer {
    name: String,
    mark: Mark,
}

impl EnginePlayer {
    /// Creates a new engine player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

#[async_trait::async_trait]
impl Player for EnginePlayer {
    async fn pick_move(&mut self, game: &GameState) -> Result<Position> {
        println!("Engine is thinking...");
        // Brief pause so the move doesn't appear before the prompt
        // settles; the search itself is effectively instantaneous.
        tokio::time::sleep(std::time::Duration::from_millis(400)).await;

        let result = engine::choose_move(game.board(), game.to_move(), self.mark);
        debug!(value = result.value, position = ?result.position, "search finished");

        result
            .position
            .ok_or_else(|| anyhow::anyhow!("no legal moves available"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
