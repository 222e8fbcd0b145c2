//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use crate::engine::{GameState, Position};
use anyhow::Result;

/// A source of moves for one side of the game.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Produces the next move for the current state.
    async fn pick_move(&mut self, game: &GameState) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
