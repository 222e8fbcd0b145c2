//! Turn loop between two players.

use super::players::Player;
use super::render::{render_board, render_mark};
use crate::engine::{GameState, GameStatus, Mark};
use anyhow::Result;
use tracing::{debug, info};

/// Runs one game between two players on the console.
pub struct Session {
    game: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    plain: bool,
}

impl Session {
    /// Creates a session; `first` moves first.
    pub fn new(
        first: Mark,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        plain: bool,
    ) -> Self {
        Self {
            game: GameState::new(first),
            player_x,
            player_o,
            plain,
        }
    }

    /// Plays the game to completion and returns the final status.
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("starting session");
        println!("{}", render_board(self.game.board(), self.plain));

        loop {
            match self.game.status() {
                GameStatus::Won(mark) => {
                    let name = self.player_for(mark).name();
                    println!("{} ({}) wins!", name, render_mark(mark, self.plain));
                    return Ok(self.game.status());
                }
                GameStatus::Drawn => {
                    println!("It's a draw!");
                    return Ok(self.game.status());
                }
                GameStatus::InProgress => {}
            }

            let to_move = self.game.to_move();
            let player = match to_move {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = player.name(), mark = %to_move, "waiting for move");
            let pos = player.pick_move(&self.game).await?;

            self.game.make_move(pos)?;
            println!(
                "{} ({}) plays {}",
                self.player_for(to_move).name(),
                render_mark(to_move, self.plain),
                pos.to_index() + 1
            );
            println!("{}", render_board(self.game.board(), self.plain));
        }
    }

    fn player_for(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Position;

    /// Test player that takes the first empty square from a
    /// preference list.
    struct Scripted {
        name: &'static str,
        preferences: Vec<usize>,
    }

    impl Scripted {
        fn new(name: &'static str, preferences: Vec<usize>) -> Self {
            Self { name, preferences }
        }
    }

    #[async_trait::async_trait]
    impl Player for Scripted {
        async fn pick_move(&mut self, game: &GameState) -> Result<Position> {
            self.preferences
                .iter()
                .filter_map(|&index| Position::from_index(index))
                .find(|&pos| game.board().is_empty(pos))
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[tokio::test]
    async fn test_scripted_win() {
        let x = Scripted::new("x", vec![0, 1, 2]);
        let o = Scripted::new("o", vec![3, 4]);
        let mut session = Session::new(Mark::X, Box::new(x), Box::new(o), true);
        let status = session.run().await.unwrap();
        assert_eq!(status, GameStatus::Won(Mark::X));
    }

    #[tokio::test]
    async fn test_scripted_draw() {
        let x = Scripted::new("x", vec![0, 2, 4, 5, 7]);
        let o = Scripted::new("o", vec![1, 3, 6, 8]);
        let mut session = Session::new(Mark::X, Box::new(x), Box::new(o), true);
        let status = session.run().await.unwrap();
        assert_eq!(status, GameStatus::Drawn);
    }

    #[tokio::test]
    async fn test_engine_never_loses_the_scripted_trap() {
        use super::super::players::EnginePlayer;

        // A center-then-corners human script; perfect play must hold
        // a draw or better for the engine.
        let x = Scripted::new("x", vec![4, 0, 2, 3, 7, 1, 5, 6, 8]);
        let o = EnginePlayer::new("engine", Mark::O);
        let mut session = Session::new(Mark::X, Box::new(x), Box::new(o), true);
        let status = session.run().await.unwrap();
        assert_ne!(status, GameStatus::Won(Mark::X));
    }
}
