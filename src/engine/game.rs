//! Game state machine for one full game.
//!
//! Wraps a board with the mark to move and the game status. Moves are
//! validated here; the rules module stays the single source of truth
//! for legality and outcomes.

use super::{Board, Mark, MoveError, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Drawn,
}

/// Complete game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Mark,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game with `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies a move for the mark to move.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` once the game has ended and
    /// `MoveError::SquareTaken` for an occupied square; the state is
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        let board = self.board.place(pos, self.to_move)?;
        let eval = rules::evaluate(&board);

        self.board = board;
        self.to_move = self.to_move.opponent();
        self.status = match (eval.winner, eval.terminal) {
            (Some(mark), _) => GameStatus::Won(mark),
            (None, true) => GameStatus::Drawn,
            (None, false) => GameStatus::InProgress,
        };

        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_in_progress() {
        let game = GameState::new(Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::new(Mark::O);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_win_transition() {
        let mut game = GameState::new(Mark::X);
        // X: 0, 1, 2 wins the top row; O: 3, 4.
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::MiddleLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();
        game.make_move(Position::Center).unwrap();
        let status = game.make_move(Position::TopRight).unwrap();
        assert_eq!(status, GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_draw_transition() {
        let mut game = GameState::new(Mark::X);
        // X O X / O X X / O X O, played in an alternating order.
        for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            game.make_move(Position::from_index(index).unwrap()).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Drawn);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = GameState::new(Mark::X);
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::MiddleLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();
        game.make_move(Position::Center).unwrap();
        game.make_move(Position::TopRight).unwrap();

        let err = game.make_move(Position::BottomRight).unwrap_err();
        assert_eq!(err, MoveError::GameOver);
    }

    #[test]
    fn test_occupied_square_leaves_state_unchanged() {
        let mut game = GameState::new(Mark::X);
        game.make_move(Position::Center).unwrap();
        let before = game;

        let err = game.make_move(Position::Center).unwrap_err();
        assert!(matches!(err, MoveError::SquareTaken { .. }));
        assert_eq!(game, before);
    }
}
