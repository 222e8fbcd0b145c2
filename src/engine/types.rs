//! Core domain types for the engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark (moves first in a standard game).
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Taken(Mark),
}

/// Errors that can occur when deriving a board from a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target square is already occupied.
    #[display("square {position} is already taken")]
    SquareTaken {
        /// The rejected position.
        position: super::Position,
    },
    /// The game has already ended; no further moves are accepted.
    #[display("the game is over")]
    GameOver,
}

/// 3x3 board in row-major order.
///
/// `Board` is a plain value type: deriving a child position copies the
/// nine squares, so hypothetical futures explored by the search never
/// alias their ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: super::Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: super::Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a new board with `mark` placed at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareTaken` if the square is occupied. The
    /// receiver is left untouched either way.
    pub fn place(&self, pos: super::Position, mark: Mark) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareTaken { position: pos });
        }
        Ok(self.with(pos, mark))
    }

    /// Unchecked derivation: copies the board and overwrites `pos`.
    ///
    /// The search calls this only with positions drawn from
    /// [`legal_moves`](super::rules::legal_moves), so the square is
    /// known to be empty.
    pub(crate) fn with(&self, pos: super::Position, mark: Mark) -> Board {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Taken(mark);
        Board { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
