//! Move generation and draw detection.

use super::super::{Board, Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns all empty positions, ascending by index.
///
/// The ordering is load-bearing: the search examines candidates in
/// this order and keeps the first of several equal-value moves.
#[instrument]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::iter()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
