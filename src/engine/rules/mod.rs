//! Game rules: pure, stateless queries over a board.
//!
//! This module is the rules evaluator the search leans on. Every
//! function takes a board snapshot and returns an answer; nothing here
//! mutates or retains state.

mod moves;
mod win;

pub use moves::{is_full, legal_moves};
pub use win::{LINES, check_winner};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Verdict on a board, consumed by the game loop after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEvaluation {
    /// Whether the game is over.
    pub terminal: bool,
    /// The winning mark, if any.
    pub winner: Option<Mark>,
}

/// Checks whether the board is terminal: someone won, or no moves
/// remain.
#[instrument]
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Signed outcome of a board from `me`'s perspective.
///
/// Only meaningful at terminal states: +1 if `me` won, -1 if the
/// opponent won, 0 otherwise (draws included). Callers confirm
/// terminality first; a non-terminal call also yields 0.
#[instrument]
pub fn utility(board: &Board, me: Mark) -> i8 {
    match check_winner(board) {
        Some(winner) if winner == me => 1,
        Some(_) => -1,
        None => 0,
    }
}

/// Evaluates a board for the game loop.
#[instrument]
pub fn evaluate(board: &Board) -> StateEvaluation {
    let winner = check_winner(board);
    StateEvaluation {
        terminal: winner.is_some() || is_full(board),
        winner,
    }
}

#[cfg(test)]
mod tests {
    use super::super::Position;
    use super::*;

    fn won_board(mark: Mark) -> Board {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board = board.place(pos, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_terminal() {
        assert!(!is_terminal(&Board::new()));
    }

    #[test]
    fn test_won_board_is_terminal() {
        assert!(is_terminal(&won_board(Mark::X)));
    }

    #[test]
    fn test_full_board_is_terminal() {
        // X O X / O X X / O X O - a drawn board.
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board = board.place(pos, mark).unwrap();
        }
        assert!(is_terminal(&board));
        assert_eq!(check_winner(&board), None);
        assert_eq!(utility(&board, Mark::X), 0);
    }

    #[test]
    fn test_utility_sign_follows_role() {
        let board = won_board(Mark::X);
        assert_eq!(utility(&board, Mark::X), 1);
        assert_eq!(utility(&board, Mark::O), -1);
    }

    #[test]
    fn test_evaluate_reports_winner() {
        let eval = evaluate(&won_board(Mark::O));
        assert!(eval.terminal);
        assert_eq!(eval.winner, Some(Mark::O));

        let eval = evaluate(&Board::new());
        assert!(!eval.terminal);
        assert_eq!(eval.winner, None);
    }
}
