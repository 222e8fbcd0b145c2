//! Adversarial search: minimax with alpha-beta pruning.
//!
//! The search explores every reachable future of a board snapshot,
//! assuming both sides play optimally, and reports the game-theoretic
//! value together with the move that achieves it. Boards are copied on
//! every derivation, so sibling subtrees never observe each other's
//! state. No results are cached across calls; at 9 cells the full
//! (pruned) tree is trivially small.

use super::{Board, Mark, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Alpha seed, strictly below the minimum achievable utility (-1).
const ALPHA_FLOOR: i8 = -2;

/// Beta seed, strictly above the maximum achievable utility (+1).
const BETA_CEILING: i8 = 2;

/// Outcome of a search: the value of the position for `me` and the
/// move that realizes it.
///
/// `position` is `None` exactly when the searched board was already
/// terminal; callers must not apply an absent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Game-theoretic value in {-1, 0, +1} from `me`'s perspective.
    pub value: i8,
    /// The chosen move, absent for terminal boards.
    pub position: Option<Position>,
}

/// Selects the optimal move for `to_move` on `board`.
///
/// `me` names the maximizing side; value signs are from its
/// perspective. `to_move` must be `me` or `me.opponent()`; the role
/// assignment is an explicit parameter rather than recursion depth,
/// so the same engine serves either side.
#[instrument]
pub fn choose_move(board: &Board, to_move: Mark, me: Mark) -> SearchResult {
    search(board, to_move, ALPHA_FLOOR, BETA_CEILING, me)
}

fn search(board: &Board, to_move: Mark, mut alpha: i8, mut beta: i8, me: Mark) -> SearchResult {
    if rules::is_terminal(board) {
        return SearchResult {
            value: rules::utility(board, me),
            position: None,
        };
    }

    if to_move == me {
        // Maximizing branch. Strict `>` keeps the first move that
        // achieves the maximum; later equal-value moves never replace
        // it.
        let mut best = SearchResult {
            value: ALPHA_FLOOR,
            position: None,
        };
        for pos in rules::legal_moves(board) {
            let child = board.with(pos, to_move);
            let reply = search(&child, to_move.opponent(), alpha, beta, me);
            if reply.value > best.value {
                best = SearchResult {
                    value: reply.value,
                    position: Some(pos),
                };
            }
            alpha = alpha.max(reply.value);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        // Minimizing branch, symmetric.
        let mut best = SearchResult {
            value: BETA_CEILING,
            position: None,
        };
        for pos in rules::legal_moves(board) {
            let child = board.with(pos, to_move);
            let reply = search(&child, to_move.opponent(), alpha, beta, me);
            if reply.value < best.value {
                best = SearchResult {
                    value: reply.value,
                    position: Some(pos),
                };
            }
            beta = beta.min(reply.value);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
