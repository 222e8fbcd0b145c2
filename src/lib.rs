//! Tactix - perfect-play tic-tac-toe.
//!
//! # Architecture
//!
//! - **engine**: board model, rules evaluator, and minimax search with
//!   alpha-beta pruning. Synchronous and pure; consumes board
//!   snapshots and produces plain data.
//! - **console**: the presentation shell - rendering, input parsing,
//!   and the turn loop between a human and the engine.
//!
//! # Example
//!
//! ```
//! use tactix::{Board, Mark, choose_move};
//!
//! // Perfect play from the empty board is a draw.
//! let result = choose_move(&Board::new(), Mark::X, Mark::X);
//! assert_eq!(result.value, 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
pub mod engine;

pub use engine::{
    Board, GameState, GameStatus, Mark, MoveError, Position, SearchResult, Square, StateEvaluation,
    choose_move, evaluate,
};
