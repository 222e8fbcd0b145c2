//! The game engine: board model, rules, and adversarial search.
//!
//! Everything in this module is synchronous and pure. The engine
//! consumes board snapshots and produces plain data (evaluations and
//! search results); rendering and input belong to the console shell.

mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use game::{GameState, GameStatus};
pub use position::Position;
pub use rules::{StateEvaluation, evaluate};
pub use search::{SearchResult, choose_move};
pub use types::{Board, Mark, MoveError, Square};
