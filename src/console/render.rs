//! Board rendering for the terminal.
//!
//! All color and formatting lives here; the engine only ever hands
//! over plain data.

use crate::engine::{Board, Mark, Position, Square};
use crossterm::style::Stylize;

/// Formats the board as a 3x3 grid.
///
/// Empty squares show their 1-based cell number (the same numbers the
/// move prompt accepts). With `plain` unset, X renders blue and O
/// yellow.
pub fn render_board(board: &Board, plain: bool) -> String {
    let mut out = String::from("\n");
    for row in 0..3 {
        let mut cells = Vec::with_capacity(3);
        for col in 0..3 {
            let index = row * 3 + col;
            let pos = Position::from_index(index).expect("index in range");
            let cell = match board.get(pos) {
                Square::Empty => (index + 1).to_string(),
                Square::Taken(mark) => render_mark(mark, plain),
            };
            cells.push(cell);
        }
        out.push_str("  ");
        out.push_str(&cells.join(" | "));
        out.push('\n');
        if row < 2 {
            out.push_str(" ---+---+---\n");
        }
    }
    out
}

/// Formats a single mark, styled unless `plain`.
pub fn render_mark(mark: Mark, plain: bool) -> String {
    if plain {
        return mark.to_string();
    }
    match mark {
        Mark::X => "X".blue().to_string(),
        Mark::O => "O".yellow().to_string(),
    }
}
