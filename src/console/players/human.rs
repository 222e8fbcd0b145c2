//! Human player reading moves from standard input.

use super::Player;
use crate::engine::{GameState, Position};
use anyhow::Result;
use std::io::Write;
use tokio::io::{BufReader, Lines, Stdin};

/// Human player prompted on the console for cell numbers 1-9.
pub struct HumanPlayer {
    name: String,
    lines: Lines<BufReader<Stdin>>,
}

impl HumanPlayer {
    /// Creates a new human player reading from `lines`.
    pub fn new(name: impl Into<String>, lines: Lines<BufReader<Stdin>>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}

/// Parses a 1-based cell number into a position.
pub(crate) fn parse_cell(input: &str) -> Option<Position> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=9).contains(&n) {
        Position::from_index(n - 1)
    } else {
        None
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn pick_move(&mut self, game: &GameState) -> Result<Position> {
        loop {
            print!("Your move (1-9): ");
            std::io::stdout().flush()?;

            let Some(line) = self.lines.next_line().await? else {
                anyhow::bail!("input closed");
            };

            match parse_cell(&line) {
                Some(pos) if game.board().is_empty(pos) => return Ok(pos),
                Some(_) => println!("That spot is already taken."),
                None => println!("Please enter a number from 1 to 9."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_accepts_one_through_nine() {
        assert_eq!(parse_cell("1"), Some(Position::TopLeft));
        assert_eq!(parse_cell(" 9 "), Some(Position::BottomRight));
        assert_eq!(parse_cell("5"), Some(Position::Center));
    }

    #[test]
    fn test_parse_cell_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_cell("0"), None);
        assert_eq!(parse_cell("10"), None);
        assert_eq!(parse_cell("center"), None);
        assert_eq!(parse_cell(""), None);
    }
}
