//! Command-line interface.

use clap::Parser;

/// Perfect-play tic-tac-toe for the terminal.
///
/// You play X against an engine that searches the full game tree; the
/// best you can hope for is a draw.
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(version)]
pub struct Cli {
    /// Disable colored output.
    #[arg(long)]
    pub plain: bool,
}
