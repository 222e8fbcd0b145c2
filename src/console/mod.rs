//! Console shell: rendering, input, and the game loop.

pub mod players;
mod render;
mod session;

pub use render::{render_board, render_mark};
pub use session::Session;

use crate::cli::Cli;
use crate::engine::Mark;
use anyhow::Result;
use players::{EnginePlayer, HumanPlayer};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing::info;

/// Runs one human-versus-engine game on the console.
///
/// The human always plays X, the engine O; a prompt decides who moves
/// first.
pub async fn run(cli: Cli) -> Result<()> {
    info!("starting console game");

    let mut lines = BufReader::new(stdin()).lines();

    println!(
        "You are {}, the engine is {}.",
        render_mark(Mark::X, cli.plain),
        render_mark(Mark::O, cli.plain)
    );
    print!("Do you want to go first? (y/n): ");
    std::io::stdout().flush()?;

    let answer = lines.next_line().await?.unwrap_or_default();
    let human_first = answer.trim().to_lowercase().starts_with('y');
    let first = if human_first { Mark::X } else { Mark::O };

    let human = HumanPlayer::new("You", lines);
    let engine = EnginePlayer::new("Engine", Mark::O);

    let mut session = Session::new(first, Box::new(human), Box::new(engine), cli.plain);
    let status = session.run().await?;
    info!(?status, "game finished");

    Ok(())
}
