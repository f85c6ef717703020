//! Keypad tic-tac-toe - console entry point.

use anyhow::Result;
use clap::Parser;
use keypad_tictactoe::{Cli, GameSession, stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Log to stderr so board output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Starting keypad tic-tac-toe");

    let mut console = stdio();
    let session = GameSession::setup(&mut console, cli.player_x, cli.player_o)?;
    let status = session.run(&mut console)?;

    info!(?status, "Game over");
    Ok(())
}
