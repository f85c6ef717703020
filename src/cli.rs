//! Command-line interface for keypad_tictactoe.

use clap::Parser;

/// Keypad tic-tac-toe - two-player console game
#[derive(Parser, Debug)]
#[command(name = "keypad_tictactoe")]
#[command(about = "Two-player tic-tac-toe with keypad square addressing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name for player X; prompts interactively when omitted
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for player O; prompts interactively when omitted
    #[arg(long)]
    pub player_o: Option<String>,
}
