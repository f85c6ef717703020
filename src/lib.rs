//! Keypad tic-tac-toe - two-player console game.
//!
//! Players address squares by the digit occupying the same spot on a
//! numeric keypad: 7-8-9 is the top row, 1-2-3 the bottom.
//!
//! # Architecture
//!
//! - **types / rules**: board state and outcome evaluation
//! - **position**: keypad label addressing (1-9 to squares)
//! - **game**: typestate engine (`InProgress` to `Won` | `Draw`)
//! - **session**: turn controller owning the two players
//! - **console**: the text I/O boundary the controller calls into

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod game;
mod position;
mod rules;
mod session;
mod types;

pub use cli::Cli;
pub use console::{Console, ConsoleError, StdConsole, TextConsole, stdio};
pub use game::{Draw, Game, GameTransition, InProgress, PlaceError, Won};
pub use position::Position;
pub use rules::{check_winner, outcome};
pub use session::{ChoiceError, GameSession, Player, SessionError, parse_choice};
pub use types::{Board, GameStatus, Mark, Square};
