//! Console adapter: the text I/O boundary the turn controller calls into.

use crate::types::{Board, Mark};
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};

/// Errors surfaced by the console adapter.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the underlying streams failed.
    #[display("console i/o failed: {_0}")]
    Io(io::Error),
    /// End of input reached before the game finished.
    #[display("input closed before the game finished")]
    InputClosed,
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

/// The boundary the core consumes for all player interaction.
///
/// The controller never reads or writes the terminal directly; tests drive
/// a full game through a scripted implementation of this trait.
pub trait Console {
    /// Asks for a player's display name at setup. Called once per player.
    fn prompt_player_name(&mut self, mark: Mark) -> Result<String, ConsoleError>;

    /// Asks the current player for a move and returns the raw token.
    ///
    /// The controller parses the token as a keypad label (1-9).
    fn prompt_move(&mut self, name: &str, mark: Mark) -> Result<String, ConsoleError>;

    /// Shows the current board. Called before each move request.
    fn render_board(&mut self, board: &Board) -> Result<(), ConsoleError>;

    /// Signals that the last choice was rejected (non-numeric, out of
    /// range, or occupied - the controller does not distinguish).
    fn report_invalid_choice(&mut self) -> Result<(), ConsoleError>;

    /// Announces a draw. Called exactly once at game end.
    fn report_draw(&mut self) -> Result<(), ConsoleError>;

    /// Announces the winner. Called exactly once at game end.
    fn report_winner(&mut self, name: &str, mark: Mark) -> Result<(), ConsoleError>;
}

/// Console over arbitrary text streams.
///
/// The binary runs it over stdin/stdout (see [`stdio`]); tests run it over
/// in-memory buffers.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn prompt_player_name(&mut self, mark: Mark) -> Result<String, ConsoleError> {
        write!(self.output, "Enter the name for player {mark}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_move(&mut self, name: &str, mark: Mark) -> Result<String, ConsoleError> {
        write!(self.output, "{name} ({mark}), which square do you choose? ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn render_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n{}\n", board.display())?;
        Ok(())
    }

    fn report_invalid_choice(&mut self) -> Result<(), ConsoleError> {
        writeln!(
            self.output,
            "Invalid choice. Pick an open square by its keypad digit (1-9)."
        )?;
        Ok(())
    }

    fn report_draw(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\nIt's a draw!")?;
        Ok(())
    }

    fn report_winner(&mut self, name: &str, mark: Mark) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n{name} ({mark}) wins!")?;
        Ok(())
    }
}

/// Console type used by the binary.
pub type StdConsole = TextConsole<io::StdinLock<'static>, io::Stdout>;

/// Creates a console over the process stdin/stdout.
pub fn stdio() -> StdConsole {
    TextConsole::new(io::stdin().lock(), io::stdout())
}
