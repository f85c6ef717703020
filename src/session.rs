//! Turn controller: owns the two players and drives a game to completion.

use crate::console::{Console, ConsoleError};
use crate::game::{Game, GameTransition, PlaceError};
use crate::position::Position;
use crate::types::{Board, GameStatus, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A player identity: display name plus assigned mark.
///
/// Immutable after setup; the session is the only place where a mark is
/// resolved back to a player name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a player with the given name and mark.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's assigned mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Why a submitted move token was rejected.
///
/// All three causes are recovered identically - one invalid-choice signal
/// to the adapter and a re-prompt of the same player. The distinction only
/// feeds the controller's own tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ChoiceError {
    /// The token is not a valid integer.
    #[display("token is not a number")]
    NotANumber,
    /// The label is an integer outside 1-9.
    #[display("label is outside 1-9")]
    OutOfRange,
    /// The label points at an occupied square.
    #[display("square is already occupied")]
    Occupied,
}

/// Errors that abort a running session.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// The console adapter failed.
    #[display("console failure: {_0}")]
    Console(ConsoleError),
    /// The engine rejected a move the controller had already validated.
    #[display("engine rejected a validated move: {_0}")]
    Place(PlaceError),
}

impl From<ConsoleError> for SessionError {
    fn from(err: ConsoleError) -> Self {
        SessionError::Console(err)
    }
}

impl From<PlaceError> for SessionError {
    fn from(err: PlaceError) -> Self {
        SessionError::Place(err)
    }
}

/// Parses a raw token into a playable position on the given board.
///
/// # Errors
///
/// One [`ChoiceError`] per cause in the taxonomy: malformed token,
/// out-of-range label, occupied square.
#[instrument(skip(board))]
pub fn parse_choice(token: &str, board: &Board) -> Result<Position, ChoiceError> {
    let label: u8 = token.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
    let pos = Position::from_keypad(label).ok_or(ChoiceError::OutOfRange)?;
    if !board.is_empty(pos) {
        return Err(ChoiceError::Occupied);
    }
    Ok(pos)
}

/// A game session with two players.
///
/// Owns both player identities for the life of one game; the board lives
/// inside the engine the session drives.
#[derive(Debug, Clone)]
pub struct GameSession {
    player_x: Player,
    player_o: Player,
}

impl GameSession {
    /// Creates a session from two player names. X moves first.
    pub fn new(name_x: impl Into<String>, name_o: impl Into<String>) -> Self {
        Self {
            player_x: Player::new(name_x, Mark::X),
            player_o: Player::new(name_o, Mark::O),
        }
    }

    /// Resolves player names and builds the session.
    ///
    /// A name passed through the CLI skips the interactive prompt;
    /// otherwise the console is asked, X first.
    #[instrument(skip(console))]
    pub fn setup<C: Console>(
        console: &mut C,
        name_x: Option<String>,
        name_o: Option<String>,
    ) -> Result<Self, ConsoleError> {
        let name_x = match name_x {
            Some(name) => name,
            None => console.prompt_player_name(Mark::X)?,
        };
        let name_o = match name_o {
            Some(name) => name,
            None => console.prompt_player_name(Mark::O)?,
        };

        info!(player_x = %name_x, player_o = %name_o, "session ready");
        Ok(Self::new(name_x, name_o))
    }

    /// The player holding the given mark.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Runs the game to completion and returns the terminal status.
    ///
    /// Each turn renders the board, prompts the current player until they
    /// produce a playable square, applies the move, then either announces
    /// the result or hands the turn to the other player.
    #[instrument(skip_all)]
    pub fn run<C: Console>(&self, console: &mut C) -> Result<GameStatus, SessionError> {
        let mut game = Game::new();

        loop {
            console.render_board(game.board())?;

            let player = self.player(game.to_move());
            let pos = self.choose_position(console, player, game.board())?;

            game = match game.place(pos)? {
                GameTransition::InProgress(next) => next,
                GameTransition::Won(finished) => {
                    let winner = self.player(finished.winner());
                    info!(
                        winner = winner.name(),
                        mark = ?winner.mark(),
                        moves = finished.history().len(),
                        "game won"
                    );
                    console.report_winner(winner.name(), winner.mark())?;
                    return Ok(GameStatus::Won(finished.winner()));
                }
                GameTransition::Draw(finished) => {
                    info!(moves = finished.history().len(), "game drawn");
                    console.report_draw()?;
                    return Ok(GameStatus::Draw);
                }
            };
        }
    }

    /// Re-prompts the same player until they produce a playable square.
    ///
    /// Invalid input never advances the turn; retries are unbounded.
    #[instrument(skip_all, fields(player = player.name(), mark = ?player.mark()))]
    fn choose_position<C: Console>(
        &self,
        console: &mut C,
        player: &Player,
        board: &Board,
    ) -> Result<Position, ConsoleError> {
        loop {
            let token = console.prompt_move(player.name(), player.mark())?;
            match parse_choice(&token, board) {
                Ok(pos) => {
                    debug!(token = %token, position = ?pos, "choice accepted");
                    return Ok(pos);
                }
                Err(reason) => {
                    debug!(token = %token, %reason, "choice rejected");
                    console.report_invalid_choice()?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_parse_choice_accepts_open_squares() {
        let board = Board::new();
        assert_eq!(parse_choice("7", &board), Ok(Position::TopLeft));
        assert_eq!(parse_choice(" 5 ", &board), Ok(Position::Center));
    }

    #[test]
    fn test_parse_choice_rejects_garbage() {
        let board = Board::new();
        assert_eq!(parse_choice("seven", &board), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("", &board), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("-1", &board), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_parse_choice_rejects_out_of_range_labels() {
        let board = Board::new();
        assert_eq!(parse_choice("0", &board), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("10", &board), Err(ChoiceError::OutOfRange));
    }

    #[test]
    fn test_parse_choice_rejects_occupied_squares() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        assert_eq!(parse_choice("5", &board), Err(ChoiceError::Occupied));
    }

    #[test]
    fn test_session_resolves_marks_to_players() {
        let session = GameSession::new("Ann", "Bob");
        assert_eq!(session.player(Mark::X).name(), "Ann");
        assert_eq!(session.player(Mark::O).name(), "Bob");
        assert_eq!(session.player(Mark::O).mark(), Mark::O);
    }
}
