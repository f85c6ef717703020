//! Typestate game engine for the board game.
//!
//! The game phase is encoded in the type parameter, so a finished game
//! cannot accept another move and only a won game exposes its winner.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Square};
use derive_more::{Display, Error};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: game is in progress.
#[derive(Debug, Clone, Copy)]
pub struct InProgress;

/// Typestate marker: game ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: game ended in a draw.
#[derive(Debug, Clone, Copy)]
pub struct Draw;

/// Game state with typestate phase encoding.
///
/// - `Game<InProgress>` accepts moves
/// - `Game<Won>` exposes `winner()`
/// - `Game<Draw>` is terminal with no special methods
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Mark,
    winner: Option<Mark>,
    history: Vec<Position>,
    _phase: PhantomData<S>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with the other mark to move.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Target square is already occupied.
    #[display("square is already occupied")]
    SquareOccupied,
    /// A move was replayed past a terminal state.
    #[display("game is already over")]
    GameOver,
}

impl Game<InProgress> {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            winner: None,
            history: Vec::new(),
            _phase: PhantomData,
        }
    }

    /// Places the current mark at the given position, consuming the game
    /// and returning the transition.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if the square is taken. The
    /// turn controller pre-validates occupancy, so this is unreachable in
    /// the normal flow.
    #[instrument(skip(self), fields(position = ?pos, mark = ?self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, PlaceError> {
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied);
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);

        match rules::outcome(&self.board) {
            GameStatus::Won(mark) => Ok(GameTransition::Won(Game {
                board: self.board,
                to_move: self.to_move,
                winner: Some(mark),
                history: self.history,
                _phase: PhantomData,
            })),
            GameStatus::Draw => Ok(GameTransition::Draw(Game {
                board: self.board,
                to_move: self.to_move,
                winner: None,
                history: self.history,
                _phase: PhantomData,
            })),
            GameStatus::InProgress => Ok(GameTransition::InProgress(Game {
                board: self.board,
                to_move: self.to_move.opponent(),
                winner: None,
                history: self.history,
                _phase: PhantomData,
            })),
        }
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Rebuilds a game by replaying positions from the start.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::GameOver`] if positions remain after a
    /// terminal state, or [`PlaceError::SquareOccupied`] on a repeat.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<GameTransition, PlaceError> {
        let mut transition = GameTransition::InProgress(Game::new());
        for &pos in positions {
            match transition {
                GameTransition::InProgress(game) => transition = game.place(pos)?,
                _ => return Err(PlaceError::GameOver),
            }
        }
        Ok(transition)
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winning mark.
    ///
    /// Only exists on `Game<Won>`, so a winner is guaranteed.
    pub fn winner(&self) -> Mark {
        self.winner.expect("won game must have a winner")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_progress(transition: GameTransition) -> Game<InProgress> {
        match transition {
            GameTransition::InProgress(game) => game,
            other => panic!("expected game to continue, got {other:?}"),
        }
    }

    #[test]
    fn test_marks_alternate() {
        let game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        let game = in_progress(game.place(Position::Center).expect("valid move"));
        assert_eq!(game.to_move(), Mark::O);
        let game = in_progress(game.place(Position::TopLeft).expect("valid move"));
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = Game::new();
        let game = in_progress(game.place(Position::Center).expect("valid move"));
        let result = game.place(Position::Center);
        assert!(matches!(result, Err(PlaceError::SquareOccupied)));
    }

    #[test]
    fn test_replay_win() {
        // X takes the top row on move five
        let result = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .expect("valid replay");

        match result {
            GameTransition::Won(game) => {
                assert_eq!(game.winner(), Mark::X);
                assert_eq!(game.history().len(), 5);
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_draw_uses_all_nine_moves() {
        let result = Game::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
            Position::MiddleRight,
            Position::BottomRight,
            Position::BottomCenter,
        ])
        .expect("valid replay");

        match result {
            GameTransition::Draw(game) => assert_eq!(game.history().len(), 9),
            other => panic!("expected a draw, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_past_terminal_state_fails() {
        let result = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
            Position::BottomRight,
        ]);
        assert!(matches!(result, Err(PlaceError::GameOver)));
    }
}
