//! Board positions and the keypad addressing scheme.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// A position on the board.
///
/// Internally everything runs on row-major indices 0-8; players address
/// squares by the digit occupying the same spot on a numeric keypad, so the
/// bottom row answers to 1-3 and the top row to 7-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Top-left (index 0, keypad 7)
    TopLeft,
    /// Top-center (index 1, keypad 8)
    TopCenter,
    /// Top-right (index 2, keypad 9)
    TopRight,
    /// Middle-left (index 3, keypad 4)
    MiddleLeft,
    /// Center (index 4, keypad 5)
    Center,
    /// Middle-right (index 5, keypad 6)
    MiddleRight,
    /// Bottom-left (index 6, keypad 1)
    BottomLeft,
    /// Bottom-center (index 7, keypad 2)
    BottomCenter,
    /// Bottom-right (index 8, keypad 3)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Resolves a keypad label (1-9) to its position.
    ///
    /// The mapping mirrors the physical keypad layout and is a compatibility
    /// surface: label 7 is the top-left square, label 1 the bottom-left.
    /// Returns `None` for any label outside 1-9.
    #[instrument]
    pub fn from_keypad(label: u8) -> Option<Self> {
        match label {
            7 => Some(Position::TopLeft),
            8 => Some(Position::TopCenter),
            9 => Some(Position::TopRight),
            4 => Some(Position::MiddleLeft),
            5 => Some(Position::Center),
            6 => Some(Position::MiddleRight),
            1 => Some(Position::BottomLeft),
            2 => Some(Position::BottomCenter),
            3 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// The keypad label (1-9) that selects this position.
    pub fn keypad_label(self) -> u8 {
        match self {
            Position::TopLeft => 7,
            Position::TopCenter => 8,
            Position::TopRight => 9,
            Position::MiddleLeft => 4,
            Position::Center => 5,
            Position::MiddleRight => 6,
            Position::BottomLeft => 1,
            Position::BottomCenter => 2,
            Position::BottomRight => 3,
        }
    }

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Positions whose square is still empty on the given board.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
