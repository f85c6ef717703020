//! Keypad addressing through the public API.

use keypad_tictactoe::{Board, Mark, Position, Square};

#[test]
fn test_keypad_rows_match_physical_layout() {
    // Top row answers to 7-9, bottom row to 1-3.
    assert_eq!(Position::from_keypad(7), Some(Position::TopLeft));
    assert_eq!(Position::from_keypad(8), Some(Position::TopCenter));
    assert_eq!(Position::from_keypad(9), Some(Position::TopRight));
    assert_eq!(Position::from_keypad(1), Some(Position::BottomLeft));
    assert_eq!(Position::from_keypad(2), Some(Position::BottomCenter));
    assert_eq!(Position::from_keypad(3), Some(Position::BottomRight));
}

#[test]
fn test_every_index_is_reached_exactly_once() {
    let mut indices: Vec<usize> = (1..=9u8)
        .filter_map(Position::from_keypad)
        .map(Position::to_index)
        .collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::X));
    board.set(Position::Center, Square::Occupied(Mark::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
