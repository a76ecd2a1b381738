//! Full-board detection.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (every square taken).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
