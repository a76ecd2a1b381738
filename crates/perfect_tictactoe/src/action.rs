//! First-class move types for the engine.
//!
//! Moves are domain events, not side effects. A move names a cell; the mark
//! that lands there is inferred from the board it is applied to, so the same
//! move value can be replayed against any position.

use serde::{Deserialize, Serialize};

/// A move: placing the next mark at a (row, column) cell.
///
/// Rows and columns are 0-indexed from the top-left corner. Construction is
/// unchecked so that out-of-range coordinates stay representable; they are
/// rejected when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, 0-2 from the top.
    pub row: usize,
    /// Column index, 0-2 from the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true when both coordinates lie on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Converts the move to a board index (0-8, row-major).
    ///
    /// Only meaningful for in-bounds moves.
    pub(crate) fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying a move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates fall outside the 3x3 board.
    #[display("cell ({}, {}) is outside the 3x3 board", row, col)]
    OutOfBounds {
        /// Offending row index.
        row: usize,
        /// Offending column index.
        col: usize,
    },

    /// The target cell is already taken.
    #[display("cell {} is already taken", _0)]
    Occupied(Move),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), i);
            assert_eq!(mv.row, i / 3);
            assert_eq!(mv.col, i % 3);
        }
    }

    #[test]
    fn test_in_bounds() {
        assert!(Move::new(0, 0).in_bounds());
        assert!(Move::new(2, 2).in_bounds());
        assert!(!Move::new(3, 0).in_bounds());
        assert!(!Move::new(0, 3).in_bounds());
        assert!(!Move::new(9, 9).in_bounds());
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(
            MoveError::Occupied(Move::new(1, 2)).to_string(),
            "cell (1, 2) is already taken"
        );
        assert_eq!(
            MoveError::OutOfBounds { row: 4, col: 0 }.to_string(),
            "cell (4, 0) is outside the 3x3 board"
        );
    }

    #[test]
    fn test_move_serde_round_trip() {
        let mv = Move::new(2, 1);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"row":2,"col":1}"#);
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
