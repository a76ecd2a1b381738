//! Win detection.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning lines by board index: rows, columns, then the main
/// and anti diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Returns the mark holding three in a line, if any.
///
/// At most one side can hold a line in a position reached through legal
/// play, so the first fully matching line decides. A line of empty squares
/// never matches.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Taken(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}
