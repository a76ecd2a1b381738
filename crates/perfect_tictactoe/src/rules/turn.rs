//! Turn inference from mark counts.

use crate::invariants::{BalancedCounts, Invariant};
use crate::types::{Board, Mark};
use tracing::{instrument, warn};

/// Returns the mark that moves next, or `None` when the game is over.
///
/// X moves whenever the counts are level; O moves when X leads. The board
/// itself carries no turn field, so any position hands back the same answer
/// no matter how it was reached.
///
/// A board whose counts differ by more than one cannot arise from legal
/// play. That is a caller bug, not a game state, so it is logged as a
/// warning while the count comparison still yields a best-effort answer.
#[instrument(skip(board))]
pub fn player(board: &Board) -> Option<Mark> {
    if super::terminal(board) {
        return None;
    }

    let x_count = board.count(Mark::X);
    let o_count = board.count(Mark::O);
    if !BalancedCounts::holds(board) {
        warn!(x_count, o_count, "mark counts differ by more than one");
    }

    if x_count > o_count {
        Some(Mark::O)
    } else {
        Some(Mark::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::rules::result;

    #[test]
    fn test_x_opens() {
        assert_eq!(player(&Board::new()), Some(Mark::X));
    }

    #[test]
    fn test_marks_alternate() {
        let mut board = Board::new();
        assert_eq!(player(&board), Some(Mark::X));

        board = result(&board, Move::new(0, 0)).unwrap();
        assert_eq!(player(&board), Some(Mark::O));

        board = result(&board, Move::new(1, 1)).unwrap();
        assert_eq!(player(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_turn_on_finished_game() {
        let won: Board = "XXXOO....".parse().unwrap();
        assert_eq!(player(&won), None);

        let drawn: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(player(&drawn), None);
    }

    #[test]
    fn test_best_effort_on_stacked_board() {
        // Two extra X marks cannot come from legal play; the count
        // comparison still says O is owed a turn.
        let stacked: Board = "X.X......".parse().unwrap();
        assert_eq!(player(&stacked), Some(Mark::O));

        let o_heavy: Board = "OO.......".parse().unwrap();
        assert_eq!(player(&o_heavy), Some(Mark::X));
    }
}
