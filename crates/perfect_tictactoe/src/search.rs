//! Exhaustive minimax search.
//!
//! Every call walks the full game tree below the given board: no pruning,
//! no transposition table. The 3x3 game is small enough that the empty
//! board costs a few hundred thousand leaf evaluations, and the exhaustive
//! walk keeps move selection exactly reproducible.

use crate::action::Move;
use crate::rules::{actions, player, result, terminal, utility};
use crate::types::{Board, Mark};
use tracing::instrument;

/// Computes the optimal move for the side to play.
///
/// X maximizes the score returned by [`utility`]; O minimizes it. Both
/// sides are assumed to answer optimally all the way down.
///
/// Returns `None` when the board is already terminal: a finished game has
/// no move to recommend, and that is a normal outcome rather than an error.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Move> {
    if terminal(board) {
        return None;
    }

    match player(board) {
        Some(Mark::X) => max_value(board).1,
        Some(Mark::O) => min_value(board).1,
        None => None,
    }
}

/// Best achievable score for X, with the move that achieves it.
///
/// Ties go to the move enumerated last: a candidate replaces the incumbent
/// whenever its score is greater *or equal*. [`min_value`] mirrors the rule
/// so both sides break ties the same way and repeated searches over the
/// same board pick the same move.
fn max_value(board: &Board) -> (i32, Option<Move>) {
    if terminal(board) {
        return (utility(board), None);
    }

    let mut value = i32::MIN;
    let mut best = None;
    for mv in actions(board) {
        let next = result(board, mv).expect("enumerated move should apply cleanly");
        let (score, _) = min_value(&next);
        if score >= value {
            value = score;
            best = Some(mv);
        }
    }

    (value, best)
}

/// Mirror of [`max_value`] for the minimizing side.
fn min_value(board: &Board) -> (i32, Option<Move>) {
    if terminal(board) {
        return (utility(board), None);
    }

    let mut value = i32::MAX;
    let mut best = None;
    for mv in actions(board) {
        let next = result(board, mv).expect("enumerated move should apply cleanly");
        let (score, _) = max_value(&next);
        if score <= value {
            value = score;
            best = Some(mv);
        }
    }

    (value, best)
}
