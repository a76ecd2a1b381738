//! First-class invariants for engine inputs.
//!
//! Invariants are logical properties that hold for every board reachable
//! through legal play. They are testable independently and serve as
//! documentation of what the engine may assume about its inputs.

use crate::types::{Board, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts differ by at most one.
///
/// Marks alternate, so no legal sequence of moves can put either side two
/// placements ahead. A board that violates this was constructed outside the
/// engine; turn inference still answers best-effort but logs a diagnostic.
pub struct BalancedCounts;

impl Invariant<Board> for BalancedCounts {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        x_count.abs_diff(o_count) <= 1
    }

    fn description() -> &'static str {
        "mark counts differ by at most one"
    }
}
