//! Perfect-play tic-tac-toe engine.
//!
//! A stateless collection of pure functions over an immutable [`Board`]
//! value: infer whose turn it is, enumerate legal moves, apply a move,
//! classify terminal positions, and compute the optimal move by exhaustive
//! minimax search. There is no game loop, no I/O, and no shared state here;
//! a presentation layer holds the current board and calls in.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{minimax, result, Board, MoveError, Outcome};
//!
//! # fn main() -> Result<(), MoveError> {
//! let mut board = Board::new();
//! while let Some(mv) = minimax(&board) {
//!     board = result(&board, mv)?;
//! }
//! // Two perfect players always split the point.
//! assert_eq!(Outcome::of(&board), Outcome::Draw);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - moves and move application errors
pub use action::{Move, MoveError};

// Crate-level exports - invariants
pub use invariants::{BalancedCounts, Invariant};

// Crate-level exports - rules
pub use rules::{actions, is_full, player, result, terminal, utility, winner};

// Crate-level exports - search
pub use search::minimax;

// Crate-level exports - domain types
pub use types::{Board, Mark, Outcome, ParseBoardError, Square};
