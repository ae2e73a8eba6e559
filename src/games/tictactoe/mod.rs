//! Tic-tac-toe game engine.
//!
//! - [`GameSession`] owns board, turn, outcome and mode, and is the only
//!   place a live board changes.
//! - [`rules`] holds the fixed line table and [`evaluate_outcome`].
//! - [`select_ai_move`] is the one-ply heuristic opponent.

mod action;
mod ai;
mod contracts;
mod invariants;
mod phases;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{Move, MoveError, MoveOrigin};
pub use ai::select_ai_move;
pub use contracts::{
    Contract, GameNotOver, LegalMove, MoveContract, OriginMayMove, PlayersTurn, SquareIsEmpty,
};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, OutcomeDerivedInvariant, SessionInvariants,
};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{LINES, check_winner, evaluate_outcome, is_full};
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use types::{Board, BoardParseError, GameMode, Mark, Square};
