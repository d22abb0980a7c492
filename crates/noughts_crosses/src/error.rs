//! Error types for board access and move validation.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Hard failures raised by the board and the win detector.
///
/// These signal caller bugs rather than ordinary gameplay: the interactive
/// layer pre-checks occupancy and never asks for a winner before a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Row or column outside `0..=2`.
    #[display("Position ({row}, {column}) is out of range (must be 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// A single row or column index outside `0..=2`.
    #[display("Index {} is out of range (must be 0-2)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a token.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// A win check was requested before any move was made.
    #[display("No moves taken")]
    NoMovesTaken,
}

impl std::error::Error for GameError {}

/// Why an interactive move was turned into a no-op.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum RejectReason {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The target cell already holds a token.
    #[display("Cell is already occupied")]
    CellOccupied,
}
