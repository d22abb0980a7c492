//! Draw detection.

use super::win::WinningLine;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board once the win check found nothing.
///
/// Must be called with the result of the win check for the same move; a
/// winning move that also fills the board is a win, not a draw.
pub fn is_draw(board: &Board, winner: Option<&WinningLine>) -> bool {
    winner.is_none() && is_full(board)
}
