//! Win detection around the last move.

use crate::position::{Index, SIZE};
use crate::{Board, GameError, Position, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A straight line of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Horizontal line at the given row.
    Row(Index),
    /// Vertical line at the given column.
    Column(Index),
    /// Top-right to bottom-left.
    ForwardDiagonal,
    /// Top-left to bottom-right.
    BackwardDiagonal,
}

impl Line {
    /// All 8 lines on the board: rows, columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row(Index::First),
        Line::Row(Index::Second),
        Line::Row(Index::Third),
        Line::Column(Index::First),
        Line::Column(Index::Second),
        Line::Column(Index::Third),
        Line::ForwardDiagonal,
        Line::BackwardDiagonal,
    ];

    /// The line's cells, ordered top to bottom (left to right for rows).
    pub fn positions(self) -> [Position; SIZE] {
        std::array::from_fn(|i| match self {
            Line::Row(row) => Position::at(row.get(), i),
            Line::Column(column) => Position::at(i, column.get()),
            Line::ForwardDiagonal => Position::at(i, SIZE - 1 - i),
            Line::BackwardDiagonal => Position::at(i, i),
        })
    }

    /// Lines through `pos`, in checking order.
    ///
    /// Row and column always qualify. A diagonal is included only when `pos`
    /// lies on it.
    pub fn through(pos: Position) -> impl Iterator<Item = Line> {
        [
            Some(Line::Row(pos.row_index())),
            Some(Line::Column(pos.column_index())),
            pos.on_forward_diagonal().then_some(Line::ForwardDiagonal),
            pos.on_backward_diagonal().then_some(Line::BackwardDiagonal),
        ]
        .into_iter()
        .flatten()
    }

    /// Returns the token filling the whole line, if one does.
    pub fn owner(self, board: &Board) -> Option<Token> {
        let [a, b, c] = self.positions().map(|pos| board.token_at(pos));
        match a {
            Some(token) if b == a && c == a => Some(token),
            _ => None,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(column) => write!(f, "column {}", column),
            Line::ForwardDiagonal => write!(f, "forward diagonal"),
            Line::BackwardDiagonal => write!(f, "backward diagonal"),
        }
    }
}

/// A completed line and the token that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    line: Line,
    token: Token,
}

impl WinningLine {
    /// The line that was completed.
    pub fn line(&self) -> Line {
        self.line
    }

    /// The winning token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// The three cells to highlight, in line order.
    pub fn positions(&self) -> [Position; SIZE] {
        self.line.positions()
    }
}

/// Checks whether the move at `last` completed a line.
///
/// Lines are checked in the order row, column, forward diagonal, backward
/// diagonal, and the first complete one is returned. Diagonals are skipped
/// unless `last` lies on them.
///
/// # Errors
///
/// Returns [`GameError::NoMovesTaken`] when `last` is `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, last: Option<Position>) -> Result<Option<WinningLine>, GameError> {
    let last = last.ok_or(GameError::NoMovesTaken)?;

    for line in Line::through(last) {
        if let Some(token) = line.owner(board) {
            debug!(%line, %token, "Line completed");
            return Ok(Some(WinningLine { line, token }));
        }
    }

    Ok(None)
}
