//! Validated board coordinates.

use crate::{Board, GameError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// A single row or column index, always in `0..SIZE`.
///
/// Serializes as a plain number; deserializing rejects anything past `2`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum Index {
    /// Top row or left column.
    First,
    /// Middle row or column.
    Second,
    /// Bottom row or right column.
    Third,
}

impl Index {
    /// All indices in ascending order.
    pub const ALL: [Index; SIZE] = [Index::First, Index::Second, Index::Third];

    /// Checked conversion from a raw index.
    pub fn new(value: usize) -> Option<Self> {
        Self::ALL.get(value).copied()
    }

    /// The raw index.
    pub const fn get(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Index {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(GameError::InvalidIndex(value))
    }
}

impl From<Index> for usize {
    fn from(index: Index) -> Self {
        index.get()
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A cell coordinate on the 3x3 board.
///
/// Both indices are guaranteed to lie in `0..SIZE`; the only way to build a
/// `Position` from arbitrary numbers is [`Position::new`], which rejects
/// anything else. Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    column: usize,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    column: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = GameError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.column)
    }
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Creates a position, failing when either index is outside `0..=2`.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, GameError> {
        if row >= SIZE || column >= SIZE {
            return Err(GameError::OutOfRange { row, column });
        }
        Ok(Self::at(row, column))
    }

    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    pub fn column(self) -> usize {
        self.column
    }

    /// Row as a bounded [`Index`].
    pub fn row_index(self) -> Index {
        Index::ALL[self.row]
    }

    /// Column as a bounded [`Index`].
    pub fn column_index(self) -> Index {
        Index::ALL[self.column]
    }

    /// Row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.column
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True when this position lies on the top-left to bottom-right diagonal.
    pub fn on_backward_diagonal(self) -> bool {
        self.row == self.column
    }

    /// True when this position lies on the top-right to bottom-left diagonal.
    pub fn on_forward_diagonal(self) -> bool {
        self.row + self.column == SIZE - 1
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match (self.row, self.column) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }

    /// Filters positions by board state, returning only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.cell(*pos).is_empty())
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.column)
    }
}
