//! The 3x3 grid of cells.

use crate::position::SIZE;
use crate::{Cell, GameError, Position, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 board.
///
/// Holds exactly 9 cells with unique positions. The cells are created once
/// and reused across resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|column| Cell::new(Position::at(row, column)))
            }),
        }
    }

    /// Returns the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] when either index is outside `0..=2`.
    pub fn get(&self, row: usize, column: usize) -> Result<&Cell, GameError> {
        let pos = Position::new(row, column)?;
        Ok(self.cell(pos))
    }

    /// Returns the cell at a validated position.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row()][pos.column()]
    }

    /// Places `token` at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range position or an occupied cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, column: usize, token: Token) -> Result<(), GameError> {
        let pos = Position::new(row, column)?;
        self.place_at(pos, token)
    }

    /// Places `token` at a validated position.
    pub fn place_at(&mut self, pos: Position, token: Token) -> Result<(), GameError> {
        self.cells[pos.row()][pos.column()].place(token)
    }

    /// The token at a position, if any.
    pub fn token_at(&self, pos: Position) -> Option<Token> {
        self.cell(pos).token()
    }

    /// True when all 9 cells hold a token.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.cells().filter(|cell| cell.token() == Some(token)).count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Clearing board");
        for cell in self.cells.iter_mut().flatten() {
            cell.clear();
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based index.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let symbol = match cell.token() {
                    Some(token) => token.to_string(),
                    None => (cell.position().to_index() + 1).to_string(),
                };
                result.push_str(&symbol);
                if column < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
