//! A single board cell.

use crate::{GameError, Position, Token};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// One of the 9 cells on the board.
///
/// The position is fixed at construction. The token is set at most once per
/// game and only [`Cell::clear`] removes it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    token: Option<Token>,
}

impl Cell {
    /// Creates an empty cell at the given position.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            token: None,
        }
    }

    /// Stores `token` in the cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOccupied`] if the cell already holds a token.
    #[instrument(skip(self), fields(position = %self.position))]
    pub fn place(&mut self, token: Token) -> Result<(), GameError> {
        if let Some(existing) = self.token {
            warn!(%existing, "Double placement rejected");
            return Err(GameError::CellOccupied(self.position));
        }
        self.token = Some(token);
        Ok(())
    }

    /// Removes the token.
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// The token in this cell, if any.
    pub fn token(&self) -> Option<Token> {
        self.token
    }

    /// True when no token has been placed.
    pub fn is_empty(&self) -> bool {
        self.token.is_none()
    }

    /// The cell's position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column index.
    pub fn column(&self) -> usize {
        self.position.column()
    }
}
