//! Core value types.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Token {
    /// Noughts (`O`).
    #[display("O")]
    Nought,
    /// Crosses (`X`), the default starting token.
    #[default]
    #[display("X")]
    Cross,
}

impl Token {
    /// Returns the other player's token.
    pub fn opponent(self) -> Self {
        match self {
            Token::Nought => Token::Cross,
            Token::Cross => Token::Nought,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Token::Nought => "Nought",
            Token::Cross => "Cross",
        }
    }
}
