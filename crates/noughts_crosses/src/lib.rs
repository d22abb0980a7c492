//! Noughts & crosses game logic.
//!
//! A 3x3 board model, win detection around the last move and a
//! turn/lifecycle state machine, with no dependency on any UI toolkit.
//!
//! # Architecture
//!
//! - **Cell / Board**: token storage; double placement is an error.
//! - **Rules**: win detection through the last-played cell, then draw.
//! - **GameState**: turn switching, started/over flags, reset.
//! - **Session**: the host-facing surface. Commands go in, [`Renderer`]
//!   calls and a [`Snapshot`] come out.
//!
//! # Example
//!
//! ```
//! use noughts_crosses::{Session, Token};
//!
//! # fn example() -> Result<(), noughts_crosses::GameError> {
//! let mut session = Session::default();
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     session.on_cell_activated(row, column)?;
//! }
//! assert!(session.is_over());
//! assert_eq!(session.snapshot().winner(), &Some(Token::Cross));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use board::Board;
pub use cell::Cell;
pub use error::{GameError, RejectReason};
pub use game::{GameState, MoveOutcome, Phase};
pub use position::{Index, Position, SIZE};
pub use rules::{Line, WinningLine};
pub use session::{Command, NullRenderer, Renderer, Session, Snapshot};
pub use types::Token;
