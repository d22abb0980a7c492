//! Game rules for noughts & crosses.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the state machine and the
//! invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, WinningLine, check_winner};
