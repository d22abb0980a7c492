//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use noughts_crosses::{Command, Position, SIZE};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    Move(Position),
    /// Forward a command to the session.
    Command(Command),
    /// Leave the app.
    Quit,
    /// Nothing to do.
    None,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(SIZE - 1), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(SIZE - 1)),
        _ => return cursor,
    };
    Position::new(target.0, target.1).unwrap_or(cursor)
}

/// Maps a key press to an [`Action`].
///
/// Digits address cells in reading order, `1` being the top-left corner.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Move(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Command(Command::Activate(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map_or(Action::None, |pos| Action::Command(Command::Activate(pos))),
        KeyCode::Char('s') => Action::Command(Command::ToggleStartingPlayer),
        KeyCode::Char('r') => Action::Command(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}
