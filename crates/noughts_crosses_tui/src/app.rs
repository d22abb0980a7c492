//! Application state and logic.

use crate::config::Palette;
use crate::input::{self, Action};
use crate::renderer::TerminalRenderer;
use crossterm::event::{KeyCode, MouseEventKind};
use noughts_crosses::{Command, GameError, Position, Session, Token};
use tracing::{debug, instrument, warn};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session<TerminalRenderer>,
    cursor: Position,
    palette: Palette,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the cursor on the centre cell.
    pub fn new(palette: Palette) -> Self {
        Self {
            session: Session::new(TerminalRenderer::new()),
            cursor: Position::ALL[4],
            palette,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session<TerminalRenderer> {
        &self.session
    }

    /// The view state the session last painted.
    pub fn view(&self) -> &TerminalRenderer {
        self.session.renderer()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Colours used for drawing.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Token to preview under the cursor, if a move there would be accepted.
    pub fn preview(&self) -> Option<Token> {
        let empty = self.view().token_at(self.cursor).is_none();
        (empty && !self.session.is_over()).then(|| self.session.current_turn())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), GameError> {
        match input::action_for(self.cursor, key) {
            Action::Move(pos) => self.cursor = pos,
            Action::Command(command) => self.dispatch(command)?,
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
        Ok(())
    }

    /// Handles a mouse event over `cell`.
    ///
    /// Hovering moves the cursor so the preview follows the pointer; a left
    /// click activates the cell.
    pub fn handle_mouse(
        &mut self,
        kind: MouseEventKind,
        cell: Option<Position>,
    ) -> Result<(), GameError> {
        let Some(pos) = cell else {
            return Ok(());
        };
        match kind {
            MouseEventKind::Moved => self.cursor = pos,
            MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                self.cursor = pos;
                self.dispatch(Command::Activate(pos))?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Applies `--nought-first`.
    pub fn start_with(&mut self, token: Token) {
        if self.session.current_turn() != token {
            self.session.on_starting_player_toggle_requested();
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<(), GameError> {
        match self.session.handle(command) {
            Ok(snapshot) => {
                debug!(turn = %snapshot.turn(), over = snapshot.is_over(), "Command handled");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                Err(e)
            }
        }
    }
}
