//! Retained view state fed by the game session.
//!
//! The session talks to this renderer through the [`Renderer`] trait; the
//! draw loop then paints whatever the renderer last recorded.

use derive_getters::Getters;
use noughts_crosses::{Position, Renderer, SIZE, Token, WinningLine};
use tracing::debug;

/// Header text above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Whose turn it is.
    Turn(Token),
    /// Who won.
    Winner(Token),
    /// The game was drawn.
    Draw,
}

impl Banner {
    /// Text shown in the header.
    pub fn text(self) -> String {
        match self {
            Banner::Turn(token) => format!("Turn: {} ({})", token, token.name()),
            Banner::Winner(token) => format!("Winner: {} ({})", token, token.name()),
            Banner::Draw => "Draw".to_string(),
        }
    }
}

/// Terminal view model.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TerminalRenderer {
    /// Drawn tokens by row, then column.
    cells: [[Option<Token>; SIZE]; SIZE],
    /// Highlighted line, if any.
    highlighted: Option<WinningLine>,
    /// Header state.
    banner: Banner,
    /// Whether the starting-player control is enabled.
    toggle_enabled: bool,
}

impl TerminalRenderer {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
            highlighted: None,
            banner: Banner::Turn(Token::Cross),
            toggle_enabled: true,
        }
    }

    /// The token drawn at `pos`.
    pub fn token_at(&self, pos: Position) -> Option<Token> {
        self.cells[pos.row()][pos.column()]
    }

    /// True when `pos` is part of the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted
            .is_some_and(|line| line.positions().contains(&pos))
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn draw_token(&mut self, position: Position, token: Token) {
        debug!(%position, %token, "Drawing token");
        self.cells[position.row()][position.column()] = Some(token);
    }

    fn highlight(&mut self, line: &WinningLine) {
        debug!(line = %line.line(), "Highlighting line");
        self.highlighted = Some(*line);
    }

    fn show_turn(&mut self, token: Token) {
        self.banner = Banner::Turn(token);
    }

    fn show_winner(&mut self, token: Token) {
        self.banner = Banner::Winner(token);
    }

    fn show_draw(&mut self) {
        self.banner = Banner::Draw;
    }

    fn set_starting_player_toggle(&mut self, enabled: bool) {
        self.toggle_enabled = enabled;
    }

    fn clear(&mut self) {
        self.cells = [[None; SIZE]; SIZE];
        self.highlighted = None;
    }
}
