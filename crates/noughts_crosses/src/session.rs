//! Interactive session: input commands in, render calls and snapshots out.
//!
//! A [`Session`] owns the [`GameState`] for one game and a [`Renderer`]
//! supplied by the host. Each handler runs one synchronous transaction
//! (place, check win, check draw, switch turn), tells the renderer what
//! changed and returns a [`Snapshot`] of the result.

use crate::position::SIZE;
use crate::{GameError, GameState, MoveOutcome, Position, Token, WinningLine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Presentation collaborator driven by a [`Session`].
pub trait Renderer {
    /// Draws `token` in the cell at `position`.
    fn draw_token(&mut self, position: Position, token: Token);

    /// Highlights the three cells of a completed line.
    fn highlight(&mut self, line: &WinningLine);

    /// Shows whose turn it is.
    fn show_turn(&mut self, token: Token);

    /// Shows the winner.
    fn show_winner(&mut self, token: Token);

    /// Shows that the game was drawn.
    fn show_draw(&mut self);

    /// Enables or disables the starting-player control.
    fn set_starting_player_toggle(&mut self, enabled: bool);

    /// Removes all tokens and highlights.
    fn clear(&mut self);
}

/// Renderer that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_token(&mut self, _position: Position, _token: Token) {}
    fn highlight(&mut self, _line: &WinningLine) {}
    fn show_turn(&mut self, _token: Token) {}
    fn show_winner(&mut self, _token: Token) {}
    fn show_draw(&mut self) {}
    fn set_starting_player_toggle(&mut self, _enabled: bool) {}
    fn clear(&mut self) {}
}

/// User input understood by a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// The user selected a cell.
    Activate(Position),
    /// The user asked for a new game.
    Reset,
    /// The user asked to change who starts.
    ToggleStartingPlayer,
}

/// Everything a renderer needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Whose turn it is (the winner, once won).
    turn: Token,
    /// True once the first move has been made.
    started: bool,
    /// True once won or drawn.
    is_over: bool,
    /// True when drawn.
    is_draw: bool,
    /// The winning token, if any.
    winner: Option<Token>,
    /// The winning line's cells in order, if any.
    winning_line: Option<[Position; SIZE]>,
    /// Tokens by row, then column.
    cells: [[Option<Token>; SIZE]; SIZE],
}

impl Snapshot {
    /// Captures the state of `game`.
    pub fn of(game: &GameState) -> Self {
        let board = game.board();
        Self {
            turn: game.current_turn(),
            started: game.started(),
            is_over: game.is_over(),
            is_draw: game.is_draw(),
            winner: game.winner(),
            winning_line: game.winning_line().map(WinningLine::positions),
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|column| board.token_at(Position::at(row, column)))
            }),
        }
    }

    /// The token at a position.
    pub fn token_at(&self, pos: Position) -> Option<Token> {
        self.cells[pos.row()][pos.column()]
    }
}

/// One game session bound to a renderer.
#[derive(Debug)]
pub struct Session<R: Renderer> {
    game: GameState,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Creates a session with a fresh game and paints the initial state.
    #[instrument(skip(renderer))]
    pub fn new(renderer: R) -> Self {
        let mut session = Self {
            game: GameState::new(),
            renderer,
        };
        session.paint_fresh();
        session
    }

    /// The underlying game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the session and returns its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Dispatches a command to the matching handler.
    ///
    /// # Errors
    ///
    /// Only [`Command::Activate`] can fail; see [`Session::on_cell_activated`].
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Snapshot, GameError> {
        match command {
            Command::Activate(pos) => self.activate(pos),
            Command::Reset => Ok(self.on_reset_requested()),
            Command::ToggleStartingPlayer => {
                self.on_starting_player_toggle_requested();
                Ok(self.snapshot())
            }
        }
    }

    /// Handles a click on the cell at `(row, column)`.
    ///
    /// Occupied cells and moves after the game ended are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for an invalid position.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, row: usize, column: usize) -> Result<Snapshot, GameError> {
        let pos = Position::new(row, column)?;
        self.activate(pos)
    }

    fn activate(&mut self, pos: Position) -> Result<Snapshot, GameError> {
        let first_move = !self.game.started();
        let outcome = self.game.play(pos)?;
        debug!(?outcome, "Move processed");

        match outcome {
            MoveOutcome::Rejected(_) => {}
            MoveOutcome::Placed {
                position,
                token,
                next,
            } => {
                self.renderer.draw_token(position, token);
                self.renderer.show_turn(next);
            }
            MoveOutcome::Won { position, line } => {
                self.renderer.draw_token(position, line.token());
                self.renderer.highlight(&line);
                self.renderer.show_winner(line.token());
            }
            MoveOutcome::Draw { position, token } => {
                self.renderer.draw_token(position, token);
                self.renderer.show_draw();
            }
        }
        if first_move && outcome.is_accepted() {
            self.renderer.set_starting_player_toggle(false);
        }

        Ok(self.snapshot())
    }

    /// Handles the reset control.
    #[instrument(skip(self))]
    pub fn on_reset_requested(&mut self) -> Snapshot {
        self.game.reset();
        self.paint_fresh();
        self.snapshot()
    }

    /// Handles the starting-player control.
    ///
    /// Returns the current turn, which only changes before the first move.
    #[instrument(skip(self))]
    pub fn on_starting_player_toggle_requested(&mut self) -> Token {
        if self.game.switch_starting_player() {
            self.renderer.show_turn(self.game.current_turn());
        }
        self.game.current_turn()
    }

    fn paint_fresh(&mut self) {
        self.renderer.clear();
        self.renderer.show_turn(self.game.current_turn());
        self.renderer.set_starting_player_toggle(true);
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.game)
    }

    /// Whose turn it is.
    pub fn current_turn(&self) -> Token {
        self.game.current_turn()
    }

    /// True once the game was won or drawn.
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// True when the game was drawn.
    pub fn is_draw(&self) -> bool {
        self.game.is_draw()
    }

    /// The winning line's cells, if any.
    pub fn winning_line(&self) -> Option<[Position; SIZE]> {
        self.game.winning_line().map(WinningLine::positions)
    }

    /// The token at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for an invalid position.
    pub fn cell_token(&self, row: usize, column: usize) -> Result<Option<Token>, GameError> {
        self.game.cell_token(row, column)
    }
}

impl Default for Session<NullRenderer> {
    fn default() -> Self {
        Self::new(NullRenderer)
    }
}
