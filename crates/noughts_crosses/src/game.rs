//! Turn and lifecycle state machine.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{self, WinningLine};
use crate::{Board, GameError, Position, RejectReason, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No move yet; the starting player may still be switched.
    NotStarted,
    /// At least one move made; turn order is locked.
    InProgress,
    /// Terminal: a line was completed.
    Won(WinningLine),
    /// Terminal: the board filled with no line.
    Draw,
}

impl Phase {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }
}

/// What happened when a move was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was ignored and nothing changed.
    Rejected(RejectReason),
    /// The token was placed and play passes to `next`.
    Placed {
        /// Where the token went.
        position: Position,
        /// The token that was placed.
        token: Token,
        /// Whose turn it is now.
        next: Token,
    },
    /// The token was placed and completed a line.
    Won {
        /// Where the token went.
        position: Position,
        /// The completed line.
        line: WinningLine,
    },
    /// The token was placed and filled the board without a line.
    Draw {
        /// Where the token went.
        position: Position,
        /// The token that was placed.
        token: Token,
    },
}

impl MoveOutcome {
    /// True unless the move was rejected.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Complete game state: board, turn, last move and phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Token,
    starting: Token,
    last_position: Option<Position>,
    phase: Phase,
}

impl GameState {
    /// Creates a fresh game with crosses to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Token::Cross,
            starting: Token::Cross,
            last_position: None,
            phase: Phase::NotStarted,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose token the next move places.
    ///
    /// After a win this is the winner's token.
    pub fn current_turn(&self) -> Token {
        self.turn
    }

    /// The token that made (or will make) the first move.
    pub fn starting_token(&self) -> Token {
        self.starting
    }

    /// Position of the most recent accepted move.
    pub fn last_position(&self) -> Option<Position> {
        self.last_position
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True once the first move has been made.
    pub fn started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    /// True once the game was won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// True when the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.phase == Phase::Draw
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match &self.phase {
            Phase::Won(line) => Some(line),
            _ => None,
        }
    }

    /// The winning token, if any.
    pub fn winner(&self) -> Option<Token> {
        self.winning_line().map(WinningLine::token)
    }

    /// The token at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for an invalid position.
    pub fn cell_token(&self, row: usize, column: usize) -> Result<Option<Token>, GameError> {
        Ok(self.board.get(row, column)?.token())
    }

    /// Changes who starts. Only allowed before the first move.
    ///
    /// Returns `true` if the turn was flipped, `false` if the request was
    /// ignored because the game has started.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn switch_starting_player(&mut self) -> bool {
        if self.started() {
            debug!("Starting player locked after first move");
            return false;
        }
        self.switch_turn();
        self.starting = self.turn;
        info!(starting = %self.starting, "Starting player switched");
        true
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Plays the current token at `(row, column)`.
    ///
    /// Illegal moves (game over, occupied cell) are rejected without changing
    /// anything and reported through [`MoveOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for an invalid position.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::new(row, column)?;
        self.play(position)
    }

    /// Plays the current token at a validated position.
    ///
    /// See [`GameState::apply_move`].
    #[instrument(skip(self), fields(turn = %self.turn, position = %position))]
    pub fn play(&mut self, position: Position) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            debug!("Move after game over ignored");
            return Ok(MoveOutcome::Rejected(RejectReason::GameOver));
        }
        if !self.board.cell(position).is_empty() {
            debug!("Move on occupied cell ignored");
            return Ok(MoveOutcome::Rejected(RejectReason::CellOccupied));
        }

        let token = self.turn;
        self.board.place_at(position, token)?;
        self.last_position = Some(position);

        let winner = rules::check_winner(&self.board, self.last_position)?;
        let outcome = if let Some(line) = winner {
            info!(%token, line = %line.line(), "Game won");
            self.phase = Phase::Won(line);
            MoveOutcome::Won { position, line }
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.phase = Phase::Draw;
            MoveOutcome::Draw { position, token }
        } else {
            self.switch_turn();
            if self.phase == Phase::NotStarted {
                debug!("First move made, locking starting player");
                self.phase = Phase::InProgress;
            }
            MoveOutcome::Placed {
                position,
                token,
                next: self.turn,
            }
        };

        if cfg!(debug_assertions) {
            let checked = GameInvariants::check_all(self);
            if let Err(violations) = &checked {
                warn!(?violations, "Invariant violated after move");
            }
            debug_assert!(checked.is_ok(), "Invariant violated: {:?}", checked);
        }

        Ok(outcome)
    }

    /// Returns the state after playing at `position`, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::play`].
    pub fn apply(&self, position: Position) -> Result<(GameState, MoveOutcome), GameError> {
        let mut next = self.clone();
        let outcome = next.play(position)?;
        Ok((next, outcome))
    }

    /// Returns to a fresh game: crosses to move, empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board.reset();
        self.turn = Token::Cross;
        self.starting = Token::Cross;
        self.last_position = None;
        self.phase = Phase::NotStarted;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
