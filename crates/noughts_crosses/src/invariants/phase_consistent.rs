//! Phase consistency invariant: the recorded phase matches the board.

use super::Invariant;
use crate::rules::{self, Line};
use crate::{GameState, Phase};

/// Invariant: the phase, the last position and the board agree.
///
/// - `NotStarted` has an empty board and no last position.
/// - Every other phase has a last position pointing at an occupied cell.
/// - `InProgress` has no completed line and a board that is not full.
/// - `Won` records a line that is really filled by its token.
/// - `Draw` has a full board with no completed line.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let any_line = Line::ALL.iter().any(|line| line.owner(board).is_some());
        let last_occupied = game
            .last_position()
            .is_some_and(|pos| !board.cell(pos).is_empty());

        match game.phase() {
            Phase::NotStarted => board.occupied() == 0 && game.last_position().is_none(),
            Phase::InProgress => last_occupied && !any_line && !board.is_full(),
            Phase::Won(win) => last_occupied && win.line().owner(board) == Some(win.token()),
            Phase::Draw => last_occupied && !any_line && rules::is_draw(board, None),
        }
    }

    fn description() -> &'static str {
        "Phase agrees with board contents and last position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Token};

    #[test]
    fn test_new_game_holds() {
        assert!(PhaseConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_draw_holds() {
        let mut game = GameState::new();
        // X O X / X O O / O X X
        for (row, column) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            game.apply_move(row, column).unwrap();
        }
        assert!(game.is_draw());
        assert!(PhaseConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stray_token_before_start_violates() {
        let mut game = GameState::new();
        game.board_mut()
            .place_at(Position::at(1, 1), Token::Cross)
            .unwrap();
        assert!(!PhaseConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_completed_line_in_progress_violates() {
        let mut game = GameState::new();
        game.apply_move(0, 0).unwrap();
        game.apply_move(2, 2).unwrap();
        for column in 1..3 {
            game.board_mut()
                .place_at(Position::at(0, column), Token::Cross)
                .unwrap();
        }
        assert!(!PhaseConsistentInvariant::holds(&game));
    }
}
