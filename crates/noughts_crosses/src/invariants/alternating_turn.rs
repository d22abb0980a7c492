//! Alternating turn invariant: the turn follows from the move count.

use super::Invariant;
use crate::GameState;

/// Invariant: players alternate turns.
///
/// While the game is live, the side to move is the starting token after an
/// even number of moves and its opponent after an odd number. Once over, the
/// turn stays on the token that made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let starting = game.starting_token();
        let moves = game.board().occupied();
        let even = moves % 2 == 0;

        let expected = match (game.is_over(), even) {
            (false, true) | (true, false) => starting,
            (false, false) | (true, true) => starting.opponent(),
        };

        game.current_turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting from the starting token"
    }
}
