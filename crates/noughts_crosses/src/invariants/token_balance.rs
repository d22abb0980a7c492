//! Token balance invariant: the starting token leads by zero or one.

use super::Invariant;
use crate::GameState;

/// Invariant: the starting token has as many or exactly one more token on
/// the board than its opponent.
pub struct TokenBalanceInvariant;

impl Invariant<GameState> for TokenBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let starting = game.starting_token();
        let ahead = game.board().count(starting);
        let behind = game.board().count(starting.opponent());
        ahead == behind || ahead == behind + 1
    }

    fn description() -> &'static str {
        "Starting token leads its opponent by zero or one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Token};

    #[test]
    fn test_holds_with_nought_first() {
        let mut game = GameState::new();
        game.switch_starting_player();
        game.apply_move(0, 0).unwrap();
        assert_eq!(game.board().count(Token::Nought), 1);
        assert!(TokenBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_opponent_ahead_violates() {
        let mut game = GameState::new();
        game.board_mut()
            .place_at(Position::at(2, 2), Token::Nought)
            .unwrap();
        assert!(!TokenBalanceInvariant::holds(&game));
    }
}
