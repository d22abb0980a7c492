//! Tests for the turn and lifecycle state machine.

use noughts_crosses::{
    GameError, GameState, Line, MoveOutcome, Phase, Position, RejectReason, Token,
};

fn play_all(game: &mut GameState, moves: &[(usize, usize)]) -> MoveOutcome {
    let mut last = None;
    for &(row, column) in moves {
        last = Some(game.apply_move(row, column).expect("Valid position"));
    }
    last.expect("At least one move")
}

/// Moves that fill `line` with crosses while noughts play elsewhere.
///
/// Noughts only get two moves before the third cross lands, so they can
/// never complete a line of their own.
fn moves_completing(line: Line) -> Vec<(usize, usize)> {
    let targets = line.positions();
    let mut filler = Position::ALL
        .iter()
        .copied()
        .filter(|pos| !targets.contains(pos));

    let mut moves = Vec::new();
    for (i, target) in targets.iter().enumerate() {
        moves.push((target.row(), target.column()));
        if i < 2 {
            let other = filler.next().expect("Six cells off the line");
            moves.push((other.row(), other.column()));
        }
    }
    moves
}

#[test]
fn test_reset_clears_every_cell() {
    let mut game = GameState::new();
    play_all(&mut game, &[(0, 0), (1, 1), (2, 2), (0, 2)]);
    game.reset();

    for row in 0..3 {
        for column in 0..3 {
            assert_eq!(game.cell_token(row, column), Ok(None));
        }
    }
    assert!(!game.is_over());
    assert!(!game.started());
    assert_eq!(game.current_turn(), Token::Cross);
    assert_eq!(game.last_position(), None);
}

#[test]
fn test_second_move_on_same_cell_is_noop() {
    let mut game = GameState::new();
    game.apply_move(1, 2).unwrap();
    let board = game.board().clone();
    let turn = game.current_turn();

    let outcome = game.apply_move(1, 2).unwrap();
    assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::CellOccupied));
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_turn(), turn);
}

#[test]
fn test_every_line_wins() {
    for line in Line::ALL {
        let mut game = GameState::new();
        let outcome = play_all(&mut game, &moves_completing(line));

        assert!(game.is_over(), "{line} should end the game");
        assert!(matches!(outcome, MoveOutcome::Won { .. }));
        let win = game.winning_line().expect("Winning line recorded");
        assert_eq!(win.positions(), line.positions(), "{line}");
        assert_eq!(win.token(), Token::Cross);
        assert!(!game.is_draw());
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = GameState::new();
    // X O X / X O O / O X X
    let outcome = play_all(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(
        outcome,
        MoveOutcome::Draw {
            position: Position::new(2, 2).unwrap(),
            token: Token::Cross,
        }
    );
    assert!(game.is_over());
    assert!(game.is_draw());
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.phase(), &Phase::Draw);
}

#[test]
fn test_turn_alternates_from_cross() {
    let mut game = GameState::new();
    let mut expected = Token::Cross;
    for (row, column) in [(0, 0), (1, 1), (2, 2), (0, 1), (2, 1)] {
        assert_eq!(game.current_turn(), expected);
        game.apply_move(row, column).unwrap();
        assert_eq!(game.cell_token(row, column), Ok(Some(expected)));
        expected = expected.opponent();
    }
}

#[test]
fn test_turn_alternates_from_nought_when_switched() {
    let mut game = GameState::new();
    assert!(game.switch_starting_player());
    assert_eq!(game.current_turn(), Token::Nought);

    game.apply_move(0, 0).unwrap();
    assert_eq!(game.cell_token(0, 0), Ok(Some(Token::Nought)));
    assert_eq!(game.current_turn(), Token::Cross);
}

#[test]
fn test_switch_rejected_once_started() {
    let mut game = GameState::new();
    game.apply_move(2, 0).unwrap();
    let before = game.clone();

    assert!(!game.switch_starting_player());
    assert_eq!(game, before);
}

#[test]
fn test_top_row_scenario() {
    let mut game = GameState::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Token::Cross));
    let line: Vec<(usize, usize)> = game
        .winning_line()
        .unwrap()
        .positions()
        .iter()
        .map(|pos| (pos.row(), pos.column()))
        .collect();
    assert_eq!(line, vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_move_after_game_over_rejected() {
    let mut game = GameState::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.clone();

    assert_eq!(
        game.apply_move(2, 2),
        Ok(MoveOutcome::Rejected(RejectReason::GameOver))
    );
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_fails_hard() {
    let mut game = GameState::new();
    assert_eq!(
        game.apply_move(3, 3),
        Err(GameError::OutOfRange { row: 3, column: 3 })
    );
    assert_eq!(
        game.cell_token(0, 5),
        Err(GameError::OutOfRange { row: 0, column: 5 })
    );
}
