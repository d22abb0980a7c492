//! Tests for the host-facing session surface.

use noughts_crosses::{Command, GameError, Position, Session, Snapshot, Token};

#[test]
fn test_session_lifecycle() {
    let mut session = Session::default();
    assert_eq!(session.current_turn(), Token::Cross);
    assert!(!session.is_over());

    let snapshot = session.on_cell_activated(1, 1).unwrap();
    assert!(*snapshot.started());
    assert_eq!(snapshot.turn(), &Token::Nought);
    assert_eq!(session.cell_token(1, 1), Ok(Some(Token::Cross)));

    let snapshot = session.on_reset_requested();
    assert!(!*snapshot.started());
    assert_eq!(snapshot.turn(), &Token::Cross);
    assert_eq!(session.cell_token(1, 1), Ok(None));
}

#[test]
fn test_draw_scenario() {
    let mut session = Session::default();
    let mut snapshot = None;
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
        snapshot = Some(session.on_cell_activated(row, column).unwrap());
    }
    let snapshot = snapshot.unwrap();

    assert!(*snapshot.is_over());
    assert!(*snapshot.is_draw());
    assert_eq!(snapshot.winner(), &None);
    assert_eq!(snapshot.winning_line(), &None);
    assert!(session.is_draw());
    assert_eq!(session.winning_line(), None);
}

#[test]
fn test_toggle_before_and_after_start() {
    let mut session = Session::default();
    assert_eq!(session.on_starting_player_toggle_requested(), Token::Nought);
    assert_eq!(session.on_starting_player_toggle_requested(), Token::Cross);
    assert_eq!(session.on_starting_player_toggle_requested(), Token::Nought);

    session.on_cell_activated(0, 0).unwrap();
    assert_eq!(session.cell_token(0, 0), Ok(Some(Token::Nought)));
    assert_eq!(session.on_starting_player_toggle_requested(), Token::Cross);
    assert_eq!(session.current_turn(), Token::Cross);
}

#[test]
fn test_out_of_range_activation_fails() {
    let mut session = Session::default();
    assert_eq!(
        session.on_cell_activated(4, 0),
        Err(GameError::OutOfRange { row: 4, column: 0 })
    );
}

#[test]
fn test_commands_drive_a_win() {
    let mut session = Session::default();
    let mut last = None;
    for index in [4, 0, 2, 1, 6] {
        let pos = Position::from_index(index).unwrap();
        last = Some(session.handle(Command::Activate(pos)).unwrap());
    }
    let snapshot = last.unwrap();

    assert_eq!(snapshot.winner(), &Some(Token::Cross));
    let line: Vec<usize> = snapshot
        .winning_line()
        .unwrap()
        .iter()
        .map(|pos| pos.to_index())
        .collect();
    assert_eq!(line, vec![2, 4, 6]);
}

#[test]
fn test_snapshot_serializes() {
    let mut session = Session::default();
    session.on_cell_activated(0, 1).unwrap();

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["turn"], "Nought");
    assert_eq!(json["started"], true);
    assert_eq!(json["is_over"], false);
    assert_eq!(json["cells"][0][1], "Cross");
    assert!(json["cells"][1][1].is_null());

    let back: Snapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, session.snapshot());
}

#[test]
fn test_out_of_range_command_rejected_on_deserialize() {
    let err = serde_json::from_str::<Command>(r#"{"Activate":{"row":7,"column":0}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");

    let command: Command =
        serde_json::from_str(r#"{"Activate":{"row":2,"column":0}}"#).unwrap();
    assert_eq!(command, Command::Activate(Position::new(2, 0).unwrap()));

    let mut session = Session::default();
    let snapshot = session.handle(command).unwrap();
    assert_eq!(
        snapshot.token_at(Position::new(2, 0).unwrap()),
        Some(Token::Cross)
    );
}

#[test]
fn test_snapshot_with_bad_winning_line_rejected() {
    let mut session = Session::default();
    for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.on_cell_activated(row, column).unwrap();
    }
    let mut json = serde_json::to_value(session.snapshot()).unwrap();
    json["winning_line"][2]["column"] = 9.into();

    assert!(serde_json::from_value::<Snapshot>(json).is_err());
}
