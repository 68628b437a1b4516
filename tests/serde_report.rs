#![cfg(feature = "serde")]

use chess_rules::board::{check_report, Board, CheckReport, Coord};
use chess_rules::game::TurnController;

#[test]
fn check_report_serializes_with_lowercase_names() {
    let board = Board::from_fen("4r2k/8/8/8/8/8/8/4K3");
    let report = check_report(&board).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["white"]["in_check"], true);
    assert_eq!(json["white"]["attackers"][0]["kind"], "rook");
    assert_eq!(json["white"]["attackers"][0]["color"], "black");
    assert_eq!(json["white"]["attackers"][0]["coord"]["file"], 5);
    assert_eq!(json["white"]["attackers"][0]["coord"]["rank"], 8);

    let back: CheckReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn out_of_range_coord_is_rejected() {
    assert!(serde_json::from_str::<Coord>(r#"{"file":9,"rank":1}"#).is_err());
    assert!(serde_json::from_str::<Coord>(r#"{"file":1,"rank":1}"#).is_ok());
}

#[test]
fn move_record_serializes() {
    let mut game = TurnController::new();
    game.select_origin("g1".parse().unwrap()).unwrap();
    let outcome = game.select_destination("f3".parse().unwrap()).unwrap();
    let json = serde_json::to_string(&outcome.record).unwrap();
    assert!(json.contains(r#""kind":"knight""#));
    assert!(json.contains(r#""captured":null"#));
}
