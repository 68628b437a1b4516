//! Check detection and attacker lists.

use super::sq;
use crate::board::{
    check_report, is_king_in_check, Board, BoardBuilder, CheckError, Color, PieceKind,
    ThreateningPiece,
};

#[test]
fn test_rook_down_open_file() {
    let board = BoardBuilder::new()
        .piece("e1", Color::White, PieceKind::King)
        .piece("e8", Color::Black, PieceKind::Rook)
        .piece("a8", Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let status = is_king_in_check(&board, Color::White).unwrap();
    assert!(status.in_check);
    assert_eq!(
        status.attackers,
        vec![ThreateningPiece {
            color: Color::Black,
            kind: PieceKind::Rook,
            coord: sq("e8"),
        }]
    );
}

#[test]
fn test_blocked_file_is_not_check() {
    let board = Board::from_fen("k3r3/8/8/8/4P3/8/8/4K3");
    let status = is_king_in_check(&board, Color::White).unwrap();
    assert!(!status.in_check);
    assert!(status.attackers.is_empty());
}

#[test]
fn test_starting_position_quiet() {
    let report = check_report(&Board::new()).unwrap();
    assert!(!report.any_in_check());
    assert_eq!(report.white.color, Color::White);
    assert_eq!(report.black.color, Color::Black);
}

#[test]
fn test_double_check_lists_both_attackers() {
    // black king e8; white rook e1 and knight d6
    let board = Board::from_fen("4k3/8/3N4/8/8/8/8/K3R3");
    let status = is_king_in_check(&board, Color::Black).unwrap();
    assert!(status.in_check);
    let kinds: Vec<PieceKind> = status.attackers.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![PieceKind::Rook, PieceKind::Knight]);
    assert!(status.attackers.iter().all(|t| t.color == Color::White));
}

#[test]
fn test_pawn_attacks_only_diagonally() {
    // white king e4, black pawns e5 (blocks, no attack) and f5 (attacks)
    let board = Board::from_fen("k7/8/8/4pp2/4K3/8/8/8");
    let status = is_king_in_check(&board, Color::White).unwrap();
    assert_eq!(status.attackers.len(), 1);
    assert_eq!(status.attackers[0].coord, sq("f5"));
}

#[test]
fn test_adjacent_kings_attack_each_other() {
    let board = Board::from_fen("8/8/8/3k4/3K4/8/8/8");
    let report = check_report(&board).unwrap();
    assert_eq!(report.white.attackers[0].kind, PieceKind::King);
    assert_eq!(report.black.attackers[0].kind, PieceKind::King);
}

#[test]
fn test_missing_king() {
    let board = Board::from_fen("8/8/8/8/8/8/8/4K3");
    assert_eq!(
        is_king_in_check(&board, Color::Black),
        Err(CheckError::KingNotFound {
            color: Color::Black
        })
    );
    assert!(is_king_in_check(&board, Color::White).is_ok());
    assert!(check_report(&board).is_err());
    assert!(board.in_check(Color::Black).is_err());
}
