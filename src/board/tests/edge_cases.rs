//! Edge cases: board edges, captures, and the pseudo-legal limitation.

use std::str::FromStr;

use super::{sq, squares};
use crate::board::{
    is_destination_valid, is_king_in_check, valid_moves, Board, Color, Coord, FenError, Piece,
    PieceKind,
};

#[test]
fn test_pinned_piece_may_expose_king() {
    // white king e1, white rook e2 pinned by black rook e8
    let mut board = Board::from_fen("k3r3/8/8/8/8/8/4R3/4K3");
    let moves = valid_moves(Color::White, PieceKind::Rook, &board, sq("e2"));
    assert!(moves.contains(sq("a2")), "pinned rook still offered sideways moves");

    board.apply_move(sq("e2"), sq("a2"));
    assert!(is_king_in_check(&board, Color::White).unwrap().in_check);
}

#[test]
fn test_king_may_step_into_attack() {
    // black rook on d8 covers the d-file
    let board = Board::from_fen("k2r4/8/8/8/8/8/8/4K3");
    let moves = valid_moves(Color::White, PieceKind::King, &board, sq("e1"));
    assert!(moves.contains(sq("d1")));
    assert!(moves.contains(sq("d2")));
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    let board = Board::from_fen("3P4/8/8/8/8/8/8/3p4");
    assert!(valid_moves(Color::White, PieceKind::Pawn, &board, sq("d8")).is_empty());
    assert!(valid_moves(Color::Black, PieceKind::Pawn, &board, sq("d1")).is_empty());
}

#[test]
fn test_edge_pawn_has_one_capture_side() {
    let board = Board::from_fen("8/8/8/8/8/1p6/P7/8");
    let moves = valid_moves(Color::White, PieceKind::Pawn, &board, sq("a2"));
    assert_eq!(moves.sorted(), squares(&["a3", "a4", "b3"]));
}

#[test]
fn test_corner_pieces() {
    let board = Board::empty();
    assert_eq!(
        valid_moves(Color::White, PieceKind::Knight, &board, sq("h8")).sorted(),
        squares(&["f7", "g6"])
    );
    assert_eq!(
        valid_moves(Color::White, PieceKind::King, &board, sq("a1")).sorted(),
        squares(&["a2", "b1", "b2"])
    );
    assert_eq!(
        valid_moves(Color::White, PieceKind::Bishop, &board, sq("a1")).len(),
        7
    );
}

#[test]
fn test_apply_move_captures() {
    let mut board = Board::new();
    let black_pawn = board.occupant_at(sq("e7"));
    let captured = board.apply_move(sq("d2"), sq("e7"));
    assert_eq!(captured, black_pawn);
    assert_eq!(board.occupant_at(sq("d2")), None);
    assert_eq!(
        board.occupant_at(sq("e7")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(board.piece_count(), 31);
}

#[test]
fn test_apply_move_from_empty_square_is_noop() {
    let mut board = Board::new();
    let before = board.clone();
    assert_eq!(board.apply_move(sq("e4"), sq("e5")), None);
    assert_eq!(board, before);
}

#[test]
fn test_occupancy_queries() {
    let board = Board::new();
    assert!(board.is_occupied_by(sq("a1"), Color::White));
    assert!(!board.is_occupied_by(sq("a1"), Color::Black));
    assert!(!board.is_occupied_by(sq("a4"), Color::White));
    assert_eq!(board.find_king(Color::Black), Some(sq("e8")));
}

#[test]
fn test_is_destination_valid() {
    let black = Some(Piece::new(Color::Black, PieceKind::Queen));
    assert!(is_destination_valid(Color::White, None));
    assert!(is_destination_valid(Color::White, black));
    assert!(!is_destination_valid(Color::Black, black));
}

#[test]
fn test_fen_round_trip_and_errors() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
    assert_eq!(Board::from_fen(fen).to_fen(), fen);
    // trailing fields are ignored
    assert_eq!(Board::from_fen(&format!("{fen} b KQkq - 2 3")).to_fen(), fen);

    assert_eq!(Board::try_from_fen(""), Err(FenError::Empty));
    assert_eq!(
        Board::try_from_fen("8/8/8"),
        Err(FenError::WrongRankCount { found: 3 })
    );
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/7x"),
        Err(FenError::InvalidPiece { char: 'x' })
    );
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/7"),
        Err(FenError::WrongFileCount { rank: 1, files: 7 })
    ));
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/8/8p"),
        Err(FenError::WrongFileCount { rank: 1, .. })
    ));
}

#[test]
fn test_fen_empty_counts_must_be_single_digits_one_to_eight() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/44"),
        Err(FenError::AdjacentEmptyRuns { rank: 1 })
    );
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/08"),
        Err(FenError::InvalidPiece { char: '0' })
    );
    assert_eq!(
        Board::try_from_fen("9/8/8/8/8/8/8/8"),
        Err(FenError::InvalidPiece { char: '9' })
    );
    let board = Board::try_from_fen("8/8/8/8/8/8/8/3k4").unwrap();
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn test_coord_parsing() {
    assert_eq!(Coord::from_str("a1").unwrap(), Coord::new(1, 1).unwrap());
    assert_eq!(Coord::from_str("h8").unwrap(), Coord::new(8, 8).unwrap());
    assert!(Coord::from_str("i1").is_err());
    assert!(Coord::try_from((0, 1)).is_err());
    assert!(Coord::try_from((9, 1)).is_err());
}
