//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(!is_king_in_check(&board, Color::White).unwrap().in_check);
//! ```

pub use super::{
    check_report, is_king_in_check, valid_moves, Board, BoardBuilder, CheckError, CheckReport,
    CheckStatus, Color, Coord, CoordError, MoveList, Piece, PieceKind, SelectionError,
    ThreateningPiece,
};
