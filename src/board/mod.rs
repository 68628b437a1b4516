//! Board representation and movement rules.
//!
//! A sparse `Board` of pieces, per-piece pseudo-legal destination
//! generation and check detection built on top of it.
//!
//! # Example
//! ```
//! use chess_rules::board::{valid_moves, Board, Color, PieceKind};
//!
//! let board = Board::new();
//! let b1 = "b1".parse().unwrap();
//! let moves = valid_moves(Color::White, PieceKind::Knight, &board, b1);
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod step_tables;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use check::{check_report, is_king_in_check, CheckReport, CheckStatus, ThreateningPiece};
pub use error::{CheckError, CoordError, FenError, SelectionError};
pub use movegen::valid_moves;
pub use state::{is_destination_valid, Board};
pub use types::{
    next_file, previous_file, Color, Coord, Direction, MoveList, MoveListIntoIter, Piece,
    PieceKind,
};
