pub mod board;
pub mod cli;
pub mod game;

pub use board::{Board, Color, Coord, Piece, PieceKind};
pub use game::TurnController;
