//! Core chess types.
//!
//! - `Color`, `PieceKind` and `Piece`
//! - `Coord` - a checked (file, rank) board square
//! - `Direction` - the eight compass offsets
//! - `MoveList` - destination squares for one piece

mod direction;
mod moves;
mod piece;
mod square;

pub use direction::Direction;
pub use moves::{MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::{next_file, previous_file, Coord};
