//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1", Color::White, PieceKind::King)
//!     .piece("e8", Color::Black, PieceKind::King)
//!     .piece("a2", Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::error::CoordError;
use super::{Board, Color, Coord, Piece, PieceKind};

/// A fluent builder for `Board` positions.
///
/// Squares are given in algebraic notation; the first bad square is
/// reported by [`BoardBuilder::build`].
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    error: Option<CoordError>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            error: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
            error: None,
        }
    }

    fn parse(&mut self, square: &str) -> Option<Coord> {
        match square.parse::<Coord>() {
            Ok(coord) => Some(coord),
            Err(e) => {
                self.error.get_or_insert(e);
                None
            }
        }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: &str, color: Color, kind: PieceKind) -> Self {
        if let Some(coord) = self.parse(square) {
            self.board.set_piece(coord, Piece::new(color, kind));
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: &str) -> Self {
        if let Some(coord) = self.parse(square) {
            self.board.remove_piece(coord);
        }
        self
    }

    /// Build the board.
    pub fn build(self) -> Result<Board, CoordError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, Board::new());
        assert_eq!(
            built.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_two_kings() {
        let board = BoardBuilder::new()
            .piece("e1", Color::White, PieceKind::King)
            .piece("e8", Color::Black, PieceKind::King)
            .build()
            .unwrap();

        assert!(board.occupant_at("e1".parse().unwrap()).is_some());
        assert!(board.occupant_at("e8".parse().unwrap()).is_some());
        assert!(board.occupant_at("a1".parse().unwrap()).is_none());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear("a1")
            .build()
            .unwrap();

        assert!(board.occupant_at("a1".parse().unwrap()).is_none());
        assert!(board.occupant_at("b1".parse().unwrap()).is_some());
    }

    #[test]
    fn test_bad_square_reported() {
        let result = BoardBuilder::new()
            .piece("z9", Color::White, PieceKind::King)
            .piece("e8", Color::Black, PieceKind::King)
            .build();
        assert!(matches!(result, Err(CoordError::InvalidNotation { .. })));
    }
}
