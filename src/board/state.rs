//! Piece placement.

use std::collections::BTreeMap;

use super::{Color, Coord, Piece, PieceKind};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Sparse piece placement: a square is empty exactly when it has no entry.
///
/// `Board` knows nothing about legality. It answers who stands where and
/// moves pieces when told to; the turn controller decides when that is
/// allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: BTreeMap<Coord, Piece>,
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (i, &kind) in BACK_RANK.iter().enumerate() {
            let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
            let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
            board.set_piece(Coord::from_index(i), Piece::new(Color::White, kind));
            board.set_piece(Coord::from_index(8 + i), white_pawn);
            board.set_piece(Coord::from_index(48 + i), black_pawn);
            board.set_piece(Coord::from_index(56 + i), Piece::new(Color::Black, kind));
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: BTreeMap::new(),
        }
    }

    /// The piece on `coord`, if any.
    #[inline]
    #[must_use]
    pub fn occupant_at(&self, coord: Coord) -> Option<Piece> {
        self.squares.get(&coord).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.squares.contains_key(&coord)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        !self.is_occupied(coord)
    }

    /// True iff `coord` holds a piece of `color`.
    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, coord: Coord, color: Color) -> bool {
        self.occupant_at(coord).is_some_and(|p| p.color == color)
    }

    /// Move whatever stands on `origin` to `destination`.
    ///
    /// Whatever stood on `destination` is discarded and returned (a capture).
    /// No legality is checked. An empty `origin` leaves the board unchanged.
    pub fn apply_move(&mut self, origin: Coord, destination: Coord) -> Option<Piece> {
        let piece = self.squares.remove(&origin)?;
        self.squares.insert(destination, piece)
    }

    /// Place `piece` on `coord`, replacing any occupant.
    pub fn set_piece(&mut self, coord: Coord, piece: Piece) -> Option<Piece> {
        self.squares.insert(coord, piece)
    }

    /// Remove and return the occupant of `coord`.
    pub fn remove_piece(&mut self, coord: Coord) -> Option<Piece> {
        self.squares.remove(&coord)
    }

    /// Occupied squares in board order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares.iter().map(|(&c, &p)| (c, p))
    }

    /// Occupied squares of one color in board order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }

    /// First square holding the king of `color`.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(c, _)| c)
    }
}

/// True if a piece of `mover` may land on a square whose occupant is
/// `occupant`: the square is empty or holds an enemy piece.
#[inline]
#[must_use]
pub fn is_destination_valid(mover: Color, occupant: Option<Piece>) -> bool {
    occupant.map_or(true, |p| p.color != mover)
}
