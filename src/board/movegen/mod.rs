//! Pseudo-legal destination generation.
//!
//! Destinations obey each piece's movement and the occupancy rules (never
//! onto a friendly piece, sliders stop at the first blocker) but are *not*
//! filtered for leaving the mover's own king attacked. A pinned piece may
//! therefore be shown moves that expose its king, and a king may step onto
//! an attacked square. This matches the turn protocol, which only reports
//! check after the fact.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::SliderType;

use super::{Board, Color, Coord, MoveList, PieceKind};

/// Every square a `color` `kind` standing on `origin` may move to.
///
/// Pure function of its arguments: whose turn it is and what actually
/// stands on `origin` are not consulted.
#[must_use]
pub fn valid_moves(color: Color, kind: PieceKind, board: &Board, origin: Coord) -> MoveList {
    board.generate_piece_moves(color, kind, origin)
}

impl Board {
    pub(crate) fn generate_piece_moves(
        &self,
        color: Color,
        kind: PieceKind,
        from: Coord,
    ) -> MoveList {
        match kind {
            PieceKind::Pawn => self.generate_pawn_moves(color, from),
            PieceKind::Knight => self.generate_knight_moves(color, from),
            PieceKind::King => self.generate_king_moves(color, from),
            PieceKind::Rook => self.generate_slider_moves(color, from, SliderType::Rook),
            PieceKind::Bishop => self.generate_slider_moves(color, from, SliderType::Bishop),
            PieceKind::Queen => self.generate_slider_moves(color, from, SliderType::Queen),
        }
    }

    /// Destinations for whatever stands on `origin`; empty if nothing does.
    #[must_use]
    pub fn moves_from(&self, origin: Coord) -> MoveList {
        self.occupant_at(origin)
            .map(|p| self.generate_piece_moves(p.color, p.kind, origin))
            .unwrap_or_default()
    }

    /// Total destinations over every piece of `color`.
    #[must_use]
    pub fn mobility(&self, color: Color) -> usize {
        self.pieces_of(color)
            .map(|(c, p)| self.generate_piece_moves(color, p.kind, c).len())
            .sum()
    }
}
