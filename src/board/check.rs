//! Check detection.
//!
//! Built directly on move generation: a king is in check when some enemy
//! piece's pseudo-legal destinations include the king's square. Every query
//! rescans the whole board; with at most 32 pieces there is nothing worth
//! caching.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::CheckError;
use super::{Board, Color, Coord, PieceKind};

/// An enemy piece currently attacking a king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThreateningPiece {
    pub color: Color,
    pub kind: PieceKind,
    pub coord: Coord,
}

/// Check status of one king.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckStatus {
    pub color: Color,
    pub in_check: bool,
    /// Attackers in board order (a1 first).
    pub attackers: Vec<ThreateningPiece>,
}

/// Check status of both kings, computed after every move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckReport {
    pub white: CheckStatus,
    pub black: CheckStatus,
}

impl CheckReport {
    /// True if either king is attacked.
    #[must_use]
    pub fn any_in_check(&self) -> bool {
        self.white.in_check || self.black.in_check
    }

    #[must_use]
    pub fn status(&self, color: Color) -> &CheckStatus {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// Whether the `color` king is attacked, and by which pieces.
///
/// Every opponent piece is considered, the opposing king included.
pub fn is_king_in_check(board: &Board, color: Color) -> Result<CheckStatus, CheckError> {
    let Some(king) = board.find_king(color) else {
        log::error!("no {color} king on board {}", board.to_fen());
        return Err(CheckError::KingNotFound { color });
    };

    let enemy = color.opponent();
    let attackers: Vec<ThreateningPiece> = board
        .pieces_of(enemy)
        .filter(|&(coord, piece)| {
            board
                .generate_piece_moves(enemy, piece.kind, coord)
                .contains(king)
        })
        .map(|(coord, piece)| ThreateningPiece {
            color: piece.color,
            kind: piece.kind,
            coord,
        })
        .collect();

    Ok(CheckStatus {
        color,
        in_check: !attackers.is_empty(),
        attackers,
    })
}

/// Check status for both colors.
pub fn check_report(board: &Board) -> Result<CheckReport, CheckError> {
    Ok(CheckReport {
        white: is_king_in_check(board, Color::White)?,
        black: is_king_in_check(board, Color::Black)?,
    })
}

impl Board {
    /// Shorthand for [`is_king_in_check`] that only answers yes or no.
    pub fn in_check(&self, color: Color) -> Result<bool, CheckError> {
        is_king_in_check(self, color).map(|s| s.in_check)
    }
}
