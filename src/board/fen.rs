use std::str::FromStr;

use super::error::FenError;
use super::{Board, Coord, Piece};

impl Board {
    /// Parse a board from the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read; side to move and
    /// the remaining FEN fields are ignored since turn order is owned by
    /// the turn controller.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - rank_idx;
            let mut file = 0usize;
            let mut after_digit = false;
            for c in rank_str.chars() {
                if matches!(c, '1'..='8') {
                    if after_digit {
                        return Err(FenError::AdjacentEmptyRuns { rank });
                    }
                    file += c as usize - '0' as usize;
                    after_digit = true;
                    continue;
                }
                after_digit = false;
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank,
                        files: file + 1,
                    });
                }
                board.set_piece(Coord::from_index((rank - 1) * 8 + file), piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::WrongFileCount { rank, files: file });
            }
        }

        Ok(board)
    }

    /// Parse a board from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Piece-placement field of the FEN for this board.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let coord = Coord::from_index(rank * 8 + file);
                if let Some(piece) = self.occupant_at(coord) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
