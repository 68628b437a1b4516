//! Error types for board and rules operations.

use std::fmt;

use super::{Color, Coord, Piece};

/// Error type for coordinate construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Rank out of bounds (must be 1-8)
    RankOutOfBounds { rank: i32 },
    /// File out of bounds (must be 1-8)
    FileOutOfBounds { file: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            CoordError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 1-8)")
            }
            CoordError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for FEN piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement field missing entirely
    Empty,
    /// Placement must have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank describes more or fewer than 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Two empty-square counts written back to back, as in `44`
    AdjacentEmptyRuns { rank: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN piece placement is empty"),
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::AdjacentEmptyRuns { rank } => {
                write!(f, "Rank {rank} has adjacent empty-square counts")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a selection was rejected by the turn controller.
///
/// None of these are fatal: the controller is back in its
/// awaiting-selection state and the board is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Origin square is empty
    NoPieceAtOrigin { coord: Coord },
    /// Origin holds a piece of the player who is not on move
    WrongColorSelection { coord: Coord, active: Color },
    /// The selected piece has nowhere to go
    NoLegalMoves { coord: Coord, piece: Piece },
    /// Destination is not among the highlighted squares
    IllegalDestination { origin: Coord, destination: Coord },
    /// A destination arrived with no origin selected
    NoSelection { destination: Coord },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoPieceAtOrigin { coord } => {
                write!(f, "No piece at {coord}")
            }
            SelectionError::WrongColorSelection { coord, active } => {
                write!(f, "Piece at {coord} does not belong to {active}")
            }
            SelectionError::NoLegalMoves { coord, piece } => {
                write!(f, "{piece} at {coord} has no legal moves")
            }
            SelectionError::IllegalDestination {
                origin,
                destination,
            } => {
                write!(f, "Cannot move from {origin} to {destination}")
            }
            SelectionError::NoSelection { destination } => {
                write!(f, "No piece selected for destination {destination}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Error type for check detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckError {
    /// The board has no king of this color. Only reachable from a
    /// malformed setup; the position can no longer be trusted.
    KingNotFound { color: Color },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::KingNotFound { color } => {
                write!(f, "Could not find the {color} king")
            }
        }
    }
}

impl std::error::Error for CheckError {}
