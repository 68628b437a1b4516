//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::board::error::CoordError;

const FILE_LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the board, addressed by file (1 = a) and rank (1-8).
///
/// Both components are always in `1..=8`; the only ways to build a `Coord`
/// are the checked constructors, so an out-of-range value never exists.
/// Ordering is rank-major (a1 < b1 < ... < h1 < a2 < ... < h8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoordRepr", into = "CoordRepr"))]
pub struct Coord {
    rank: u8,
    file: u8,
}

impl Coord {
    /// Create a coordinate, rejecting values outside `1..=8`.
    pub fn new(file: u8, rank: u8) -> Result<Self, CoordError> {
        if !(1..=8).contains(&file) {
            return Err(CoordError::FileOutOfBounds { file: file.into() });
        }
        if !(1..=8).contains(&rank) {
            return Err(CoordError::RankOutOfBounds { rank: rank.into() });
        }
        Ok(Coord { rank, file })
    }

    /// Like [`Coord::new`] but takes signed components and returns `None`
    /// when either falls off the board. Used by offset arithmetic.
    #[inline]
    #[must_use]
    pub fn checked(file: i32, rank: i32) -> Option<Self> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Coord {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// File, 1 (a) through 8 (h)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank, 1 through 8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// File letter, 'a' through 'h'
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        FILE_LETTERS[(self.file - 1) as usize]
    }

    /// Rank digit, '1' through '8'
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'0' + self.rank) as char
    }

    /// Dense index 0..64 (a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Inverse of [`Coord::index`]; `idx` must be below 64.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64, "square index out of range");
        Coord {
            rank: (idx / 8) as u8 + 1,
            file: (idx % 8) as u8 + 1,
        }
    }

    /// Shift by a (rank, file) delta; `None` if the result leaves the board.
    #[inline]
    #[must_use]
    pub fn shifted(self, rank_delta: i32, file_delta: i32) -> Option<Self> {
        Coord::checked(
            i32::from(self.file) + file_delta,
            i32::from(self.rank) + rank_delta,
        )
    }

    /// Step `distance` squares along `direction`.
    #[inline]
    #[must_use]
    pub fn step(self, direction: Direction, distance: i32) -> Option<Self> {
        let (dr, df) = direction.offset();
        self.shifted(dr * distance, df * distance)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = CoordError;

    /// `(file, rank)`, both 1-based.
    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::new(file, rank)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match f.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a' + 1,
            _ => return Err(invalid()),
        };
        let rank = match r {
            '1'..='8' => r as u8 - b'0',
            _ => return Err(invalid()),
        };

        Coord::new(file, rank)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CoordRepr {
    file: u8,
    rank: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordRepr> for Coord {
    type Error = CoordError;

    fn try_from(repr: CoordRepr) -> Result<Self, Self::Error> {
        Coord::new(repr.file, repr.rank)
    }
}

#[cfg(feature = "serde")]
impl From<Coord> for CoordRepr {
    fn from(coord: Coord) -> Self {
        CoordRepr {
            file: coord.file,
            rank: coord.rank,
        }
    }
}

fn file_position(file: &str) -> Option<usize> {
    let mut chars = file.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => FILE_LETTERS.iter().position(|&l| l == c),
        _ => None,
    }
}

/// The file letter to the right of `file` ("a" -> 'b'), or `None` on the
/// h-file or for anything that is not a single file letter.
#[must_use]
pub fn next_file(file: &str) -> Option<char> {
    file_position(file).and_then(|i| FILE_LETTERS.get(i + 1).copied())
}

/// The file letter to the left of `file` ("h" -> 'g'), or `None` on the
/// a-file or for anything that is not a single file letter.
#[must_use]
pub fn previous_file(file: &str) -> Option<char> {
    file_position(file)
        .and_then(|i| i.checked_sub(1))
        .map(|i| FILE_LETTERS[i])
}
