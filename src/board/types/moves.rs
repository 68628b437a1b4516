//! Destination lists produced by move generation.

use std::fmt;
use std::ops::Index;

use super::square::Coord;

/// Upper bound on destinations from one square. A queen in the centre of an
/// empty board reaches 27.
pub(crate) const MAX_DESTINATIONS: usize = 32;

const EMPTY_COORD: Coord = Coord::from_index(0);

/// Fixed-capacity list of destination squares for a single piece.
///
/// Keeps insertion order: generators push direction by direction, so a
/// slide's squares appear nearest first.
#[derive(Clone, Copy)]
pub struct MoveList {
    coords: [Coord; MAX_DESTINATIONS],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            coords: [EMPTY_COORD; MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, coord: Coord) {
        debug_assert!(self.len < MAX_DESTINATIONS, "MoveList overflow");
        if self.len < MAX_DESTINATIONS {
            self.coords[self.len] = coord;
            self.len += 1;
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.as_slice().contains(&coord)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.as_slice().iter()
    }

    /// Copy out the destinations in board order (a1 first).
    #[must_use]
    pub fn sorted(&self) -> Vec<Coord> {
        let mut v = self.as_slice().to_vec();
        v.sort_unstable();
        v
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{coord}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let coord = self.list.coords[self.idx];
            self.idx += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Coord;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Coord;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.coords[idx]
    }
}

impl FromIterator<Coord> for MoveList {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for coord in iter {
            list.push(coord);
        }
        list
    }
}
