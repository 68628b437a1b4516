//! Precomputed target squares for the stepping pieces (knights, kings).
//!
//! Each table holds, for every origin square, the in-bounds squares one
//! step away. Occupancy is applied later by the generators.

use once_cell::sync::Lazy;

use super::{Coord, Direction, MoveList};

/// Knight jumps as (rank delta, file delta)
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (1, -2),
    (-1, -2),
];

fn build(offsets: &[(i32, i32)]) -> [MoveList; 64] {
    let mut table = [MoveList::new(); 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let origin = Coord::from_index(idx);
        *slot = offsets
            .iter()
            .filter_map(|&(dr, df)| origin.shifted(dr, df))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[MoveList; 64]> = Lazy::new(|| build(&KNIGHT_OFFSETS));

pub(crate) static KING_TARGETS: Lazy<[MoveList; 64]> = Lazy::new(|| {
    let offsets: Vec<(i32, i32)> = Direction::ALL.iter().map(|d| d.offset()).collect();
    build(&offsets)
});
