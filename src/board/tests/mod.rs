//! Board module tests.
//!
//! - `movegen.rs` - destination sets per piece kind
//! - `check.rs` - check detection and attacker lists
//! - `edge_cases.rs` - edges, corners and the pseudo-legal limitation
//! - `proptest.rs` - property-based tests

mod check;
mod edge_cases;

use crate::board::Coord;

pub(super) fn sq(s: &str) -> Coord {
    s.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> Vec<Coord> {
    let mut v: Vec<Coord> = list.iter().map(|s| sq(s)).collect();
    v.sort_unstable();
    v
}
