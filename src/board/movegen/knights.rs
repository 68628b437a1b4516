use super::super::step_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Coord, MoveList};

impl Board {
    pub(crate) fn generate_knight_moves(&self, color: Color, from: Coord) -> MoveList {
        KNIGHT_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&to| !self.is_occupied_by(to, color))
            .collect()
    }
}
