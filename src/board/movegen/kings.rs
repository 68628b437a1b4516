use super::super::step_tables::KING_TARGETS;
use super::super::{is_destination_valid, Board, Color, Coord, MoveList};

impl Board {
    /// The eight neighbouring squares, minus friendly-occupied ones.
    /// No castling, and no check against stepping into attack.
    pub(crate) fn generate_king_moves(&self, color: Color, from: Coord) -> MoveList {
        let mut moves = MoveList::new();
        for &to in &KING_TARGETS[from.index()] {
            if is_destination_valid(color, self.occupant_at(to)) {
                moves.push(to);
            }
        }
        moves
    }
}
