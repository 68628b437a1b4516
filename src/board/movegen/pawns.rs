use super::super::{Board, Color, Coord, MoveList};

impl Board {
    /// One or two steps forward onto empty squares, plus diagonal captures.
    /// No en passant and no promotion: a pawn on the last rank has nowhere
    /// to go.
    pub(crate) fn generate_pawn_moves(&self, color: Color, from: Coord) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();
        let enemy = color.opponent();

        if let Some(one) = from.shifted(dir, 0) {
            if self.is_empty(one) {
                moves.push(one);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = from.shifted(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.shifted(dir, df) {
                if self.is_occupied_by(target, enemy) {
                    moves.push(target);
                }
            }
        }

        moves
    }
}
