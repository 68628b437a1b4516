use super::super::{Board, Color, Coord, Direction, MoveList};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [Direction] {
        match self {
            SliderType::Bishop => &Direction::DIAGONAL,
            SliderType::Rook => &Direction::ORTHOGONAL,
            SliderType::Queen => &Direction::ALL,
        }
    }
}

impl Board {
    /// Walk outward along each direction: empty squares are kept, the first
    /// occupied square ends the ray and is kept only if it holds an enemy.
    pub(crate) fn generate_slider_moves(
        &self,
        color: Color,
        from: Coord,
        slider: SliderType,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &dir in slider.directions() {
            let mut cur = from;
            while let Some(next) = cur.step(dir, 1) {
                match self.occupant_at(next) {
                    None => moves.push(next),
                    Some(p) => {
                        if p.color != color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                cur = next;
            }
        }
        moves
    }
}
