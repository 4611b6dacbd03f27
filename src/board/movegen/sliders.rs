use super::super::attack_tables::{BISHOP_DIRS, QUEEN_DIRS, RAYS, ROOK_DIRS};
use super::super::{Board, Move, MoveList, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        let dirs: &[usize] = match slider {
            SliderType::Bishop => &BISHOP_DIRS,
            SliderType::Rook => &ROOK_DIRS,
            SliderType::Queen => &QUEEN_DIRS,
        };

        for &dir in dirs {
            // Walk outward until the board edge or the first piece: stop on
            // a friendly piece, capture an enemy one.
            for &to in RAYS[dir][from.as_index()].iter() {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some((target_color, _)) => {
                        if target_color != color {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
