use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        for &to in KNIGHT_TARGETS[from.as_index()].iter() {
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some((target_color, _)) if target_color != color => {
                    moves.push(Move::capture(from, to));
                }
                Some(_) => {}
            }
        }
    }
}
