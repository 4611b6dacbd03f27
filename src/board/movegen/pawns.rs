use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Board, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir = color.pawn_direction();
        let start_rank = color.pawn_start_rank();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                if forward.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new_promotion(from, forward, promo));
                    }
                } else {
                    moves.push(Move::quiet(from, forward));
                    if from.rank() == start_rank {
                        if let Some(double) = from.offset(2 * dir, 0) {
                            if self.is_empty(double) {
                                moves.push(Move::double_pawn_push(from, double));
                            }
                        }
                    }
                }
            }
        }

        for &target in PAWN_ATTACKS[color.index()][from.as_index()].iter() {
            if let Some((target_color, _)) = self.piece_at(target) {
                if target_color != color {
                    if target.rank() == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::new_promotion_capture(from, target, promo));
                        }
                    } else {
                        moves.push(Move::capture(from, target));
                    }
                }
            } else if Some(target) == self.en_passant_target {
                moves.push(Move::en_passant(from, target));
            }
        }
    }
}
