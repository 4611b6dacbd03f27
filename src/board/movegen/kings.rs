use super::super::attack_tables::{
    KING_TARGETS, KNIGHT_TARGETS, PAWN_ATTACKS, RAYS, BISHOP_DIRS, ROOK_DIRS,
};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        for &to in KING_TARGETS[from.as_index()].iter() {
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some((target_color, _)) if target_color != color => {
                    moves.push(Move::capture(from, to));
                }
                Some(_) => {}
            }
        }

        let back_rank = color.back_rank();
        if from == Square(back_rank, 4) {
            if self.has_castling_right(color, 'K')
                && self.is_empty(Square(back_rank, 5))
                && self.is_empty(Square(back_rank, 6))
                && self.piece_at(Square(back_rank, 7)) == Some((color, Piece::Rook))
            {
                moves.push(Move::castle_kingside(from, Square(back_rank, 6)));
            }
            if self.has_castling_right(color, 'Q')
                && self.is_empty(Square(back_rank, 1))
                && self.is_empty(Square(back_rank, 2))
                && self.is_empty(Square(back_rank, 3))
                && self.piece_at(Square(back_rank, 0)) == Some((color, Piece::Rook))
            {
                moves.push(Move::castle_queenside(from, Square(back_rank, 2)));
            }
        }
    }

    /// The square of the given color's king, if one is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        (0..64)
            .find(|&idx| self.squares[idx] == Some((color, Piece::King)))
            .map(Square::from_index)
    }

    /// Whether any piece of `attacker` has a capture-capable pseudo-legal
    /// move ending on `square`. Computed from raw reach tables; never
    /// recurses into the legality filter.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let idx = square.as_index();

        // An attacker pawn sits on a square from which the defending color's
        // pawn on `square` would capture.
        for &src in PAWN_ATTACKS[attacker.opponent().index()][idx].iter() {
            if self.piece_at(src) == Some((attacker, Piece::Pawn)) {
                return true;
            }
        }

        for &src in KNIGHT_TARGETS[idx].iter() {
            if self.piece_at(src) == Some((attacker, Piece::Knight)) {
                return true;
            }
        }

        for &src in KING_TARGETS[idx].iter() {
            if self.piece_at(src) == Some((attacker, Piece::King)) {
                return true;
            }
        }

        for &dir in &ROOK_DIRS {
            if let Some((color, piece)) = self.first_piece_along(idx, dir) {
                if color == attacker && piece.attacks_straight() {
                    return true;
                }
            }
        }

        for &dir in &BISHOP_DIRS {
            if let Some((color, piece)) = self.first_piece_along(idx, dir) {
                if color == attacker && piece.attacks_diagonally() {
                    return true;
                }
            }
        }

        false
    }

    fn first_piece_along(&self, from_idx: usize, dir: usize) -> Option<(Color, Piece)> {
        RAYS[dir][from_idx].iter().find_map(|&sq| self.piece_at(sq))
    }

    /// Whether the given color's king is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
