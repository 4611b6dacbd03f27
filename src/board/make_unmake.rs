use super::{castle_bit, Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    pub(crate) fn has_castling_right(&self, color: Color, side: char) -> bool {
        self.castling_rights & castle_bit(color, side) != 0
    }

    /// Apply a move in place, returning the information needed to undo it.
    ///
    /// The move must come from this position's move generator. Updates
    /// placement (including the rook hop for castling and the removal of
    /// the bypassed pawn for en passant), castling rights, the en passant
    /// target, both clocks and the side to move.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = self.side_to_move();

        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let mut captured_piece_info: Option<(Color, Piece)> = None;

        if m.is_en_passant() {
            // The captured pawn sits beside the capturer, not on the
            // destination square.
            let capture_rank = if color == Color::White {
                m.to().rank() - 1
            } else {
                m.to().rank() + 1
            };
            let capture_sq = Square(capture_rank, m.to().file());
            captured_piece_info = self.piece_at(capture_sq);
            self.remove_piece(capture_sq);
        } else if !m.is_castling() {
            captured_piece_info = self.piece_at(m.to());
            if captured_piece_info.is_some() {
                self.remove_piece(m.to());
            }
        }

        let (_, moving_piece) = self.piece_at(m.from()).expect("make_move: 'from' square empty");
        self.remove_piece(m.from());

        if m.is_castling() {
            self.set_piece(m.to(), color, Piece::King);

            let back_rank = m.to().rank();
            let (rook_from, rook_to) = if m.to().file() == 6 {
                (Square(back_rank, 7), Square(back_rank, 5))
            } else {
                (Square(back_rank, 0), Square(back_rank, 3))
            };
            let (rook_color, rook) = self.piece_at(rook_from).expect("castling without rook");
            self.remove_piece(rook_from);
            self.set_piece(rook_to, rook_color, rook);
        } else if let Some(promoted) = m.promotion() {
            self.set_piece(m.to(), color, promoted);
        } else {
            self.set_piece(m.to(), color, moving_piece);
        }

        self.en_passant_target = None;
        if m.is_double_pawn_push() {
            let ep_rank = usize::midpoint(m.from().rank(), m.to().rank());
            self.en_passant_target = Some(Square(ep_rank, m.from().file()));
        }

        if moving_piece == Piece::Pawn || captured_piece_info.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        // Castling rights are monotone: revoked the instant the king moves,
        // a rook leaves its home square, or a rook is captured on it.
        if moving_piece == Piece::King {
            self.castling_rights &= !(castle_bit(color, 'K') | castle_bit(color, 'Q'));
        } else if moving_piece == Piece::Rook {
            let home_rank = color.back_rank();
            if m.from() == Square(home_rank, 0) {
                self.castling_rights &= !castle_bit(color, 'Q');
            } else if m.from() == Square(home_rank, 7) {
                self.castling_rights &= !castle_bit(color, 'K');
            }
        }

        if let Some((captured_color, Piece::Rook)) = captured_piece_info {
            let home_rank = captured_color.back_rank();
            if m.to() == Square(home_rank, 0) {
                self.castling_rights &= !castle_bit(captured_color, 'Q');
            } else if m.to() == Square(home_rank, 7) {
                self.castling_rights &= !castle_bit(captured_color, 'K');
            }
        }

        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.white_to_move = !self.white_to_move;

        UnmakeInfo {
            captured_piece_info,
            previous_en_passant_target,
            previous_castling_rights,
            previous_halfmove_clock,
            previous_fullmove_number,
        }
    }

    /// Undo a move made with `make_move`, restoring the exact prior state.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        let color = self.side_to_move();

        if m.is_castling() {
            self.remove_piece(m.to());
            self.set_piece(m.from(), color, Piece::King);

            let back_rank = m.to().rank();
            let (rook_home, rook_hopped) = if m.to().file() == 6 {
                (Square(back_rank, 7), Square(back_rank, 5))
            } else {
                (Square(back_rank, 0), Square(back_rank, 3))
            };
            let (rook_color, rook) = self
                .piece_at(rook_hopped)
                .expect("unmake castling: rook missing");
            self.remove_piece(rook_hopped);
            self.set_piece(rook_home, rook_color, rook);
        } else {
            let (_, piece_at_to) = self
                .piece_at(m.to())
                .expect("unmake_move: 'to' square empty");
            self.remove_piece(m.to());

            // A promoted piece goes back in the box; the pawn returns.
            let piece_back = if m.promotion().is_some() {
                Piece::Pawn
            } else {
                piece_at_to
            };
            self.set_piece(m.from(), color, piece_back);

            if m.is_en_passant() {
                let capture_rank = if color == Color::White {
                    m.to().rank() - 1
                } else {
                    m.to().rank() + 1
                };
                if let Some((captured_color, captured_piece)) = info.captured_piece_info {
                    self.set_piece(
                        Square(capture_rank, m.to().file()),
                        captured_color,
                        captured_piece,
                    );
                }
            } else if let Some((captured_color, captured_piece)) = info.captured_piece_info {
                self.set_piece(m.to(), captured_color, captured_piece);
            }
        }
    }

    /// Value-semantics applier: the successor position for a legal move,
    /// leaving `self` untouched.
    #[must_use]
    pub fn apply_move(&self, m: Move) -> Board {
        let mut successor = self.clone();
        successor.make_move(m);
        successor
    }
}
