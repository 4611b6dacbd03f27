mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Every move obeying per-piece movement rules for the side to move,
    /// before the self-check test. Castle moves are emitted whenever the
    /// right is held, the path is clear and the rook is home; the attacked
    /// squares along the king's path are checked by the legality filter.
    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move();

        for (idx, slot) in self.squares.iter().enumerate() {
            let Some((piece_color, piece)) = *slot else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            let from = Square::from_index(idx);
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => self.generate_slider_moves(from, SliderType::Bishop, &mut moves),
                Piece::Rook => self.generate_slider_moves(from, SliderType::Rook, &mut moves),
                Piece::Queen => self.generate_slider_moves(from, SliderType::Queen, &mut moves),
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }

        moves
    }

    /// All legal moves for the side to move.
    pub fn generate_moves(&mut self) -> MoveList {
        let mover = self.side_to_move();
        let opponent = mover.opponent();
        let pseudo_moves = self.generate_pseudo_moves();
        let mut legal_moves = MoveList::new();

        for &m in pseudo_moves.iter() {
            if m.is_castling() {
                let king_start = m.from();
                let king_mid = Square(king_start.rank(), (king_start.file() + m.to().file()) / 2);

                if self.is_square_attacked(king_start, opponent)
                    || self.is_square_attacked(king_mid, opponent)
                    || self.is_square_attacked(m.to(), opponent)
                {
                    continue;
                }
            }

            if self.is_legal(m) {
                legal_moves.push(m);
            }
        }
        legal_moves
    }

    /// A pseudo-legal move is legal when applying it does not leave the
    /// mover's own king attacked.
    pub(crate) fn is_legal(&mut self, m: Move) -> bool {
        let mover = self.side_to_move();
        let info = self.make_move(m);
        let legal = !self.is_in_check(mover);
        self.unmake_move(m, info);
        legal
    }

    /// The side to move is checkmated: in check with no legal moves.
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move()) && self.generate_moves().is_empty()
    }

    /// The side to move is stalemated: not in check, but has no legal moves.
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move()) && self.generate_moves().is_empty()
    }
}
