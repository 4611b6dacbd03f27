//! Chess board representation and game logic.
//!
//! The board is a 64-square array of optional pieces with side to move,
//! castling rights, en passant target and move clocks. Move generation
//! uses per-square offset tables and ray walks; legality is decided by
//! applying each candidate move and testing the mover's king for attack.
//!
//! # Example
//! ```
//! use chess_movegen::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use types::{
    castle_bit, file_to_index, rank_to_index, ALL_CASTLING_RIGHTS, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q, PROMOTION_PIECES,
};
