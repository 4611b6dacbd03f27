use once_cell::sync::Lazy;

use super::types::{Color, Square};

pub(crate) const DIR_N: usize = 0;
pub(crate) const DIR_S: usize = 1;
pub(crate) const DIR_E: usize = 2;
pub(crate) const DIR_W: usize = 3;
pub(crate) const DIR_NE: usize = 4;
pub(crate) const DIR_NW: usize = 5;
pub(crate) const DIR_SE: usize = 6;
pub(crate) const DIR_SW: usize = 7;

pub(crate) const ROOK_DIRS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
pub(crate) const BISHOP_DIRS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];
pub(crate) const QUEEN_DIRS: [usize; 8] =
    [DIR_N, DIR_S, DIR_E, DIR_W, DIR_NE, DIR_NW, DIR_SE, DIR_SW];

const DIR_DELTAS: [(isize, isize); 8] = [
    (1, 0),   // N
    (-1, 0),  // S
    (0, 1),   // E
    (0, -1),  // W
    (1, 1),   // NE
    (1, -1),  // NW
    (-1, 1),  // SE
    (-1, -1), // SW
];

fn leaper_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

/// Squares a knight reaches from each square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    leaper_targets(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

/// Squares a king reaches from each square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&DIR_DELTAS));

/// Squares a pawn of each color attacks from each square. `[color][from]`
pub(crate) static PAWN_ATTACKS: Lazy<[[Vec<Square>; 64]; 2]> = Lazy::new(|| {
    [Color::White, Color::Black].map(|color| {
        let dir = color.pawn_direction();
        std::array::from_fn(|idx| {
            let from = Square::from_index(idx);
            [-1, 1]
                .iter()
                .filter_map(|&df| from.offset(dir, df))
                .collect()
        })
    })
});

/// Squares along each ray from each square, ordered walking outward.
/// `[direction][from]`
pub(crate) static RAYS: Lazy<[[Vec<Square>; 64]; 8]> = Lazy::new(|| {
    DIR_DELTAS.map(|(dr, df)| {
        std::array::from_fn(|idx| {
            let mut ray = Vec::new();
            let mut sq = Square::from_index(idx);
            while let Some(next) = sq.offset(dr, df) {
                ray.push(next);
                sq = next;
            }
            ray
        })
    })
});
