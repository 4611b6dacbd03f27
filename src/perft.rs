//! Perft (performance test) - exhaustive enumeration of the legal-move tree
//! to a fixed depth.
//!
//! `perft` counts leaf positions; `perft_divide` reports the subtree count
//! contributed by each root move, keyed by coordinate notation. The sum of
//! the divide values always equals the plain perft count at the same depth.
//!
//! The parallel variants split the root moves across worker threads. Each
//! worker owns its own `Board` clone; no position state is shared.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;

use crate::board::{Board, Move};

/// Node count for one depth, with an optional per-root-move breakdown.
#[derive(Clone, Debug)]
pub struct PerftResult {
    pub depth: u32,
    pub nodes: u64,
    pub divide: Option<BTreeMap<String, u64>>,
}

/// Count leaf positions reachable from `board` in exactly `depth` plies.
///
/// Depth 0 counts the position itself as one leaf.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &m in moves.iter() {
        let info = board.make_move(m);
        nodes += perft(board, depth - 1);
        board.unmake_move(m, info);
    }

    nodes
}

/// Per-root-move leaf counts, keyed by coordinate notation.
///
/// The map is ordered by notation, which sorts by from-square then
/// to-square. Returns an empty map for depth 0.
pub fn perft_divide(board: &mut Board, depth: u32) -> BTreeMap<String, u64> {
    let mut results = BTreeMap::new();
    if depth == 0 {
        return results;
    }

    let moves = board.generate_moves();
    for &m in moves.iter() {
        let info = board.make_move(m);
        let nodes = perft(board, depth - 1);
        board.unmake_move(m, info);

        let previous = results.insert(m.to_string(), nodes);
        // Source + destination + promotion fully disambiguates a move, so
        // notation keys never collide; assert rather than assume.
        assert!(previous.is_none(), "duplicate move notation {m}");
    }

    results
}

/// Run `perft` and `perft_divide` together for a depth.
pub fn perft_with_divide(board: &mut Board, depth: u32) -> PerftResult {
    let divide = perft_divide(board, depth);
    let nodes = if depth == 0 {
        1
    } else {
        divide.values().sum()
    };
    PerftResult {
        depth,
        nodes,
        divide: Some(divide),
    }
}

fn worker_count(work_items: usize) -> usize {
    thread::available_parallelism()
        .map_or(1, std::num::NonZeroUsize::get)
        .min(work_items.max(1))
}

/// `perft_divide`, splitting root moves across worker threads.
///
/// Each worker clones the board and claims root moves from a shared
/// counter; results merge into one map under a mutex. Agrees exactly with
/// the sequential version.
pub fn perft_divide_parallel(board: &Board, depth: u32) -> BTreeMap<String, u64> {
    if depth == 0 {
        return BTreeMap::new();
    }

    let root_moves: Vec<Move> = board.clone().generate_moves().into_iter().collect();
    let next_move = AtomicUsize::new(0);
    let results = Mutex::new(BTreeMap::new());

    thread::scope(|scope| {
        for _ in 0..worker_count(root_moves.len()) {
            scope.spawn(|| {
                let mut local = board.clone();
                loop {
                    let i = next_move.fetch_add(1, Ordering::Relaxed);
                    let Some(&m) = root_moves.get(i) else {
                        break;
                    };
                    let info = local.make_move(m);
                    let nodes = perft(&mut local, depth - 1);
                    local.unmake_move(m, info);

                    let previous = results.lock().insert(m.to_string(), nodes);
                    assert!(previous.is_none(), "duplicate move notation {m}");
                }
            });
        }
    });

    results.into_inner()
}

/// `perft` with root moves split across worker threads.
pub fn perft_parallel(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    perft_divide_parallel(board, depth).values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_one_leaf() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, 0), 1);

        let mut sparse = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1");
        assert_eq!(perft(&mut sparse, 0), 1);
    }

    #[test]
    fn test_depth_one_equals_legal_move_count() {
        let mut board = Board::new();
        let legal = board.generate_moves().len() as u64;
        assert_eq!(perft(&mut board, 1), legal);
        assert_eq!(legal, 20);
    }

    #[test]
    fn test_divide_depth_one_startpos() {
        let mut board = Board::new();
        let divide = perft_divide(&mut board, 1);
        assert_eq!(divide.len(), 20);
        assert!(divide.values().all(|&nodes| nodes == 1));
        assert_eq!(divide.get("d2d4"), Some(&1));
    }

    #[test]
    fn test_divide_sum_matches_perft() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            "rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP2PPP/RNBQKBNR b KQkq d3 0 2",
        ];
        for fen in fens {
            for depth in 1..=3 {
                let mut board = Board::from_fen(fen);
                let total = perft(&mut board, depth);
                let divide = perft_divide(&mut board, depth);
                let divide_sum: u64 = divide.values().sum();
                assert_eq!(divide_sum, total, "divide sum mismatch for {fen} depth {depth}");
            }
        }
    }

    #[test]
    fn test_divide_keys_are_notation_ordered() {
        let mut board = Board::new();
        let divide = perft_divide(&mut board, 1);
        let keys: Vec<&String> = divide.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_divide_depth_zero_is_empty() {
        let mut board = Board::new();
        assert!(perft_divide(&mut board, 0).is_empty());
    }

    #[test]
    fn test_perft_with_divide_consistent() {
        let mut board = Board::new();
        let result = perft_with_divide(&mut board, 2);
        assert_eq!(result.nodes, 400);
        let divide = result.divide.unwrap();
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.values().sum::<u64>(), 400);
    }

    #[test]
    fn test_parallel_agrees_with_sequential() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        ];
        for fen in fens {
            let board = Board::from_fen(fen);
            let mut sequential = board.clone();
            assert_eq!(perft_parallel(&board, 3), perft(&mut sequential, 3));
            assert_eq!(
                perft_divide_parallel(&board, 2),
                perft_divide(&mut sequential, 2)
            );
        }
    }

    #[test]
    fn test_parallel_does_not_disturb_input() {
        let board = Board::new();
        let before = board.clone();
        perft_parallel(&board, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_promotion_notation_in_divide() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let divide = perft_divide(&mut board, 1);
        assert!(divide.contains_key("a7a8q"));
        assert!(divide.contains_key("a7a8r"));
        assert!(divide.contains_key("a7a8b"));
        assert!(divide.contains_key("a7a8n"));
    }
}
