//! Edge case tests for special chess positions and moves.

use crate::board::{Board, Color, Piece, Square};

#[test]
fn test_stalemate_position() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
    assert!(board.generate_moves().is_empty());
}

#[test]
fn test_checkmate_position() {
    // Back-rank mate.
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1");
    board.make_move_coord("e1e8").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_moves();

    let knight_promo = moves.iter().find(|m| m.promotion() == Some(Piece::Knight));
    assert!(
        knight_promo.is_some(),
        "Knight promotion should be available"
    );

    let mv = knight_promo.unwrap();
    board.make_move(*mv);
    assert_eq!(board.piece_on(Square(7, 0)), Some(Piece::Knight));
}

#[test]
fn test_underpromotion_to_rook() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_moves();

    let rook_promo = moves.iter().find(|m| m.promotion() == Some(Piece::Rook));
    assert!(rook_promo.is_some(), "Rook promotion should be available");
}

#[test]
fn test_underpromotion_to_bishop() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_moves();

    let bishop_promo = moves.iter().find(|m| m.promotion() == Some(Piece::Bishop));
    assert!(
        bishop_promo.is_some(),
        "Bishop promotion should be available"
    );
}

#[test]
fn test_four_promotion_moves_per_push() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_promotion())
        .count();
    assert_eq!(promotions, 4);
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let moves = board.generate_moves();

    let ep_move = moves.iter().find(|m| m.is_en_passant());
    assert!(ep_move.is_some(), "En passant should be available");

    let mv = ep_move.unwrap();
    let info = board.make_move(*mv);

    assert!(
        board.piece_on(Square(4, 3)).is_none(),
        "Captured pawn should be removed"
    );
    assert_eq!(
        board.piece_on(Square(5, 3)),
        Some(Piece::Pawn),
        "Capturing pawn should be on d6"
    );

    board.unmake_move(*mv, info);
    assert_eq!(
        board.piece_on(Square(4, 3)),
        Some(Piece::Pawn),
        "Black pawn should be restored"
    );
    assert_eq!(
        board.piece_on(Square(4, 4)),
        Some(Piece::Pawn),
        "White pawn should be back on e5"
    );
}

#[test]
fn test_castling_blocked_by_check() {
    let mut board = Board::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    let moves = board.generate_moves();

    let castling_move = moves.iter().find(|m| m.is_castling());
    assert!(
        castling_move.is_none(),
        "Castling should not be available when in check"
    );
}

#[test]
fn test_castling_through_attacked_square_forbidden() {
    // Black rook on f8 covers f1: white may not castle kingside, but
    // queenside is still available.
    let mut board = Board::from_fen("r4rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = board.generate_moves();

    assert!(!moves.iter().any(|m| m.is_castle_kingside()));
    assert!(moves.iter().any(|m| m.is_castle_queenside()));
}

#[test]
fn test_castling_requires_empty_path() {
    // Bishops on f1 and b8-side squares block both castles.
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R2QKB1R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.iter().any(|m| m.is_castling()));
}

#[test]
fn test_double_check_only_king_can_move() {
    let mut board = Board::from_fen("4k3/8/8/1b6/8/8/3r4/3K4 w - - 0 1");
    let moves = board.generate_moves();

    assert!(!moves.is_empty());
    for mv in moves.iter() {
        assert_eq!(
            mv.from(),
            Square(0, 3),
            "Only king should be able to move in double check"
        );
    }
}

#[test]
fn test_pinned_piece_cannot_expose_king() {
    // The e-file knight is pinned by the black rook.
    let mut board = Board::from_fen("1k2r3/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let moves = board.generate_moves();
    assert!(
        !moves.iter().any(|m| m.from() == Square(1, 4)),
        "Pinned knight must not move"
    );
}

#[test]
fn test_en_passant_discovered_check_is_illegal() {
    // Capturing en passant would open the fourth rank to the b4 rook.
    let mut board = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    board.make_move_coord("e2e4").unwrap();
    let moves = board.generate_moves();
    assert!(
        !moves.iter().any(|m| m.is_en_passant()),
        "En passant exposing the king must be filtered out"
    );
}

#[test]
fn test_check_detection() {
    let board = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}
