//! Edge case tests for special chess positions and moves.

use super::sq;
use crate::board::{Board, Color, Move, MoveKind, Piece};

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::new();
    assert!(board.possible_moves(sq("e4")).is_empty());
    assert!(Board::empty().pseudo_legal_moves(Color::White).is_empty());
}

#[test]
fn test_start_position_move_counts() {
    let board = Board::new();
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 20);
    assert_eq!(board.pseudo_legal_moves(Color::Black).len(), 20);
    assert_eq!(board.legal_moves(Color::White).len(), 20);
}

#[test]
fn test_promotion_push_gives_four_moves() {
    let board = Board::try_from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = board.possible_moves(sq("b7"));
    assert_eq!(moves.len(), 4);
    for mv in &moves {
        assert_eq!(mv.to, sq("b8"));
        assert!(matches!(mv.kind, MoveKind::Promotion(_)));
    }
}

#[test]
fn test_promotion_with_capture_gives_eight_moves() {
    let board = Board::try_from_fen("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = board.possible_moves(sq("b7"));
    assert_eq!(moves.len(), 8);
    assert_eq!(moves.iter().filter(|m| m.to == sq("a8")).count(), 4);
    assert!(moves.iter().all(|m| m.promotion_piece().is_some()));
}

#[test]
fn test_blocked_promotion_has_only_capture() {
    let board = Board::try_from_fen("nn2k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = board.possible_moves(sq("b7"));
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.to == sq("a8")));
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let knight = board
        .possible_moves(sq("a7"))
        .iter()
        .copied()
        .find(|m| m.promotion_piece() == Some(Piece::Knight))
        .unwrap();
    board.apply_move(&knight);
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
}

#[test]
fn test_en_passant_needs_target() {
    let without = Board::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(without
        .possible_moves(sq("e5"))
        .iter()
        .all(|m| m.kind != MoveKind::EnPassantCapture));

    let with = Board::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep = Move::en_passant(Color::White, sq("e5"), sq("d6"));
    assert!(with.possible_moves(sq("e5")).contains(&ep));
}

#[test]
fn test_en_passant_needs_enemy_pawn_beside() {
    // target set but the skipped pawn is gone
    let board = Board::try_from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert!(board
        .possible_moves(sq("e5"))
        .iter()
        .all(|m| m.to != sq("d6")));
}

#[test]
fn test_castling_onto_square_next_to_enemy_king() {
    // generated, since kings do not count as attackers, but not legal
    let board = Board::try_from_fen("8/8/8/8/8/8/6k1/R3K2R w KQ - 0 1").unwrap();
    let kingside = Move::castle_kingside(Color::White);
    let queenside = Move::castle_queenside(Color::White);
    assert!(board.possible_moves(sq("e1")).contains(&kingside));
    let legal = board.legal_moves(Color::White);
    assert!(!legal.contains(&kingside));
    assert!(legal.contains(&queenside));
}

#[test]
fn test_stalemate_has_no_legal_moves() {
    let board = Board::try_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!board.is_in_check(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(!board.pseudo_legal_moves(Color::Black).is_empty());
}

#[test]
fn test_parse_move_infers_kinds() {
    let board = Board::try_from_fen("r3k2r/1P6/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1").unwrap();
    assert_eq!(board.parse_move("e1g1").unwrap(), Move::castle_kingside(Color::White));
    assert_eq!(board.parse_move("e1 c1").unwrap(), Move::castle_queenside(Color::White));
    assert_eq!(
        board.parse_move("e5d6").unwrap(),
        Move::en_passant(Color::White, sq("e5"), sq("d6"))
    );
    assert_eq!(
        board.parse_move("b7b8").unwrap().promotion_piece(),
        Some(Piece::Queen)
    );
    assert_eq!(
        board.parse_move("b7-a8n").unwrap().promotion_piece(),
        Some(Piece::Knight)
    );
    assert!(board.parse_move("e5e6q").is_err());
    assert!(board.parse_move("e9e4").is_err());
    assert!(board.parse_move("hello").is_err());
}
