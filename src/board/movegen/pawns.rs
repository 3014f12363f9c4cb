use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        // Single push, then the double push from the starting rank
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(moves, color, from, one);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::double_step(color, from, two, one));
                        }
                    }
                }
            }
        }

        // Diagonal captures, including en passant
        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((c, _)) if c != color => push_pawn_move(moves, color, from, to),
                Some(_) => {}
                None => {
                    if self.en_passant_target == Some(to)
                        && self.piece_at(Square(from.rank(), to.file()))
                            == Some((color.opponent(), Piece::Pawn))
                    {
                        moves.push(Move::en_passant(color, from, to));
                    }
                }
            }
        }
    }
}

/// Push a pawn move, expanding it into the four promotions on the far rank.
fn push_pawn_move(moves: &mut MoveList, color: Color, from: Square, to: Square) {
    if to.rank() == color.pawn_promotion_rank() {
        for piece in PROMOTION_PIECES {
            moves.push(Move::promotion(color, from, to, piece));
        }
    } else {
        moves.push(Move::new(Piece::Pawn, color, from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Board, Move, MoveKind, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_white_pawn_start_rank() {
        let board = Board::new();
        let moves = board.possible_moves(sq("e2"));
        assert_eq!(moves.len(), 2);
        let double = moves.iter().find(|m| m.to == sq("e4")).unwrap();
        assert_eq!(double.en_passant_target, Some(sq("e3")));
        let single = moves.iter().find(|m| m.to == sq("e3")).unwrap();
        assert_eq!(single.en_passant_target, None);
    }

    #[test]
    fn test_black_pawn_start_rank() {
        let board = Board::new();
        let moves = board.possible_moves(sq("c7"));
        assert_eq!(moves.len(), 2);
        let double = moves.iter().find(|m| m.to == sq("c5")).unwrap();
        assert_eq!(double.en_passant_target, Some(sq("c6")));
    }

    #[test]
    fn test_double_push_needs_both_squares_empty() {
        let board = Board::try_from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
        assert!(board.possible_moves(sq("e2")).is_empty());
        let board = Board::try_from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
        let moves = board.possible_moves(sq("e2"));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("e3"));
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let board = Board::try_from_fen("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1").unwrap();
        let moves = board.possible_moves(sq("e2"));
        assert!(moves.iter().any(|m| m.to == sq("d3")));
        assert!(!moves.iter().any(|m| m.to == sq("f3")));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_en_passant_only_on_target() {
        let with_target = Board::try_from_fen("4k3/8/8/1pP5/8/8/8/4K3 w - b6 0 1").unwrap();
        let moves = with_target.possible_moves(sq("c5"));
        assert!(moves.contains(&Move::en_passant(
            crate::board::Color::White,
            sq("c5"),
            sq("b6")
        )));

        let without = Board::try_from_fen("4k3/8/8/1pP5/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = without.possible_moves(sq("c5"));
        assert!(!moves.iter().any(|m| m.kind == MoveKind::EnPassantCapture));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn test_promotion_push_expands_to_four() {
        let board = Board::try_from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = board.possible_moves(sq("b7"));
        assert_eq!(moves.len(), 4);
        let mut pieces: Vec<Piece> = moves.iter().filter_map(|m| m.promotion_piece()).collect();
        pieces.sort_by_key(|p| p.to_char());
        assert_eq!(
            pieces,
            vec![Piece::Bishop, Piece::Knight, Piece::Queen, Piece::Rook]
        );
    }

    #[test]
    fn test_promotion_with_capture_expands_to_eight() {
        let board = Board::try_from_fen("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = board.possible_moves(sq("b7"));
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.promotion_piece().is_some()));
    }

    #[test]
    fn test_black_promotion() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/5p2/K7 b - - 0 1").unwrap();
        let moves = board.possible_moves(sq("f2"));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to == sq("f1")));
    }
}
