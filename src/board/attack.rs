//! Reachability queries used for check detection and castling safety.

use super::geometry::king_targets;
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// True if some piece of `by` other than its king has `target` among its
    /// pseudo-legal destinations.
    ///
    /// Kings are left out, since castling generation asks this question; the
    /// squares around a king only matter for legality, see
    /// [`Board::kings_touch`]. Pawns count only where they can move, so an
    /// empty square diagonally ahead of a pawn is not reachable unless it is
    /// the en passant target.
    #[must_use]
    pub fn is_reachable(&self, target: Square, by: Color) -> bool {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces(by) {
            if piece == Piece::King {
                continue;
            }
            moves.clear();
            self.generate_piece_moves(from, by, piece, &mut moves);
            if moves.iter().any(|m| m.to == target) {
                return true;
            }
        }
        false
    }

    /// True when both kings are on the board on adjacent squares.
    #[must_use]
    pub fn kings_touch(&self) -> bool {
        match (self.find_king(Color::White), self.find_king(Color::Black)) {
            (Some(white), Some(black)) => king_targets(white).contains(&black),
            _ => false,
        }
    }

    /// True if `color`'s king can be reached by the other side.
    ///
    /// A board without that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_reachable(king, color.opponent()))
    }

    /// Whether playing `mv` would leave the mover's own king reachable, or
    /// standing next to the other king.
    #[must_use]
    pub fn leaves_king_in_check(&self, mv: &Move) -> bool {
        let mut after = self.clone();
        after.apply_move(mv);
        after.is_in_check(mv.color) || after.kings_touch()
    }

    /// Pseudo-legal moves of `color` that do not leave its king in check
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pseudo_legal_moves(color)
            .into_iter()
            .filter(|mv| !self.leaves_king_in_check(mv))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_rook_reaches_along_file() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert!(board.is_reachable(sq("a8"), Color::White));
        assert!(!board.is_reachable(sq("h1"), Color::White));
        assert!(!board.is_reachable(sq("b2"), Color::White));
    }

    #[test]
    fn test_kings_do_not_reach() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/3K4/8 w - - 0 1").unwrap();
        assert!(!board.is_reachable(sq("e3"), Color::White));
        assert!(!board.is_reachable(sq("d7"), Color::Black));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn test_kings_touch() {
        let apart = Board::try_from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1").unwrap();
        assert!(!apart.kings_touch());
        let touching = Board::try_from_fen("8/8/8/3k4/3K4/8/8/8 w - - 0 1").unwrap();
        assert!(touching.kings_touch());
        assert!(!Board::empty().kings_touch());
    }

    #[test]
    fn test_king_cannot_step_next_to_king() {
        let board = Board::try_from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1").unwrap();
        let legal = board.legal_moves(Color::White);
        assert!(legal.iter().all(|m| m.to.rank() < 3));
        assert_eq!(legal.len(), 5);
    }

    #[test]
    fn test_pawn_reach_is_its_moves() {
        let board = Board::try_from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        assert!(board.is_reachable(sq("d5"), Color::White));
        assert!(board.is_reachable(sq("e5"), Color::White));
        assert!(!board.is_reachable(sq("f5"), Color::White));
    }

    #[test]
    fn test_is_in_check() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();
        assert!(board.is_in_check(Color::Black));
        assert!(!board.is_in_check(Color::White));
        assert!(!Board::empty().is_in_check(Color::White));
    }

    #[test]
    fn test_pinned_piece_has_no_legal_moves() {
        let board = Board::try_from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let legal = board.legal_moves(Color::White);
        assert!(legal.iter().all(|m| m.piece == Piece::King));
        assert!(!legal.is_empty());
    }
}
