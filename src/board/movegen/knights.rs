use super::super::geometry::knight_targets;
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in knight_targets(from) {
            if self.is_available_to(to, color) {
                moves.push(Move::new(Piece::Knight, color, from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Board, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_in_corner() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
        let moves = board.possible_moves(sq("a1"));
        let mut targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["b3", "c2"]);
    }

    #[test]
    fn test_knight_skips_own_and_takes_enemy() {
        let board = Board::try_from_fen("4k3/8/8/3p4/8/2N5/4P3/4K3 w - - 0 1").unwrap();
        let moves = board.possible_moves(sq("c3"));
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().any(|m| m.to == sq("d5")));
        assert!(!moves.iter().any(|m| m.to == sq("e2")));
    }
}
