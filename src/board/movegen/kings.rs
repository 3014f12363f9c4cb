use super::super::geometry::king_targets;
use super::super::{rook_home, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in king_targets(from) {
            if self.is_available_to(to, color) {
                moves.push(Move::new(Piece::King, color, from, to));
            }
        }

        if from == Square(color.back_rank(), 4) {
            self.generate_castling_moves(color, moves);
        }
    }

    /// Castling from the home square.
    ///
    /// Needs the right, the rook on its corner, empty squares between king
    /// and rook, and no enemy piece able to reach the king's start, transit
    /// or destination square.
    fn generate_castling_moves(&self, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        let enemy = color.opponent();
        let rights = self.castling_rights;

        if rights.has(color, true)
            && self.piece_at(rook_home(color, true)) == Some((color, Piece::Rook))
            && self.is_empty(Square(rank, 5))
            && self.is_empty(Square(rank, 6))
            && !self.any_reachable(&[Square(rank, 4), Square(rank, 5), Square(rank, 6)], enemy)
        {
            moves.push(Move::castle_kingside(color));
        }

        if rights.has(color, false)
            && self.piece_at(rook_home(color, false)) == Some((color, Piece::Rook))
            && self.is_empty(Square(rank, 1))
            && self.is_empty(Square(rank, 2))
            && self.is_empty(Square(rank, 3))
            && !self.any_reachable(&[Square(rank, 4), Square(rank, 3), Square(rank, 2)], enemy)
        {
            moves.push(Move::castle_queenside(color));
        }
    }

    fn any_reachable(&self, squares: &[Square], by: Color) -> bool {
        squares.iter().any(|&sq| self.is_reachable(sq, by))
    }
}
