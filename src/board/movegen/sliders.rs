use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Walk each ray until the edge, a friendly blocker (excluded) or an
    /// enemy piece (included as a capture).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from.offset(dr, df);
            while let Some(to) = current {
                match self.piece_at(to) {
                    None => moves.push(Move::new(piece, color, from, to)),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(Move::new(piece, color, from, to));
                        }
                        break;
                    }
                }
                current = to.offset(dr, df);
            }
        }
    }
}
