//! Pseudo-legal move generation, one generator per piece kind.
//!
//! Generated moves obey piece movement rules only: they stay on the board
//! and never land on a piece of the mover's color, but may leave the mover's
//! own king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::geometry::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves of whatever piece stands on `from`.
    ///
    /// Returns an empty list for an empty square.
    #[must_use]
    pub fn possible_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some((color, piece)) = self.piece_at(from) {
            self.generate_piece_moves(from, color, piece, &mut moves);
        }
        moves
    }

    /// Pseudo-legal moves of every piece of `color`, scanned from a1 to h8
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut all = Vec::with_capacity(64);
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces(color) {
            moves.clear();
            self.generate_piece_moves(from, color, piece, &mut moves);
            all.extend(moves.iter().copied());
        }
        all
    }

    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, piece, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, piece, &ROOK_DIRECTIONS, moves),
            Piece::Queen => self.generate_sliding_moves(from, color, piece, &QUEEN_DIRECTIONS, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// A square a non-pawn of `color` may land on: empty or enemy-occupied.
    #[inline]
    pub(crate) fn is_available_to(&self, sq: Square, color: Color) -> bool {
        !self.is_occupied_by(sq, color)
    }
}
