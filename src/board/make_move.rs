use super::{Board, Color, GameStatus, Move, Piece};

impl Board {
    /// Apply `mv` in place and return the board for chaining.
    ///
    /// The move is trusted: no legality check is done here. Status is set to
    /// `Ok`; classifying check or mate is up to the caller.
    pub fn apply_move(&mut self, mv: &Move) -> &mut Self {
        self.apply_move_with_mate(mv, None)
    }

    /// Apply `mv` and, when `mated` names a side, record that side as
    /// checkmated instead of setting `Ok`.
    pub fn apply_move_with_mate(&mut self, mv: &Move, mated: Option<Color>) -> &mut Self {
        let captured = self.piece_at(mv.to);

        self.set_piece(mv.to, mv.color, mv.piece);
        self.clear_square(mv.from);

        if let Some((rook_from, rook_to)) = mv.castling_rook_squares() {
            self.clear_square(rook_from);
            self.set_piece(rook_to, mv.color, Piece::Rook);
        }
        if let Some(victim) = mv.en_passant_capture_square() {
            self.clear_square(victim);
        }
        if let Some(promoted) = mv.promotion_piece() {
            self.set_piece(mv.to, mv.color, promoted);
        }

        self.en_passant_target = mv.en_passant_target;

        match mv.piece {
            Piece::King => self.castling_rights.remove_color(mv.color),
            Piece::Rook => self.castling_rights.remove_for_corner(mv.from),
            _ => {}
        }
        if matches!(captured, Some((_, Piece::Rook))) {
            self.castling_rights.remove_for_corner(mv.to);
        }

        self.active_color = mv.color.opponent();
        if mv.color == Color::Black {
            self.fullmove_number += 1;
        }
        // No fifty-move tracking
        self.halfmove_clock = 0;

        self.status = match mated {
            Some(color) => GameStatus::checkmated(color),
            None => GameStatus::Ok,
        };
        self
    }
}
