use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, GameStatus, Piece, Square};

/// A chess position.
///
/// Cloning produces a fully independent snapshot; the search relies on this
/// to explore hypothetical lines without touching the real game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [rank][file]
    pub(crate) active_color: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) status: GameStatus,
    pub(crate) score: f32,
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, i), Color::White, *piece);
            board.set_piece(Square(7, i), Color::Black, *piece);
            board.set_piece(Square(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move and no castling rights
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            active_color: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            status: GameStatus::New,
            score: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// True if `sq` holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        matches!(self.squares[sq.0][sq.1], Some((c, _)) if c == color)
    }

    /// Every piece of `color`, scanned rank by rank from a1 to h8
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Location of `color`'s king, the first found when scanning from a1.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.active_color
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.active_color = color;
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Evaluation recorded after the last engine reply
    #[inline]
    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }

    #[inline]
    pub fn set_score(&mut self, score: f32) {
        self.score = score;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let c = match self.squares[rank][file] {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;
        writeln!(
            f,
            "{} to move, status: {}, score: {:.3}",
            self.active_color, self.status, self.score
        )?;
        write!(f, "FEN: {}", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(board.status(), GameStatus::New);
        assert_eq!(board.castling_rights(), CastlingRights::all());
    }

    #[test]
    fn test_default_is_start_position() {
        assert_eq!(Board::default(), Board::new());
        assert_eq!(Board::default().to_fen(), crate::board::START_FEN);
    }

    #[test]
    fn test_find_king() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::White), Some(Square(0, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square(7, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::new();
        let mut copy = original.clone();
        copy.clear_square(Square(1, 4));
        copy.castling_rights.remove_color(Color::White);
        assert!(!original.is_empty(Square(1, 4)));
        assert!(original.castling_rights().has(Color::White, true));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_display_contains_grid_and_fen() {
        let text = Board::new().to_string();
        assert!(text.contains("8 | r n b q k b n r |"));
        assert!(text.contains("1 | R N B Q K B N R |"));
        assert!(text.contains("FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    }
}
