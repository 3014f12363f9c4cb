//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// What kind of ply a move is, with any kind-specific payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Plain move or capture, including pawn single and double steps
    Regular,
    CastleKingside,
    CastleQueenside,
    /// Pawn capture onto the en passant target square
    EnPassantCapture,
    /// Pawn reaching the far rank; the payload replaces it
    Promotion(Piece),
}

/// A single ply.
///
/// `en_passant_target` is the square a double-stepping pawn skipped over. It
/// is what the board's en passant target becomes once the move is applied,
/// and it does not take part in equality or hashing: a move typed by a human
/// as "e2e4" is the same move as the generated double step.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece: Piece,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub en_passant_target: Option<Square>,
}

impl Move {
    /// Create a regular move or capture
    #[inline]
    #[must_use]
    pub const fn new(piece: Piece, color: Color, from: Square, to: Square) -> Self {
        Move {
            piece,
            color,
            from,
            to,
            kind: MoveKind::Regular,
            en_passant_target: None,
        }
    }

    /// Create a pawn double step that leaves `skipped` as the en passant target
    #[inline]
    #[must_use]
    pub const fn double_step(color: Color, from: Square, to: Square, skipped: Square) -> Self {
        Move {
            piece: Piece::Pawn,
            color,
            from,
            to,
            kind: MoveKind::Regular,
            en_passant_target: Some(skipped),
        }
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(color: Color, from: Square, to: Square) -> Self {
        Move {
            piece: Piece::Pawn,
            color,
            from,
            to,
            kind: MoveKind::EnPassantCapture,
            en_passant_target: None,
        }
    }

    /// Create a promotion (with or without capture)
    #[inline]
    #[must_use]
    pub const fn promotion(color: Color, from: Square, to: Square, piece: Piece) -> Self {
        Move {
            piece: Piece::Pawn,
            color,
            from,
            to,
            kind: MoveKind::Promotion(piece),
            en_passant_target: None,
        }
    }

    /// Create the kingside castle for `color` (e1g1 / e8g8)
    #[inline]
    #[must_use]
    pub const fn castle_kingside(color: Color) -> Self {
        let rank = color.back_rank();
        Move {
            piece: Piece::King,
            color,
            from: Square(rank, 4),
            to: Square(rank, 6),
            kind: MoveKind::CastleKingside,
            en_passant_target: None,
        }
    }

    /// Create the queenside castle for `color` (e1c1 / e8c8)
    #[inline]
    #[must_use]
    pub const fn castle_queenside(color: Color) -> Self {
        let rank = color.back_rank();
        Move {
            piece: Piece::King,
            color,
            from: Square(rank, 4),
            to: Square(rank, 2),
            kind: MoveKind::CastleQueenside,
            en_passant_target: None,
        }
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(
            self.kind,
            MoveKind::CastleKingside | MoveKind::CastleQueenside
        )
    }

    /// Square of the pawn removed by an en passant capture: the destination
    /// file on the origin rank.
    #[inline]
    #[must_use]
    pub const fn en_passant_capture_square(self) -> Option<Square> {
        match self.kind {
            MoveKind::EnPassantCapture => Some(Square(self.from.0, self.to.1)),
            _ => None,
        }
    }

    /// Rook relocation (from, to) for castling moves
    #[inline]
    #[must_use]
    pub const fn castling_rook_squares(self) -> Option<(Square, Square)> {
        let rank = self.from.0;
        match self.kind {
            MoveKind::CastleKingside => Some((Square(rank, 7), Square(rank, 5))),
            MoveKind::CastleQueenside => Some((Square(rank, 0), Square(rank, 3))),
            _ => None,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.piece == other.piece
            && self.color == other.color
            && self.from == other.from
            && self.to == other.to
            && self.kind == other.kind
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece.hash(state);
        self.color.hash(state);
        self.from.hash(state);
        self.to.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Lists hold one piece's moves; a queen has at most 27.
pub(crate) const MAX_MOVES: usize = 32;
pub(crate) const EMPTY_MOVE: Move = Move::new(Piece::Pawn, Color::White, Square(0, 0), Square(0, 0));

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Find the listed move equal to `mv` (ignoring its en passant payload)
    #[must_use]
    pub fn find(&self, mv: &Move) -> Option<Move> {
        self.iter().copied().find(|m| m == mv)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.find(mv).is_some()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Extend<Move> for MoveList {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        for mv in iter {
            self.push(mv);
        }
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_equality_ignores_en_passant_payload() {
        let typed = Move::new(Piece::Pawn, Color::White, sq("e2"), sq("e4"));
        let generated = Move::double_step(Color::White, sq("e2"), sq("e4"), sq("e3"));
        assert_eq!(typed, generated);

        let mut set = HashSet::new();
        set.insert(generated);
        assert!(set.contains(&typed));
    }

    #[test]
    fn test_promotion_pieces_are_distinct_moves() {
        let q = Move::promotion(Color::White, sq("b7"), sq("b8"), Piece::Queen);
        let n = Move::promotion(Color::White, sq("b7"), sq("b8"), Piece::Knight);
        assert_ne!(q, n);
        assert_eq!(q.to_string(), "b7b8q");
        assert_eq!(n.promotion_piece(), Some(Piece::Knight));
    }

    #[test]
    fn test_en_passant_capture_square() {
        let mv = Move::en_passant(Color::White, sq("c5"), sq("b6"));
        assert_eq!(mv.en_passant_capture_square(), Some(sq("b5")));
        let plain = Move::new(Piece::Pawn, Color::White, sq("c5"), sq("b6"));
        assert_eq!(plain.en_passant_capture_square(), None);
        assert_ne!(mv, plain);
    }

    #[test]
    fn test_castle_squares() {
        let ks = Move::castle_kingside(Color::Black);
        assert_eq!(ks.to_string(), "e8g8");
        assert_eq!(ks.castling_rook_squares(), Some((sq("h8"), sq("f8"))));
        let qs = Move::castle_queenside(Color::White);
        assert_eq!(qs.to_string(), "e1c1");
        assert_eq!(qs.castling_rook_squares(), Some((sq("a1"), sq("d1"))));
    }

    #[test]
    fn test_move_list_find_returns_listed_move() {
        let mut list = MoveList::new();
        list.push(Move::double_step(Color::Black, sq("c7"), sq("c5"), sq("c6")));
        let typed = Move::new(Piece::Pawn, Color::Black, sq("c7"), sq("c5"));
        let found = list.find(&typed).unwrap();
        assert_eq!(found.en_passant_target, Some(sq("c6")));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], typed);
    }
}
