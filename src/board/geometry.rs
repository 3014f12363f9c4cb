//! Precomputed step targets for the stepping pieces, and slider directions.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

fn step_table(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

/// On-board knight destinations, indexed by `Square::index`
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| step_table(&KNIGHT_DELTAS));

/// On-board king destinations (single steps only), indexed by `Square::index`
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| step_table(&KING_DELTAS));

#[inline]
pub(crate) fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[sq.index()]
}

#[inline]
pub(crate) fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS[sq.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_targets_corner_and_center() {
        assert_eq!(knight_targets(Square(0, 0)).len(), 2);
        assert_eq!(knight_targets(Square(3, 3)).len(), 8);
        assert_eq!(knight_targets(Square(0, 1)).len(), 3);
    }

    #[test]
    fn test_king_targets_edges() {
        assert_eq!(king_targets(Square(0, 0)).len(), 3);
        assert_eq!(king_targets(Square(0, 4)).len(), 5);
        assert_eq!(king_targets(Square(4, 4)).len(), 8);
    }

    #[test]
    fn test_tables_cover_every_square() {
        assert_eq!(KNIGHT_TARGETS.len(), 64);
        assert_eq!(KING_TARGETS.len(), 64);
        let total: usize = KNIGHT_TARGETS.iter().map(Vec::len).sum();
        assert_eq!(total, 336);
    }
}
