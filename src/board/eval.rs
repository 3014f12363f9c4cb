//! Static evaluation, scored from White's point of view.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Square};

/// Scores above this mean Black has lost its king or is as good as mated.
pub const WHITE_WIN_THRESHOLD: f32 = 50.0;
/// Scores below this mean White has lost its king or is as good as mated.
pub const BLACK_WIN_THRESHOLD: f32 = -50.0;

/// Center weighting only applies before this full-move number.
const OPENING_MOVES: u32 = 20;

/// Positional multipliers, indexed [rank][file].
const CENTER_WEIGHTS: [[f32; 8]; 8] = [
    [1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000],
    [1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000],
    [1.000, 1.000, 1.002, 1.005, 1.005, 1.002, 1.000, 1.000],
    [1.000, 1.000, 1.005, 1.009, 1.009, 1.005, 1.000, 1.000],
    [1.000, 1.000, 1.005, 1.009, 1.009, 1.005, 1.000, 1.000],
    [1.000, 1.000, 1.002, 1.005, 1.005, 1.002, 1.000, 1.000],
    [1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000],
    [1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000, 1.000],
];

/// True when a score lies outside the non-terminal band.
#[inline]
#[must_use]
pub fn is_terminal_score(score: f32) -> bool {
    score > WHITE_WIN_THRESHOLD || score < BLACK_WIN_THRESHOLD
}

/// A static position scorer. Positive scores favor White.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> f32;
}

/// Material with a small bonus for central squares during the opening.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterWeighted;

impl Evaluator for CenterWeighted {
    fn evaluate(&self, board: &Board) -> f32 {
        let opening = board.fullmove_number < OPENING_MOVES;
        let mut score = 0.0;
        for (rank, row) in board.squares.iter().enumerate() {
            for (file, cell) in row.iter().enumerate() {
                let Some((color, piece)) = *cell else {
                    continue;
                };
                let points = piece.signed_points(color);
                if opening && in_center(Square(rank, file)) {
                    score += points * CENTER_WEIGHTS[rank][file];
                } else {
                    score += points;
                }
            }
        }
        score
    }
}

/// Plain material count.
#[derive(Clone, Copy, Debug, Default)]
pub struct Material;

impl Evaluator for Material {
    fn evaluate(&self, board: &Board) -> f32 {
        board
            .squares
            .iter()
            .flatten()
            .flatten()
            .map(|&(color, piece)| piece.signed_points(color))
            .sum()
    }
}

/// Selects one of the built-in evaluators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluatorKind {
    #[default]
    CenterWeighted,
    Material,
}

impl Evaluator for EvaluatorKind {
    #[inline]
    fn evaluate(&self, board: &Board) -> f32 {
        match self {
            EvaluatorKind::CenterWeighted => CenterWeighted.evaluate(board),
            EvaluatorKind::Material => Material.evaluate(board),
        }
    }
}

/// Files c-f on ranks 3-6, the only squares with a weight above 1.0
#[inline]
const fn in_center(sq: Square) -> bool {
    sq.0 >= 2 && sq.0 <= 5 && sq.1 >= 2 && sq.1 <= 5
}

impl Board {
    /// Center-weighted evaluation of this position
    #[must_use]
    pub fn evaluate(&self) -> f32 {
        CenterWeighted.evaluate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_empty_and_start_are_zero() {
        assert_eq!(Board::empty().evaluate(), 0.0);
        assert_eq!(Board::new().evaluate(), 0.0);
        assert_eq!(Material.evaluate(&Board::new()), 0.0);
    }

    #[test]
    fn test_material_counts_signed_points() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/QR2K3 w - - 0 1").unwrap();
        assert_eq!(Material.evaluate(&board), 14.0);
        let board = Board::try_from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(Material.evaluate(&board), -9.0);
    }

    #[test]
    fn test_center_weight_applies_in_opening() {
        let board = Board::try_from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 5").unwrap();
        assert!(approx(board.evaluate(), 3.0 * 1.009));
        let edge = Board::try_from_fen("4k3/8/8/8/N7/8/8/4K3 w - - 0 5").unwrap();
        assert_eq!(edge.evaluate(), 3.0);
    }

    #[test]
    fn test_center_weight_off_after_opening() {
        let board = Board::try_from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 20").unwrap();
        assert_eq!(board.evaluate(), 3.0);
    }

    #[test]
    fn test_center_weight_is_symmetric() {
        let board = Board::try_from_fen("4k3/8/8/3n4/3N4/8/8/4K3 w - - 0 1").unwrap();
        assert!(approx(board.evaluate(), 0.0));
    }

    #[test]
    fn test_missing_king_is_terminal() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(is_terminal_score(board.evaluate()));
        assert!(board.evaluate() > WHITE_WIN_THRESHOLD);
        assert!(!is_terminal_score(50.0));
        assert!(!is_terminal_score(-50.0));
    }

    #[test]
    fn test_evaluator_kind_dispatch() {
        let board = Board::try_from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(EvaluatorKind::Material.evaluate(&board), 3.0);
        assert!(EvaluatorKind::CenterWeighted.evaluate(&board) > 3.0);
    }
}
