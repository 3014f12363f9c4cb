//! Game status.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Where a game stands after the most recent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    New,
    Ok,
    InvalidMove,
    WhiteInCheck,
    BlackInCheck,
    WhiteCheckmated,
    BlackCheckmated,
    /// The side to move is not in check and has no legal move
    Stalemate,
    SystemError,
}

impl GameStatus {
    /// Whether the game can still be played from this status
    #[inline]
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(
            self,
            GameStatus::New | GameStatus::Ok | GameStatus::WhiteInCheck | GameStatus::BlackInCheck
        )
    }

    /// Checkmate status for the side that has been mated
    #[inline]
    #[must_use]
    pub const fn checkmated(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteCheckmated,
            Color::Black => GameStatus::BlackCheckmated,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            GameStatus::New => "New",
            GameStatus::Ok => "OK",
            GameStatus::InvalidMove => "Invalid move",
            GameStatus::WhiteInCheck => "White is in check!",
            GameStatus::BlackInCheck => "Black is in check!",
            GameStatus::WhiteCheckmated => "White is checkmated!",
            GameStatus::BlackCheckmated => "Black is checkmated!",
            GameStatus::Stalemate => "Stalemate",
            GameStatus::SystemError => "System error",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
