//! Board geometry: squares, offsets and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is White's back rank and file 0 is the a-file. Squares produced by
/// [`Square::new`] and [`Square::offset`] are always on the board; stepping
/// off the edge yields `None` rather than a wrapped or sentinel square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the square's linear index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank() * 8 + self.file()
    }

    /// Create a square from a linear index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx / 8, idx % 8))
        } else {
            None
        }
    }

    /// The square `d_rank` ranks and `d_file` files away, or `None` off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square(idx / 8, idx % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a'.wrapping_add(self.1 as u8));
        write!(f, "{}{}", file, self.0.wrapping_add(1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        Ok(Square((rank - b'1') as usize, (file - b'a') as usize))
    }
}
