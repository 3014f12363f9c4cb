//! Error types for chess board operations.

use std::fmt;

use super::types::Square;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs all 6)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Placement field does not describe exactly 8 ranks
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    InvalidFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Full-move number is not a positive integer
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling availability '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Reasons a human move is rejected.
///
/// The board is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the origin square
    EmptyOrigin { from: Square },
    /// The origin holds a piece of the side not to move
    WrongColor { from: Square },
    /// The piece cannot reach the destination
    IllegalDestination { from: Square, to: Square },
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck { from: Square, to: Square },
    /// A square of the move lies outside the 8x8 board
    OffBoard { rank: usize, file: usize },
    /// The game is already over
    GameOver,
    /// Move text could not be parsed
    Parse { text: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyOrigin { from } => {
                write!(f, "There is no piece at location {from}")
            }
            MoveError::WrongColor { .. } => {
                write!(f, "You cannot move your opponent's piece")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "{to} is not a valid destination for piece at {from}")
            }
            MoveError::LeavesKingInCheck { .. } => {
                write!(f, "You cannot make a move that would leave your king in check")
            }
            MoveError::OffBoard { rank, file } => {
                write!(f, "Square (rank {rank}, file {file}) is not on the board")
            }
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::Parse { text } => {
                write!(f, "Cannot read move '{text}', expected e.g. e2e4 or e7e8q")
            }
        }
    }
}

impl std::error::Error for MoveError {}
