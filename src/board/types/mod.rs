//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` - castling state
//! - `GameStatus` - where the game stands

mod castling;
mod moves;
mod piece;
mod square;
mod status;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
pub use status::GameStatus;

// Re-export internal utilities
pub(crate) use castling::{castle_side, rook_home};
pub(crate) use piece::PROMOTION_PIECES;
