pub mod board;
pub mod cli;
pub mod engine;

pub use board::{Board, Color, GameStatus, Move, MoveError, Piece, Square};
pub use engine::{EngineConfig, EngineController};
