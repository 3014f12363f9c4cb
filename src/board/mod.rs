//! Chess board representation and game logic.
//!
//! An 8x8 mailbox board with per-piece pseudo-legal move generation,
//! castling, en passant and promotion, static evaluation, and an
//! alpha-beta search bounded by a wall-clock budget.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.pseudo_legal_moves(Color::White);
//! println!("Starting position has {} moves", moves.len());
//! ```

mod attack;
mod error;
mod eval;
mod fen;
mod geometry;
mod make_move;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use eval::{
    is_terminal_score, CenterWeighted, Evaluator, EvaluatorKind, Material, BLACK_WIN_THRESHOLD,
    WHITE_WIN_THRESHOLD,
};
pub use fen::START_FEN;
pub use state::Board;
pub use types::{
    CastlingRights, Color, GameStatus, Move, MoveKind, MoveList, MoveListIntoIter, Piece, Square,
};

pub use search::{
    best_move_at_depth, find_best_move, SearchClock, SearchLimits, SearchResult, SearchStats,
    SearchTimeout, DEFAULT_MAX_DEPTH,
};

pub(crate) use types::{castle_side, rook_home, PROMOTION_PIECES};
