//! Engine controller implementation.

use log::{debug, info};

use super::EngineConfig;
use crate::board::{
    find_best_move, is_terminal_score, Board, Color, Evaluator, GameStatus, Move, MoveError,
    Square, BLACK_WIN_THRESHOLD, WHITE_WIN_THRESHOLD,
};

/// Classify where the game stands on `board`.
///
/// A decisive score means a king is gone. Otherwise the side to move is
/// checkmated when it is in check with no legal move, and stalemated when it
/// has no legal move outside check. Check is reported for White before Black.
#[must_use]
pub fn classify_status<E: Evaluator + ?Sized>(board: &Board, evaluator: &E) -> GameStatus {
    let score = evaluator.evaluate(board);
    if score > WHITE_WIN_THRESHOLD {
        return GameStatus::BlackCheckmated;
    }
    if score < BLACK_WIN_THRESHOLD {
        return GameStatus::WhiteCheckmated;
    }

    let to_move = board.side_to_move();
    if board.legal_moves(to_move).is_empty() {
        return if board.is_in_check(to_move) {
            GameStatus::checkmated(to_move)
        } else {
            GameStatus::Stalemate
        };
    }
    if board.is_in_check(Color::White) {
        GameStatus::WhiteInCheck
    } else if board.is_in_check(Color::Black) {
        GameStatus::BlackInCheck
    } else {
        GameStatus::Ok
    }
}

/// Plays one side of a game against a human.
///
/// The controller owns no board: every call works on the caller's board,
/// which is only changed when the call succeeds.
#[derive(Debug, Clone, Default)]
pub struct EngineController {
    config: EngineConfig,
}

impl EngineController {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check a move for the side to move and apply it.
    ///
    /// The generated version of the move is applied, so a typed double step
    /// still sets the en passant target. On error the board is unchanged.
    pub fn validate_and_apply_human_move(
        &self,
        board: &mut Board,
        mv: &Move,
    ) -> Result<(), MoveError> {
        let checked = match validate_move(board, mv) {
            Ok(checked) => checked,
            Err(err) => {
                debug!("rejected {mv}: {err}");
                return Err(err);
            }
        };

        board.apply_move(&checked);
        self.finish_turn(board);
        debug!("played {checked}, status: {}", board.status());
        Ok(())
    }

    /// Search for the side to move and apply its best move.
    ///
    /// Does nothing once the game is over. If the position is already
    /// decided, by score or by the side to move having no legal move, only
    /// the status and score are updated. Search timeouts never escape: the
    /// deepest finished answer is played.
    pub fn compute_reply(&self, board: &mut Board) {
        if !board.status().is_in_progress() {
            return;
        }

        let evaluator = &self.config.evaluator;
        let score = evaluator.evaluate(board);
        let status = classify_status(board, evaluator);
        if is_terminal_score(score) || !status.is_in_progress() {
            board.set_score(score);
            board.set_status(status);
            info!("position already decided: {status}");
            return;
        }

        let color = board.side_to_move();
        let limits = self.config.search_limits();
        let Some(result) = find_best_move(board, color, &limits, evaluator) else {
            board.set_score(score);
            board.set_status(GameStatus::checkmated(color));
            info!("{color} has no move: {}", board.status());
            return;
        };

        board.apply_move(&result.best_move);
        self.finish_turn(board);
        info!(
            "{color} plays {} (depth {}, score {:.3}, forced mate {}, {:?}), status: {}",
            result.best_move,
            result.depth,
            board.score(),
            result.delivers_mate,
            limits.clock.elapsed(),
            board.status()
        );
    }

    /// One full turn: the human move, then the engine's reply.
    ///
    /// If the game is already over the board only gets its status refreshed.
    pub fn process_move(&self, board: &mut Board, mv: &Move) -> Result<(), MoveError> {
        let status = classify_status(board, &self.config.evaluator);
        if !status.is_in_progress() {
            board.set_status(status);
            return Ok(());
        }

        self.validate_and_apply_human_move(board, mv)?;
        self.compute_reply(board);
        Ok(())
    }

    fn finish_turn(&self, board: &mut Board) {
        let evaluator = &self.config.evaluator;
        board.set_score(evaluator.evaluate(board));
        board.set_status(classify_status(board, evaluator));
    }
}

/// Run the human-move checks in order and return the generated move.
fn validate_move(board: &Board, mv: &Move) -> Result<Move, MoveError> {
    if !board.status().is_in_progress() {
        return Err(MoveError::GameOver);
    }

    let (from, to) = (mv.from, mv.to);
    for sq in [from, to] {
        if Square::new(sq.rank(), sq.file()).is_none() {
            return Err(MoveError::OffBoard {
                rank: sq.rank(),
                file: sq.file(),
            });
        }
    }
    let Some((color, _)) = board.piece_at(from) else {
        return Err(MoveError::EmptyOrigin { from });
    };
    if color != board.side_to_move() {
        return Err(MoveError::WrongColor { from });
    }

    let generated = board
        .possible_moves(from)
        .find(mv)
        .ok_or(MoveError::IllegalDestination { from, to })?;
    if board.leaves_king_in_check(&generated) {
        return Err(MoveError::LeavesKingInCheck { from, to });
    }
    Ok(generated)
}
