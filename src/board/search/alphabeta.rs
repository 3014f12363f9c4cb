use std::time::Instant;

use log::trace;

use super::{NodeScore, SearchClock, SearchResult, SearchStats, SearchTimeout};
use crate::board::eval::{is_terminal_score, Evaluator, BLACK_WIN_THRESHOLD, WHITE_WIN_THRESHOLD};
use crate::board::{Board, Color, Move, MoveList};

/// Pick `color`'s best move, searching `depth` rounds past the candidate.
///
/// One round is an opponent reply plus a follow-up by `color`, so depth 0
/// scores each candidate by static evaluation and depth 1 sees mate in one.
///
/// Returns `Ok(None)` when the position is already decided or `color` has
/// no move at all. When no candidate beats the starting window (every move
/// loses), the first candidate is returned so the side still has a move.
pub fn best_move_at_depth<E: Evaluator + ?Sized>(
    board: &Board,
    color: Color,
    depth: u32,
    clock: &SearchClock,
    evaluator: &E,
) -> Result<Option<SearchResult>, SearchTimeout> {
    let mut search = AlphaBeta::new(clock, evaluator);
    search.root(board, color, depth)
}

/// One fixed-depth search: the shared clock, the evaluator and a node count.
pub(crate) struct AlphaBeta<'a, E: Evaluator + ?Sized> {
    clock: &'a SearchClock,
    evaluator: &'a E,
    nodes: u64,
}

impl<'a, E: Evaluator + ?Sized> AlphaBeta<'a, E> {
    pub(crate) fn new(clock: &'a SearchClock, evaluator: &'a E) -> Self {
        AlphaBeta {
            clock,
            evaluator,
            nodes: 0,
        }
    }

    fn root(
        &mut self,
        board: &Board,
        color: Color,
        depth: u32,
    ) -> Result<Option<SearchResult>, SearchTimeout> {
        let started = Instant::now();
        self.nodes = 0;

        if is_terminal_score(self.evaluator.evaluate(board)) {
            return Ok(None);
        }

        let plies = depth.saturating_mul(2);
        let mut alpha = BLACK_WIN_THRESHOLD;
        let mut beta = WHITE_WIN_THRESHOLD;
        let mut best: Option<(Move, NodeScore)> = None;
        let mut first: Option<Move> = None;
        let mut moves = MoveList::new();

        'cutoff: for (from, piece) in board.pieces(color) {
            moves.clear();
            board.generate_piece_moves(from, color, piece, &mut moves);
            for mv in moves.iter() {
                first.get_or_insert(*mv);
                match color {
                    Color::White => {
                        let node = self.min_score(board, mv, alpha, beta, plies)?;
                        trace!("{mv} at depth {depth}: {:.3} (window {alpha:.3}..{beta:.3})", node.score);
                        if node.score > alpha {
                            best = Some((*mv, node));
                            alpha = node.score;
                            if alpha >= beta {
                                break 'cutoff;
                            }
                        }
                    }
                    Color::Black => {
                        let node = self.max_score(board, mv, alpha, beta, plies)?;
                        trace!("{mv} at depth {depth}: {:.3} (window {alpha:.3}..{beta:.3})", node.score);
                        if node.score < beta {
                            best = Some((*mv, node));
                            beta = node.score;
                            if beta <= alpha {
                                break 'cutoff;
                            }
                        }
                    }
                }
            }
        }

        let stats = SearchStats {
            nodes: self.nodes,
            elapsed: started.elapsed(),
        };
        let result = match (best, first) {
            (Some((best_move, node)), _) => Some(SearchResult {
                best_move,
                score: node.score,
                delivers_mate: node.mated,
                depth,
                stats,
            }),
            (None, Some(best_move)) => Some(SearchResult {
                best_move,
                score: match color {
                    Color::White => alpha,
                    Color::Black => beta,
                },
                delivers_mate: false,
                depth,
                stats,
            }),
            (None, None) => None,
        };
        Ok(result)
    }

    /// Score of White's `mv`, assuming Black answers with its lowest-scoring reply.
    ///
    /// `mated` ends up true only if every Black reply was searched and none
    /// of them scores strictly below the White win threshold.
    pub(crate) fn min_score(
        &mut self,
        board: &Board,
        mv: &Move,
        alpha: f32,
        beta: f32,
        depth: u32,
    ) -> Result<NodeScore, SearchTimeout> {
        if self.clock.is_time_up() {
            return Err(SearchTimeout { depth });
        }

        let mut child = board.clone();
        child.apply_move(mv);

        let mut node = NodeScore {
            score: self.evaluator.evaluate(&child),
            mated: false,
        };
        if depth > 0 && !is_terminal_score(node.score) {
            let replier = mv.color.opponent();
            let mut beta_score = beta;
            let mut mated = true;
            let mut moves = MoveList::new();

            'cutoff: for (from, piece) in child.pieces(replier) {
                moves.clear();
                child.generate_piece_moves(from, replier, piece, &mut moves);
                for reply in moves.iter() {
                    let score = self.max_score(&child, reply, alpha, beta_score, depth - 1)?.score;
                    // a reply cut off at the window edge still loses the king
                    if score < WHITE_WIN_THRESHOLD {
                        mated = false;
                    }
                    if score < beta_score {
                        beta_score = score;
                    }
                    if beta_score <= alpha {
                        // unproven once pruned
                        mated = false;
                        break 'cutoff;
                    }
                }
            }
            node = NodeScore {
                score: beta_score,
                mated,
            };
        }

        self.nodes += 1;
        Ok(node)
    }

    /// Score of Black's `mv`, assuming White answers with its highest-scoring reply.
    pub(crate) fn max_score(
        &mut self,
        board: &Board,
        mv: &Move,
        alpha: f32,
        beta: f32,
        depth: u32,
    ) -> Result<NodeScore, SearchTimeout> {
        if self.clock.is_time_up() {
            return Err(SearchTimeout { depth });
        }

        let mut child = board.clone();
        child.apply_move(mv);

        let mut node = NodeScore {
            score: self.evaluator.evaluate(&child),
            mated: false,
        };
        if depth > 0 && !is_terminal_score(node.score) {
            let replier = mv.color.opponent();
            let mut alpha_score = alpha;
            let mut mated = true;
            let mut moves = MoveList::new();

            'cutoff: for (from, piece) in child.pieces(replier) {
                moves.clear();
                child.generate_piece_moves(from, replier, piece, &mut moves);
                for reply in moves.iter() {
                    let score = self.min_score(&child, reply, alpha_score, beta, depth - 1)?.score;
                    if score > BLACK_WIN_THRESHOLD {
                        mated = false;
                    }
                    if score > alpha_score {
                        alpha_score = score;
                    }
                    if alpha_score >= beta {
                        mated = false;
                        break 'cutoff;
                    }
                }
            }
            node = NodeScore {
                score: alpha_score,
                mated,
            };
        }

        self.nodes += 1;
        Ok(node)
    }
}
