use log::{debug, warn};

use super::{best_move_at_depth, SearchClock, SearchResult, DEFAULT_MAX_DEPTH};
use crate::board::eval::Evaluator;
use crate::board::{Board, Color};

/// Limits for one iterative-deepening search
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    pub clock: SearchClock,
    /// Deepest round that will be started
    pub max_depth: u32,
}

impl SearchLimits {
    /// Search until half of `budget` has passed
    #[must_use]
    pub fn with_budget(budget: std::time::Duration) -> Self {
        SearchLimits {
            clock: SearchClock::start(budget),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Search exactly up to `max_depth` with no clock
    #[must_use]
    pub fn fixed_depth(max_depth: u32) -> Self {
        SearchLimits {
            clock: SearchClock::unbounded(),
            max_depth,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::fixed_depth(DEFAULT_MAX_DEPTH)
    }
}

/// Iterative deepening for `color` on `board`.
///
/// Runs depth 1, 2, ... while less than half the budget has been spent and
/// keeps the deepest completed answer. A forced mate ends the loop early,
/// and a round that times out is thrown away. If not even depth 1 finished,
/// the answer comes from a depth-0 search that ignores the clock.
///
/// Returns `None` only when `color` has nothing to play or the position is
/// already decided.
pub fn find_best_move<E: Evaluator + ?Sized>(
    board: &Board,
    color: Color,
    limits: &SearchLimits,
    evaluator: &E,
) -> Option<SearchResult> {
    let clock = &limits.clock;
    let mut best: Option<SearchResult> = None;
    let mut depth = 1;

    while depth <= limits.max_depth && !clock.is_half_time_up() {
        match best_move_at_depth(board, color, depth, clock, evaluator) {
            Ok(Some(result)) => {
                debug!(
                    "depth {} best {} score {:.3} nodes {} ({} nodes/ms, {:?} total)",
                    depth,
                    result.best_move,
                    result.score,
                    result.stats.nodes,
                    result.stats.nodes_per_ms(),
                    clock.elapsed()
                );
                let mate = result.delivers_mate;
                best = Some(result);
                if mate {
                    debug!("forced mate found at depth {depth}");
                    break;
                }
            }
            Ok(None) => return None,
            Err(timeout) => {
                warn!("abandoning depth {depth}: {timeout}");
                break;
            }
        }
        depth += 1;
    }

    if best.is_none() {
        debug!("no completed depth, falling back to static scoring");
        best = best_move_at_depth(board, color, 0, &SearchClock::unbounded(), evaluator)
            .ok()
            .flatten();
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::eval::{CenterWeighted, Material};
    use crate::board::Square;
    use std::time::Duration;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_stops_at_max_depth() {
        let board = Board::try_from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let result =
            find_best_move(&board, Color::White, &SearchLimits::fixed_depth(2), &Material).unwrap();
        assert_eq!(result.depth, 2);
        assert_eq!(result.best_move.to, sq("d5"));
    }

    #[test]
    fn test_mate_ends_deepening() {
        let board = Board::try_from_fen("r6k/2B5/6KN/8/8/8/p7/8 w - - 0 1").unwrap();
        let result =
            find_best_move(&board, Color::White, &SearchLimits::fixed_depth(4), &CenterWeighted)
                .unwrap();
        assert!(result.delivers_mate);
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move.to, sq("e5"));
    }

    #[test]
    fn test_mate_in_two_ends_deepening_at_two() {
        let board = Board::try_from_fen("7k/8/5K2/8/8/8/8/R7 w - - 0 1").unwrap();
        let result =
            find_best_move(&board, Color::White, &SearchLimits::fixed_depth(6), &CenterWeighted)
                .unwrap();
        assert!(result.delivers_mate);
        assert_eq!(result.depth, 2);
    }

    #[test]
    fn test_zero_budget_falls_back_to_static() {
        let board = Board::new();
        let limits = SearchLimits::with_budget(Duration::ZERO);
        let result = find_best_move(&board, Color::White, &limits, &CenterWeighted).unwrap();
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_move.color, Color::White);
    }

    #[test]
    fn test_decided_position_has_no_answer() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(find_best_move(&board, Color::White, &SearchLimits::default(), &Material).is_none());
    }
}
