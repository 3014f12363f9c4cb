//! Game-tree search.
//!
//! Minimax with alpha-beta pruning over pseudo-legal moves. White maximizes
//! and Black minimizes; every window starts as the non-terminal score band
//! `[BLACK_WIN_THRESHOLD, WHITE_WIN_THRESHOLD]`. Each node clones the board
//! before applying its move, so no position is ever shared between branches.
//!
//! Iterative deepening runs [`best_move_at_depth`] at increasing depth under a
//! [`SearchClock`] and keeps the deepest completed answer.

mod alphabeta;
mod iterative;

use std::fmt;
use std::time::{Duration, Instant};

use super::Move;

pub use alphabeta::best_move_at_depth;
pub use iterative::{find_best_move, SearchLimits};

/// Default hard cap on iterative-deepening rounds
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Wall-clock budget for one engine reply.
///
/// The search polls [`SearchClock::is_time_up`] at every node. The half-way
/// mark only decides whether another deepening round is started.
#[derive(Clone, Copy, Debug)]
pub struct SearchClock {
    start: Instant,
    half_deadline: Option<Instant>,
    deadline: Option<Instant>,
}

impl SearchClock {
    /// Start a clock that expires `budget` from now
    #[must_use]
    pub fn start(budget: Duration) -> Self {
        let start = Instant::now();
        SearchClock {
            start,
            half_deadline: start.checked_add(budget / 2),
            deadline: start.checked_add(budget),
        }
    }

    /// A clock that never runs out
    #[must_use]
    pub fn unbounded() -> Self {
        SearchClock {
            start: Instant::now(),
            half_deadline: None,
            deadline: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_time_up(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    #[inline]
    #[must_use]
    pub fn is_half_time_up(&self) -> bool {
        self.half_deadline.is_some_and(|d| Instant::now() >= d)
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// The clock ran out in the middle of a search.
///
/// Only the iterative-deepening loop handles this; it means "no answer at
/// this depth", never that the position is bad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTimeout {
    /// Remaining plies at the node that noticed the timeout
    pub depth: u32,
}

impl fmt::Display for SearchTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search timed out with {} plies remaining", self.depth)
    }
}

impl std::error::Error for SearchTimeout {}

/// Statistics tracked during one fixed-depth search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    /// Nodes per millisecond, or the raw node count below one millisecond
    #[must_use]
    pub fn nodes_per_ms(&self) -> u64 {
        match self.elapsed.as_millis() {
            0 => self.nodes,
            ms => self.nodes / ms as u64,
        }
    }
}

/// The move picked by a search and what it is worth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Minimax score of `best_move`, from White's point of view
    pub score: f32,
    /// Every reply to `best_move` was searched and all of them lose the king
    pub delivers_mate: bool,
    /// Depth (in rounds) that produced this result
    pub depth: u32,
    pub stats: SearchStats,
}

/// Score of a searched move plus whether the opponent was proven mated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NodeScore {
    pub(crate) score: f32,
    pub(crate) mated: bool,
}
