//! Engine configuration.

use std::time::Duration;

use crate::board::{EvaluatorKind, SearchLimits, DEFAULT_MAX_DEPTH};

/// Per-reply wall-clock budget used by the console
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Settings for computing engine replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Wall-clock budget for one reply. Deepening stops at the half-way mark.
    pub timeout: Duration,
    /// Hard cap on iterative-deepening rounds
    pub max_depth: u32,
    pub evaluator: EvaluatorKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_depth: DEFAULT_MAX_DEPTH,
            evaluator: EvaluatorKind::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Start the clock for one reply
    #[must_use]
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_depth: self.max_depth,
            ..SearchLimits::with_budget(self.timeout)
        }
    }
}
