//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_move.rs` - Move application and state bookkeeping
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
