//! Engine controller for playing a game against a human.
//!
//! Validates and applies the human's moves, searches for the engine's reply
//! under a wall-clock budget, and keeps the board's status and score current.

mod config;
mod controller;

pub use config::{EngineConfig, DEFAULT_TIMEOUT};
pub use controller::{classify_status, EngineController};
