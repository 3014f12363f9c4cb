//! Command-line arguments of the console binary.

use std::time::Duration;

use clap::{builder::PossibleValue, Parser, ValueEnum};

use crate::board::{Board, Color, EvaluatorKind, FenError, START_FEN};
use crate::engine::{EngineConfig, DEFAULT_TIMEOUT};

/// Play chess against a minimax engine in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Seconds the engine may spend on each reply.
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs_f64())]
    pub timeout: f64,

    /// Start from this FEN instead of the initial position.
    #[arg(short, long, default_value = START_FEN)]
    pub fen: String,

    /// Score positions by material only, without the center bonus.
    #[arg(short, long, default_value = "false")]
    pub material_only: bool,

    /// The side the human plays.
    #[arg(long, default_value = "white")]
    pub human: Color,

    /// More log output; repeat for more (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Engine settings described by these arguments
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        let evaluator = if self.material_only {
            EvaluatorKind::Material
        } else {
            EvaluatorKind::CenterWeighted
        };
        let timeout = Duration::try_from_secs_f64(self.timeout).unwrap_or(DEFAULT_TIMEOUT);
        EngineConfig::default()
            .with_timeout(timeout)
            .with_evaluator(evaluator)
    }

    /// The starting board
    pub fn board(&self) -> Result<Board, FenError> {
        Board::try_from_fen(&self.fen)
    }

    /// Log filter implied by the `-v` count
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

impl ValueEnum for Color {
    fn value_variants<'a>() -> &'a [Self] {
        &Color::BOTH
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            Color::White => PossibleValue::new("white").alias("w"),
            Color::Black => PossibleValue::new("black").alias("b"),
        };
        Some(value)
    }
}
