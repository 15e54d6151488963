//! Game history: move logs, replay and win statistics.
//!
//! - `log`: `MoveLog` with JSON and bincode encodings
//! - `replay`: cursor over a recorded game, with re-simulation
//! - `stats`: per-player (DUO) and per-team (QUARTET) effectiveness

pub mod log;
pub mod replay;
pub mod stats;

pub use log::MoveLog;
pub use replay::Replay;
pub use stats::{duo_stats, quartet_stats, GameSummary, PlayerStats, TeamStats};
