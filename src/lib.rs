//! # quixo-engine
//!
//! Rules engine for Quixo, the 5×5 push-the-cube game, in its two-player
//! (DUO) and four-player team (QUARTET) variants.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: The engine is a function of `(position, move)`.
//!    It never mutates its inputs and performs no I/O; the caller owns and
//!    persists every `Position` and `MoveRecord`.
//!
//! 2. **Closed Mappings**: Seats, teams, symbols and dots are enums with
//!    total mappings between them. There is no "unknown seat".
//!
//! 3. **Validate Before Mutate**: Every move is re-checked by the engine.
//!    A refused move leaves the position exactly as it was.
//!
//! ## Architecture
//!
//! - **Mover Wins First**: A push that completes lines for both symbols is
//!   won by the mover.
//!
//! - **Persistent History**: `GameSession` keeps its move history in an
//!   `im::Vector`, so sessions clone in O(1).
//!
//! ## Modules
//!
//! - `core`: Board, cells, seats and modes, moves, configuration, position
//! - `rules`: Pick validation, push, line detection, `RulesEngine` trait
//! - `session`: `GameSession`, a caller-held game with history
//! - `history`: Move logs, replay and statistics
//! - `error`: Rule violations and engine errors

pub mod core;
pub mod error;
pub mod history;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, CellIndex, Dot, Symbol, BOARD_CELLS, BOARD_SIZE,
    Mode, PlayerId, Seat, SeatMap, Team,
    Direction, Move, MoveRecord, PushAxis, PushEnd,
    GameConfig, Participant,
    GameResult, GameStatus, Outcome, Position,
};

pub use crate::rules::{
    can_pick, has_line, placed_cell, push, winning_lines,
    PickApproval, PushResult, QuixoRules, RulesEngine, Transition,
};

pub use crate::session::GameSession;

pub use crate::history::{
    duo_stats, quartet_stats, GameSummary, MoveLog, PlayerStats, Replay, TeamStats,
};

pub use crate::error::{EngineError, HistoryError, RuleViolation};
