//! Error types.
//!
//! Two families:
//! - `RuleViolation`: a legal-but-refused pick. Callers re-prompt the user.
//! - `EngineError`: the caller broke the engine's contract (bad index,
//!   illegal direction, wrong dot axis) or the game is already over.
//!
//! `HistoryError` covers encoding and replay of recorded games.

use crate::core::{CellIndex, Direction, Dot, Seat, Symbol};

/// Why a perimeter pick was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("cell {0} is not on the perimeter")]
    NotPerimeter(CellIndex),

    #[error("cannot pick up an opponent's piece")]
    OpponentPiece,

    #[error("only neutral pieces may be picked during the first round")]
    MustBeNeutral,

    #[error("own piece is not facing the acting seat")]
    NotFacingYou,
}

impl RuleViolation {
    /// Stable reason code, suitable for persistence or UI lookup.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            RuleViolation::NotPerimeter(_) => "NOT_PERIMETER",
            RuleViolation::OpponentPiece => "OPPONENT_PIECE",
            RuleViolation::MustBeNeutral => "MUST_BE_NEUTRAL",
            RuleViolation::NotFacingYou => "NOT_FACING_YOU",
        }
    }
}

/// Errors surfaced by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell index {0} is out of range (0..25)")]
    InvalidIndex(usize),

    #[error("cannot push cell {index} towards {direction}")]
    InvalidDirection { index: CellIndex, direction: Direction },

    #[error("dot {dot} is not on the axis of seat {seat}")]
    InvalidDotAxis { seat: Seat, dot: Dot },

    #[error("seat {0} must choose a dot orientation")]
    MissingDot(Seat),

    #[error("pick refused: {0}")]
    Rule(#[from] RuleViolation),

    #[error("game is already finished")]
    GameOver,

    #[error("turn counter cannot advance past {0}")]
    TurnOverflow(u32),

    #[error("board already holds a line of {0}")]
    BoardDecided(Symbol),

    #[error("config validation error: {0}")]
    Config(String),
}

impl EngineError {
    /// Stable reason code for the error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidIndex(_) => "INVALID_INDEX",
            EngineError::InvalidDirection { .. } => "INVALID_DIRECTION",
            EngineError::InvalidDotAxis { .. } => "INVALID_DOT_AXIS",
            EngineError::MissingDot(_) => "MISSING_DOT",
            EngineError::Rule(violation) => violation.code(),
            EngineError::GameOver => "GAME_OVER",
            EngineError::TurnOverflow(_) => "TURN_OVERFLOW",
            EngineError::BoardDecided(_) => "BOARD_DECIDED",
            EngineError::Config(_) => "INVALID_CONFIG",
        }
    }
}

/// Errors from move logs, board snapshots and replays.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("board snapshot has {0} cells, expected 25")]
    SnapshotLength(usize),

    #[error("replay has no moves")]
    Empty,

    #[error("recorded move {sequence} does not match the re-simulated game")]
    ReplayMismatch { sequence: u32 },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}
