//! Game position and status.
//!
//! ## Position
//!
//! The caller-owned value every engine call works on: board, turn counter
//! and status. The engine never mutates a position in place; transitions
//! produce a new one.
//!
//! ## GameStatus
//!
//! `InProgress` until a push completes a line, then `Finished` with the
//! `GameResult`.

use serde::{Deserialize, Serialize};

use super::board::{Board, Symbol};
use super::seat::{Mode, Seat, Team};

/// Result of a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// No line; play passes to the next seat.
    InProgress,
    /// The mover completed a line of their own symbol.
    WonByMover,
    /// The mover completed only the opponent's line.
    WonByOpponentLine,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// How the game ended (never `InProgress`).
    pub outcome: Outcome,

    /// Seat that made the final move.
    pub mover: Seat,

    /// Symbol whose line ended the game.
    pub winner: Symbol,
}

impl GameResult {
    /// Seats playing the winning symbol.
    #[must_use]
    pub fn winning_seats(&self, mode: Mode) -> Vec<Seat> {
        mode.seats()
            .iter()
            .copied()
            .filter(|&seat| mode.symbol_of(seat) == self.winner)
            .collect()
    }

    /// The winning team. `None` in DUO.
    #[must_use]
    pub fn winning_team(&self, mode: Mode) -> Option<Team> {
        match mode {
            Mode::Duo => None,
            Mode::Quartet => Team::of_symbol(self.winner),
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, mode: Mode, seat: Seat) -> bool {
        mode.has_seat(seat) && mode.symbol_of(seat) == self.winner
    }
}

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Finished(result) => Some(*result),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

/// Board, turn counter and status of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,

    /// Turn number (starts at 1). Advances only when a move does not end
    /// the game.
    pub turn: u32,

    pub status: GameStatus,
}

impl Position {
    /// Fresh board, turn 1.
    #[must_use]
    pub fn new() -> Self {
        Self::resume(Board::new(), 1)
    }

    /// An in-progress position from an existing board and turn.
    ///
    /// A `turn` of 0 is treated as 1.
    #[must_use]
    pub fn resume(board: Board, turn: u32) -> Self {
        Self {
            board,
            turn: turn.max(1),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
