//! Step through a recorded game.
//!
//! A `Replay` holds the records of one game and a cursor over them. The
//! cursor saturates at both ends. `verify` re-plays every recorded move on
//! a fresh session and checks that the engine agrees with the log.

use tracing::{debug, warn};

use super::log::MoveLog;
use crate::core::{Board, GameConfig, MoveRecord};
use crate::error::HistoryError;
use crate::session::GameSession;

/// Cursor over the records of one game.
#[derive(Clone, Debug)]
pub struct Replay {
    records: Vec<MoveRecord>,
    cursor: usize,
}

impl Replay {
    /// Start a replay at the first move. Fails on an empty log.
    pub fn new(records: Vec<MoveRecord>) -> Result<Self, HistoryError> {
        if records.is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(Self { records, cursor: 0 })
    }

    pub fn from_log(log: MoveLog) -> Result<Self, HistoryError> {
        Self::new(log.records)
    }

    pub fn first(&mut self) -> &MoveRecord {
        self.cursor = 0;
        self.current()
    }

    pub fn last(&mut self) -> &MoveRecord {
        self.cursor = self.records.len() - 1;
        self.current()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &MoveRecord {
        self.cursor = (self.cursor + 1).min(self.records.len() - 1);
        self.current()
    }

    pub fn prev(&mut self) -> &MoveRecord {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// 0-based cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true; a replay always holds at least one move.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> &MoveRecord {
        &self.records[self.cursor]
    }

    /// Board after the move under the cursor.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Board before the first move.
    #[must_use]
    pub fn initial_board(&self) -> Board {
        Board::new()
    }

    #[must_use]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Re-play every record on a fresh session for `config`.
    ///
    /// Fails with `ReplayMismatch` at the first record the engine refuses
    /// or reproduces differently (board snapshot, flags, placement).
    pub fn verify(&self, config: &GameConfig) -> Result<(), HistoryError> {
        let mut session = GameSession::new(config.clone())?;

        for recorded in self.records() {
            let sequence = recorded.sequence;
            let replayed = session.play(recorded.as_move()).map_err(|err| {
                warn!(sequence, error = %err, "recorded move refused on replay");
                HistoryError::ReplayMismatch { sequence }
            })?;

            if &replayed != recorded {
                warn!(sequence, "recorded move disagrees with replay");
                return Err(HistoryError::ReplayMismatch { sequence });
            }
        }

        debug!(moves = self.records.len(), "replay verified");
        Ok(())
    }
}
