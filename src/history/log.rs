//! Move log: the records of one game, in the order they were played.
//!
//! Two encodings:
//! - JSON (`serde_json`) for storage next to other game data
//! - bincode for compact archives

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::MoveRecord;
use crate::error::HistoryError;

/// The ordered records of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    pub records: Vec<MoveRecord>,
}

impl MoveLog {
    #[must_use]
    pub fn new(records: Vec<MoveRecord>) -> Self {
        Self { records }
    }

    /// Append a record.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record that ended the game, if the log holds a finished game.
    #[must_use]
    pub fn final_record(&self) -> Option<&MoveRecord> {
        self.records.last().filter(|record| record.is_final())
    }

    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, HistoryError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HistoryError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl From<&Vector<MoveRecord>> for MoveLog {
    fn from(history: &Vector<MoveRecord>) -> Self {
        history.iter().cloned().collect()
    }
}

impl FromIterator<MoveRecord> for MoveLog {
    fn from_iter<I: IntoIterator<Item = MoveRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
