//! Move history tracking.
//!
//! Every successful command leaves one timestamped, human-readable record.
//! The history only ever grows: records are never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful command.
///
/// # Example
///
/// ```rust
/// use stackbot::core::HistoryRecord;
/// use chrono::Utc;
///
/// let record = HistoryRecord {
///     timestamp: Utc::now(),
///     description: "Moved up".to_string(),
/// };
/// assert_eq!(record.description, "Moved up");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the command was applied
    pub timestamp: DateTime<Utc>,
    /// What the command did, e.g. `"Picked up a red circle"`
    pub description: String,
}

impl HistoryRecord {
    /// Create a record stamped with the current time.
    pub fn now(description: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            description: description.into(),
        }
    }
}

/// Ordered, append-only history of successful commands.
///
/// # Example
///
/// ```rust
/// use stackbot::core::{HistoryRecord, MoveHistory};
///
/// let mut history = MoveHistory::new();
/// history.record(HistoryRecord::now("Moved right"));
/// history.record(HistoryRecord::now("Moved down"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.descriptions(), ["Moved right", "Moved down"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<HistoryRecord>,
}

impl MoveHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record to the end of the history.
    pub fn record(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Descriptions of all records, oldest first.
    pub fn descriptions(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.description.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Time elapsed between the first and last record.
    ///
    /// Returns `None` for an empty history, or if the clock went backwards
    /// between the two records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
