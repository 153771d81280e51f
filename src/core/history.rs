//! Move log tracking.
//!
//! Every accepted move is recorded in order with a monotonically increasing
//! sequence number and the time it was applied.

use super::tower::peg_label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Record of a single accepted move.
///
/// # Example
///
/// ```rust
/// use hanoi::core::MoveRecord;
/// use chrono::Utc;
///
/// let record = MoveRecord {
///     from: 0,
///     to: 2,
///     disk_size: 1,
///     sequence: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to_string(), "Disk 1 from A to C");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Tower the disk left
    pub from: usize,
    /// Tower the disk landed on
    pub to: usize,
    /// Size of the moved disk
    pub disk_size: u32,
    /// 1-based position of this move within the current game
    pub sequence: u64,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Disk {} from {} to {}",
            self.disk_size,
            peg_label(self.from),
            peg_label(self.to)
        )
    }
}

/// Ordered log of the moves made in the current game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a move, assigning it the next sequence number.
    pub fn record(&mut self, from: usize, to: usize, disk_size: u32) -> &MoveRecord {
        let sequence = self.next_sequence();
        self.records.push(MoveRecord {
            from,
            to,
            disk_size,
            sequence,
            timestamp: Utc::now(),
        });
        &self.records[self.records.len() - 1]
    }

    /// Sequence number the next recorded move will receive
    pub fn next_sequence(&self) -> u64 {
        self.records.last().map_or(1, |last| last.sequence + 1)
    }

    /// All records in the order they were applied
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Numbered human-readable lines, one per move.
    ///
    /// An empty log yields a single placeholder line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi::core::MoveLog;
    ///
    /// let mut log = MoveLog::new();
    /// assert_eq!(log.describe(), vec!["No moves recorded yet.".to_string()]);
    ///
    /// log.record(0, 1, 1);
    /// log.record(0, 2, 2);
    /// assert_eq!(
    ///     log.describe(),
    ///     vec![
    ///         "1. Disk 1 from A to B".to_string(),
    ///         "2. Disk 2 from A to C".to_string(),
    ///     ]
    /// );
    /// ```
    pub fn describe(&self) -> Vec<String> {
        if self.records.is_empty() {
            return vec!["No moves recorded yet.".to_string()];
        }
        self.records
            .iter()
            .map(|record| format!("{}. {}", record.sequence, record))
            .collect()
    }

    /// Elapsed time between the first and last move.
    ///
    /// Returns `None` if no moves have been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = MoveLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert!(log.duration().is_none());
        assert_eq!(log.next_sequence(), 1);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut log = MoveLog::new();
        log.record(0, 2, 1);
        log.record(0, 1, 2);
        log.record(2, 1, 1);

        let sequences: Vec<u64> = log.records().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
        assert_eq!(log.next_sequence(), 4);
    }

    #[test]
    fn record_returns_the_new_entry() {
        let mut log = MoveLog::new();
        let record = log.record(1, 2, 4).clone();

        assert_eq!(record.from, 1);
        assert_eq!(record.to, 2);
        assert_eq!(record.disk_size, 4);
        assert_eq!(record.sequence, 1);
        assert_eq!(log.last(), Some(&record));
    }

    #[test]
    fn record_displays_with_peg_labels() {
        let mut log = MoveLog::new();
        let record = log.record(2, 0, 3);
        assert_eq!(record.to_string(), "Disk 3 from C to A");
    }

    #[test]
    fn single_move_has_zero_duration() {
        let mut log = MoveLog::new();
        log.record(0, 1, 1);
        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut log = MoveLog::new();
        log.record(0, 1, 1);
        std::thread::sleep(Duration::from_millis(10));
        log.record(0, 2, 2);

        let duration = log.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn clear_restarts_sequence() {
        let mut log = MoveLog::new();
        log.record(0, 1, 1);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.next_sequence(), 1);
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = MoveLog::new();
        log.record(0, 2, 1);

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: MoveLog = serde_json::from_str(&json).unwrap();

        assert_eq!(log.records(), deserialized.records());
    }
}
