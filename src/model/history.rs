use std::fmt::Debug;
use std::slice::Iter;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::error::{Error, Result};

/// Format of the timestamp prefixed to every history entry.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A source of the current wall-clock time.
pub trait Clock: Debug + Send + Sync {
    /// The current local time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at a single instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// An append-only log of timestamped action descriptions.
/// Entries can be read, but never modified or removed.
#[derive(Debug, Clone)]
pub struct ActionHistory {
    entries: Vec<String>,
    clock: Arc<dyn Clock>,
}

impl ActionHistory {
    /// Create an empty history stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty history stamped by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Append `"<timestamp> - <description>"`.
    pub fn record(&mut self, description: &str) -> Result<()> {
        if description.is_empty() {
            return Err(Error::invalid_argument("an action description cannot be empty"));
        }
        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT);
        self.entries.push(format!("{timestamp} - {description}"));
        Ok(())
    }

    /// An owned copy of every entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The clock used to stamp entries, for sharing with child entities.
    pub(crate) fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    impl FixedClock {
        pub fn example() -> Self {
            let instant = NaiveDate::from_ymd_opt(2024, 3, 7)
                .and_then(|date| date.and_hms_opt(9, 5, 42))
                .unwrap();
            Self(instant)
        }
    }

    fn fixed_history() -> ActionHistory {
        ActionHistory::with_clock(Arc::new(FixedClock::example()))
    }

    #[test]
    fn record_formats_timestamp() {
        let mut history = fixed_history();
        history.record("Ballot box sealed").unwrap();
        assert_eq!(history.entries(), vec!["07/03/2024 09:05:42 - Ballot box sealed"]);
    }

    #[test]
    fn record_rejects_empty_description() {
        let mut history = fixed_history();
        assert!(matches!(history.record(""), Err(Error::InvalidArgument(_))));
        assert!(history.is_empty());
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let mut history = fixed_history();
        for action in ["first", "second", "third"] {
            history.record(action).unwrap();
        }
        let descriptions: Vec<_> = history
            .iter()
            .map(|entry| entry.split(" - ").nth(1).unwrap())
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn entries_are_a_snapshot() {
        let mut history = fixed_history();
        history.record("untouched").unwrap();

        let mut copy = history.entries();
        copy.push("tampered".to_string());
        copy[0].clear();

        assert_eq!(history.entries(), vec!["07/03/2024 09:05:42 - untouched"]);
    }

    #[test]
    fn system_clock_stamps_current_time() {
        let mut history = ActionHistory::new();
        let before = Local::now().naive_local();
        history.record("now").unwrap();
        let entries = history.entries();
        let (timestamp, _) = entries[0].split_once(" - ").unwrap();
        let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap();
        // The format drops sub-second precision.
        assert!(parsed >= before - chrono::Duration::seconds(1));
    }
}
