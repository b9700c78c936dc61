//! Bounded, most-recent-first selection history

use crate::types::SelectionRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Recent selection records, newest at index 0.
///
/// Updates return a new value; the caller decides where to persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionHistory {
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default)]
    records: Vec<SelectionRecord>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    /// History with `record` in front; entries beyond capacity are dropped
    pub fn with_record(&self, record: SelectionRecord) -> Self {
        let records = std::iter::once(record)
            .chain(self.records.iter().cloned())
            .take(self.capacity)
            .collect();
        Self {
            capacity: self.capacity,
            records,
        }
    }

    /// Same records under a different capacity, truncating if it shrank
    pub fn resized(&self, capacity: usize) -> Self {
        Self {
            capacity,
            records: self.records.iter().take(capacity).cloned().collect(),
        }
    }

    pub fn latest(&self) -> Option<&SelectionRecord> {
        self.records.first()
    }

    pub fn records(&self) -> &[SelectionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionRecord> {
        self.records.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SelectionHistory {
    fn default() -> Self {
        Self::new()
    }
}
