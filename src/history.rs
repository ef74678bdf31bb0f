//! Bounded, newest-first ledger of counter actions.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;

use uuid::Uuid;

use crate::counter::CounterAction;

/// Maximum number of entries kept in the ledger.
pub const HISTORY_LIMIT: usize = 10;

/// Source of wall-clock time for new entries.
pub type Clock = Arc<dyn Fn() -> SystemTime + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub action: CounterAction,
    /// Counter value right after the action.
    pub value: i64,
    pub timestamp: SystemTime,
}

pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
    clock: Clock,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemTime::now))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_LIMIT + 1),
            clock,
        }
    }

    /// Prepend a new entry and evict anything past [`HISTORY_LIMIT`].
    pub fn record(&mut self, action: CounterAction, value: i64) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry {
            id: Uuid::new_v4(),
            action,
            value,
            timestamp: (self.clock)(),
        });
        self.entries.truncate(HISTORY_LIMIT);
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}
