use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One tick-stamped, structured log entry (§3 `logs`). This is
/// domain-facing data owned by the snapshot, distinct from the
/// `tracing`-based developer diagnostics the engine also emits (§1
/// ambient stack).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub tick: u64,
    pub source: String,
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    pub fn new(
        tick: u64,
        source: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            tick,
            source: source.into(),
            severity,
            message: message.into(),
        }
    }
}

/// A bounded, append-only tail of log entries (§9 "Logs are a bounded
/// ring appended to the snapshot").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRing {
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for LogRing {
    fn default() -> Self {
        Self::new(500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_truncates_oldest_entries() {
        let mut ring = LogRing::new(2);
        ring.push(LogEntry::new(1, "a", Severity::Info, "one"));
        ring.push(LogEntry::new(2, "a", Severity::Info, "two"));
        ring.push(LogEntry::new(3, "a", Severity::Info, "three"));
        assert_eq!(ring.len(), 2);
        let msgs: Vec<_> = ring.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, vec!["two", "three"]);
    }
}
