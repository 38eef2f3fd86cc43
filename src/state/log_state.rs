//! LogState - Log Messages with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::theme::colors::CepColors;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => CepColors::success(),
            LogLevel::Warn => CepColors::warning(),
            LogLevel::Error => CepColors::danger(),
            LogLevel::Debug => CepColors::text_muted(),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for log messages using a ring buffer
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
    /// Whether the log panel is visible
    pub visible: bool,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
            visible: false,
        }
    }

    /// Push a new log entry, evicting the oldest at capacity
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Get all log entries
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Toggle panel visibility
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_eviction() {
        let mut state = LogState::new(2);
        state.push(LogLevel::Info, "first", Local::now());
        state.push(LogLevel::Info, "second", Local::now());
        state.push(LogLevel::Warn, "third", Local::now());

        assert_eq!(state.len(), 2);
        let messages: Vec<_> = state.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn test_entry_ids_are_monotonic() {
        let mut state = LogState::new(10);
        state.push(LogLevel::Info, "a", Local::now());
        state.push(LogLevel::Info, "b", Local::now());
        let ids: Vec<_> = state.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
