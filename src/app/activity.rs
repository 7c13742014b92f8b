use chrono::Local;
use std::collections::VecDeque;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
    Success,
    Error,
    Info,
}

impl LogKind {
    /// Console marker printed before the message
    pub fn prefix(&self) -> &'static str {
        match self {
            LogKind::Success => "✓ ",
            LogKind::Error => "✕ ",
            LogKind::Info => "➜ ",
        }
    }
}

/// One line of the activity console. Never modified after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub id: Uuid,
    pub message: String,
    pub kind: LogKind,
    /// Local wall-clock time, `HH:MM:SS`
    pub timestamp: String,
}

/// Append-only activity log, kept in call order.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    limit: Option<usize>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` entries, dropping the oldest first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn append(&mut self, message: impl Into<String>, kind: LogKind) -> LogEntry {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        };

        match kind {
            LogKind::Error => warn!(target: "activity", "{}", entry.message),
            LogKind::Success | LogKind::Info => info!(target: "activity", "{}", entry.message),
        }

        self.entries.push_back(entry.clone());
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }

        entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries newest first, the order the console shows them in
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.iter().rev()
    }
}
