//! Bounded log buffer consumed by the monitoring view.
//!
//! Keeps the most recent entries newest-first and evicts the oldest once
//! the configured capacity is exceeded. Every append is mirrored to
//! `tracing` so the same events reach the process log.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::domain::models::{LogEntry, LogLevel};

/// Default number of entries kept in memory.
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// Capacity-bounded, newest-first ring of log entries.
///
/// Cloning is cheap and yields a handle onto the same buffer.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    next_id: Arc<AtomicU64>,
    capacity: usize,
}

impl LogBuffer {
    /// Create a buffer holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity + 1))),
            next_id: Arc::new(AtomicU64::new(1)),
            capacity,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a new entry and return a copy of it.
    pub async fn append(
        &self,
        level: LogLevel,
        module: impl Into<String>,
        message: impl Into<String>,
        latency_ms: Option<u64>,
    ) -> LogEntry {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = LogEntry::new(id, level, module, message, latency_ms);

        match level {
            LogLevel::Error => error!(
                id,
                module = %entry.module,
                latency_ms = ?entry.latency_ms,
                "{}", entry.message
            ),
            LogLevel::Warning => warn!(
                id,
                module = %entry.module,
                latency_ms = ?entry.latency_ms,
                "{}", entry.message
            ),
            LogLevel::Info | LogLevel::Success => info!(
                id,
                severity = %level,
                module = %entry.module,
                latency_ms = ?entry.latency_ms,
                "{}", entry.message
            ),
        }

        // Ids are taken before the lock, so order by id rather than arrival.
        let mut entries = self.entries.write().await;
        let position = entries.iter().position(|e| e.id < id).unwrap_or(entries.len());
        entries.insert(position, entry.clone());
        entries.truncate(self.capacity);

        entry
    }

    /// Snapshot of the buffer, newest-first.
    pub async fn read_all(&self) -> Vec<LogEntry> {
        self.entries.read().await.iter().cloned().collect()
    }

    /// Up to `limit` most recent entries, newest-first.
    pub async fn recent(&self, limit: usize) -> Vec<LogEntry> {
        self.entries.read().await.iter().take(limit).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop all entries. Identifiers keep increasing afterwards.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
