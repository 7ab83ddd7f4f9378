//! Edit debouncing
//!
//! Batches rapid-fire field edits (keystrokes in a textarea) behind a
//! fixed quiet window before merge evaluation runs. This is a
//! write-amplification mitigation, not a correctness requirement; the
//! caller drives time explicitly so behavior is deterministic.

use std::time::{Duration, Instant};

use super::engine::ChangeSet;
use super::error::PathError;
use crate::config::constants::merge::DEBOUNCE_WINDOW_MS;

/// Accumulates edits and reports them due after a quiet window
///
/// Every recorded edit pushes the deadline out by the full window;
/// edits to different rules within one window all land in the same
/// flushed batch.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: ChangeSet,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: ChangeSet::new(),
            deadline: None,
        }
    }

    pub fn with_default_window() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_WINDOW_MS))
    }

    /// Record one edit at `now`, resetting the quiet window
    pub fn record(&mut self, path: &str, value: &str, now: Instant) -> Result<(), PathError> {
        self.pending.record(path, value)?;
        self.deadline = Some(now + self.window);
        Ok(())
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Whether the pending batch is ready for merge evaluation
    pub fn is_due(&self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) => !self.pending.is_empty() && now >= deadline,
            None => false,
        }
    }

    /// Take the pending batch if its quiet window has elapsed
    pub fn flush_due(&mut self, now: Instant) -> Option<ChangeSet> {
        if self.is_due(now) {
            Some(self.take())
        } else {
            None
        }
    }

    /// Take the pending batch unconditionally (explicit save)
    pub fn take(&mut self) -> ChangeSet {
        self.deadline = None;
        std::mem::take(&mut self.pending)
    }
}
