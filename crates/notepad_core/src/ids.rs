//! Note id generators.
//!
//! # Responsibility
//! - Hand out fresh `NoteId` values for newly created notes.
//! - Stay ahead of ids already present in a loaded note list.
//!
//! # Invariants
//! - Every id returned by `next_id` is strictly greater than every id
//!   previously returned or passed to `observe`.
//! - Once no greater id exists, `next_id` returns `None` instead of wrapping.

use crate::model::note::NoteId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh note ids.
pub trait IdGenerator {
    /// Returns a new id greater than any id seen so far, or `None` when the
    /// id space above the largest seen id is exhausted.
    fn next_id(&mut self) -> Option<NoteId>;
    /// Records an id that already exists, so later ids never collide with it.
    fn observe(&mut self, existing: NoteId);
}

/// Counter-based ids: 1, 2, 3, ...
///
/// Deterministic, which keeps tests and fixtures stable.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: NoteId,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting after `last`.
    pub fn starting_after(last: NoteId) -> Self {
        Self { last }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<NoteId> {
        self.last = self.last.checked_add(1)?;
        Some(self.last)
    }

    fn observe(&mut self, existing: NoteId) {
        self.last = self.last.max(existing);
    }
}

/// Wall-clock ids in Unix epoch milliseconds.
///
/// Two notes created within the same millisecond get consecutive values
/// instead of colliding.
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: NoteId,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> Option<NoteId> {
        let now = now_epoch_ms();
        self.last = if now > self.last {
            now
        } else {
            self.last.checked_add(1)?
        };
        Some(self.last)
    }

    fn observe(&mut self, existing: NoteId) {
        self.last = self.last.max(existing);
    }
}

fn now_epoch_ms() -> NoteId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| NoteId::try_from(elapsed.as_millis()).unwrap_or(NoteId::MAX))
        .unwrap_or(0)
}
