//! Core note-collection logic for Notepad.
//! Owns the note list, its write-through persistence, and the display flag.

pub mod db;
pub mod ids;
pub mod kv;
pub mod logging;
pub mod model;
pub mod service;

pub use ids::{ClockIds, IdGenerator, SequentialIds};
pub use kv::{
    KeyValueStore, MemoryStore, SqliteKvStore, StoreError, StoreResult, DARK_MODE_KEY, NOTES_KEY,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{is_blank_text, Note, NoteId};
pub use service::display_preference::DisplayPreference;
pub use service::note_store::NoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
