//! Key-value persistence contract and implementations.
//!
//! # Responsibility
//! - Define the synchronous `get`/`set` contract the note services persist through.
//! - Name the fixed keys under which notes and the display flag live.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - `set` overwrites the whole value for a key; there are no partial writes.
//! - A successful `set` is visible to the next `get` on the same store.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteKvStore;

/// Key holding the JSON array of `{id, text}` note records.
pub const NOTES_KEY: &str = "notes";
/// Key holding the JSON boolean dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport or encoding failure while talking to a key-value store.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Encode { key, source } => write!(f, "failed to encode value for `{key}`: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous string key-value store.
///
/// Methods take `&self` so one store can back several services at once;
/// implementations use interior mutability where they need it.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never set.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
