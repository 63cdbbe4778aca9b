//! Core use-case services.
//!
//! # Responsibility
//! - Hold client state in memory and write it through to a `KeyValueStore`.
//! - Keep callers decoupled from the storage backend.

pub mod display_preference;
pub mod note_store;
