//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the canonical note record shared by store and service code.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` that is unique within its list.

pub mod note;
