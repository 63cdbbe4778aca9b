//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its identifier type.
//! - Own the "blank text" rule used to reject empty notes.
//!
//! # Invariants
//! - `id` is unique within one note list and never reused.
//! - `text` is stored exactly as provided; trimming only decides blankness.

use serde::{Deserialize, Serialize};

/// Identifier for one note.
///
/// Persisted as a JSON integer, so it stays a plain signed 64-bit value.
pub type NoteId = i64;

/// One user-authored text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
}

impl Note {
    pub fn new(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Returns whether this note's text matches `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased by the caller so that one
    /// query can be reused across the whole list.
    pub(crate) fn matches_lowercase(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.text.to_lowercase().contains(needle_lower)
    }
}

/// Returns `true` when `text` holds nothing but whitespace.
pub fn is_blank_text(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{is_blank_text, Note};

    #[test]
    fn blank_text_ignores_surrounding_whitespace() {
        assert!(is_blank_text(""));
        assert!(is_blank_text("  \t\n"));
        assert!(!is_blank_text("  x  "));
    }

    #[test]
    fn serializes_as_id_text_record() {
        let note = Note::new(7, "  keep spaces ");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"  keep spaces "}"#);
    }

    #[test]
    fn matches_is_case_insensitive_on_note_side() {
        let note = Note::new(1, "Buy Milk");
        assert!(note.matches_lowercase("milk"));
        assert!(note.matches_lowercase(""));
        assert!(!note.matches_lowercase("dog"));
    }
}
