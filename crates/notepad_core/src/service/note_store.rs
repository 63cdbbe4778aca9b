//! Note list service.
//!
//! # Responsibility
//! - Own the ordered in-memory note list.
//! - Apply add/update/delete/reorder and write the full list back after each.
//! - Serve search as a lazy projection over memory.
//!
//! # Invariants
//! - Note ids in the list are unique.
//! - The store is read exactly once, in `load`.
//! - After every successful mutation the `notes` key holds the whole current list.
//! - Requests that match nothing, and blank adds, leave memory and store untouched.

use crate::ids::{IdGenerator, SequentialIds};
use crate::kv::{KeyValueStore, StoreError, StoreResult, NOTES_KEY};
use crate::model::note::{is_blank_text, Note, NoteId};
use log::{debug, error, info, warn};
use std::collections::HashSet;

/// In-memory note list synchronized to a key-value store.
pub struct NoteStore<S: KeyValueStore, G: IdGenerator = SequentialIds> {
    store: S,
    ids: G,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the note list using counter-based ids.
    pub fn open(store: S) -> StoreResult<Self> {
        Self::load(store, SequentialIds::new())
    }
}

impl<S: KeyValueStore, G: IdGenerator> NoteStore<S, G> {
    /// Loads the persisted note list from `store`.
    ///
    /// A missing, `null`, or unparseable value yields an empty list. Every
    /// loaded id is reported to `ids` so new notes never reuse one.
    ///
    /// # Errors
    /// - Returns an error only when the store itself cannot be read.
    pub fn load(store: S, mut ids: G) -> StoreResult<Self> {
        let notes = match store.get(NOTES_KEY)? {
            Some(raw) => decode_notes(&raw),
            None => Vec::new(),
        };
        for note in &notes {
            ids.observe(note.id);
        }
        info!(
            "event=notes_load module=notes status=ok count={}",
            notes.len()
        );
        Ok(Self { store, ids, notes })
    }

    /// Appends a new note with a fresh id.
    ///
    /// Returns `Ok(None)` without touching the store when `text` is blank,
    /// or when the id generator has no id left above the stored ones.
    /// The text is stored as given, surrounding whitespace included.
    pub fn add(&mut self, text: impl Into<String>) -> StoreResult<Option<Note>> {
        let text = text.into();
        if is_blank_text(&text) {
            debug!("event=note_add module=notes status=skipped reason=blank_text");
            return Ok(None);
        }

        let Some(id) = self.ids.next_id() else {
            warn!("event=note_add module=notes status=skipped reason=id_space_exhausted");
            return Ok(None);
        };
        let note = Note::new(id, text);
        self.notes.push(note.clone());
        self.persist("note_add")?;
        info!(
            "event=note_add module=notes status=ok id={} text_len={} count={}",
            note.id,
            note.text.chars().count(),
            self.notes.len()
        );
        Ok(Some(note))
    }

    /// Replaces the text of note `id`, keeping its id and position.
    pub fn update(&mut self, id: NoteId, text: impl Into<String>) -> StoreResult<()> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_update module=notes status=skipped reason=not_found id={id}");
            return Ok(());
        };

        note.text = text.into();
        let text_len = note.text.chars().count();
        self.persist("note_update")?;
        info!("event=note_update module=notes status=ok id={id} text_len={text_len}");
        Ok(())
    }

    /// Removes note `id` from the list.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            debug!("event=note_delete module=notes status=skipped reason=not_found id={id}");
            return Ok(());
        };

        self.notes.remove(index);
        self.persist("note_delete")?;
        info!(
            "event=note_delete module=notes status=ok id={id} count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Handles a drop of note `dragged_id`: the note always moves to the end.
    ///
    /// The drop target is not considered. Use `reorder_to` to place a note
    /// at a specific index.
    pub fn reorder(&mut self, dragged_id: NoteId) -> StoreResult<()> {
        self.reorder_to(dragged_id, usize::MAX)
    }

    /// Moves note `dragged_id` so that it ends up at `target_index`.
    ///
    /// Indexes past the end are clamped to the last position.
    pub fn reorder_to(&mut self, dragged_id: NoteId, target_index: usize) -> StoreResult<()> {
        let Some(from) = self.position(dragged_id) else {
            debug!(
                "event=note_reorder module=notes status=skipped reason=not_found id={dragged_id}"
            );
            return Ok(());
        };

        let note = self.notes.remove(from);
        let to = target_index.min(self.notes.len());
        self.notes.insert(to, note);
        self.persist("note_reorder")?;
        info!("event=note_reorder module=notes status=ok id={dragged_id} from={from} to={to}");
        Ok(())
    }

    /// Yields, in list order, every note whose text contains `query`
    /// ignoring case. An empty query yields every note.
    pub fn search(&self, query: &str) -> impl Iterator<Item = &Note> + '_ {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(move |note| note.matches_lowercase(&needle))
    }

    /// Current notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Consumes the service and hands back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn persist(&self, event: &'static str) -> StoreResult<()> {
        let result = serde_json::to_string(&self.notes)
            .map_err(|source| StoreError::Encode {
                key: NOTES_KEY,
                source,
            })
            .and_then(|payload| self.store.set(NOTES_KEY, &payload));

        if let Err(err) = &result {
            error!("event={event} module=notes status=error error_code=persist_failed error={err}");
        }
        result
    }
}

fn decode_notes(raw: &str) -> Vec<Note> {
    let notes = match serde_json::from_str::<Option<Vec<Note>>>(raw) {
        Ok(notes) => notes.unwrap_or_default(),
        Err(err) => {
            warn!(
                "event=notes_load module=notes status=recovered reason=malformed_payload error={err}"
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::with_capacity(notes.len());
    let total = notes.len();
    let unique: Vec<Note> = notes
        .into_iter()
        .filter(|note| seen.insert(note.id))
        .collect();
    if unique.len() != total {
        warn!(
            "event=notes_load module=notes status=recovered reason=duplicate_ids dropped={}",
            total - unique.len()
        );
    }
    unique
}
