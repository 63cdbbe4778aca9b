//! Dark/light display flag.
//!
//! # Invariants
//! - The flag is read from the store once, in `load`.
//! - After a successful `toggle` the store holds the new value.

use crate::kv::{KeyValueStore, StoreError, StoreResult, DARK_MODE_KEY};
use log::{info, warn};

/// Persisted dark-mode preference, independent of the note list.
pub struct DisplayPreference<S: KeyValueStore> {
    store: S,
    dark_mode: bool,
}

impl<S: KeyValueStore> DisplayPreference<S> {
    /// Loads the flag; missing, `null`, or malformed values mean light mode.
    pub fn load(store: S) -> StoreResult<Self> {
        let dark_mode = match store.get(DARK_MODE_KEY)? {
            Some(raw) => decode_flag(&raw),
            None => false,
        };
        Ok(Self { store, dark_mode })
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Flips the flag, persists it, and returns the new value.
    pub fn toggle(&mut self) -> StoreResult<bool> {
        self.dark_mode = !self.dark_mode;
        let payload = serde_json::to_string(&self.dark_mode).map_err(|source| {
            StoreError::Encode {
                key: DARK_MODE_KEY,
                source,
            }
        })?;
        self.store.set(DARK_MODE_KEY, &payload)?;
        info!(
            "event=display_toggle module=display status=ok dark_mode={}",
            self.dark_mode
        );
        Ok(self.dark_mode)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn decode_flag(raw: &str) -> bool {
    match serde_json::from_str::<Option<bool>>(raw) {
        Ok(flag) => flag.unwrap_or(false),
        Err(err) => {
            warn!(
                "event=display_load module=display status=recovered reason=malformed_payload error={err}"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::decode_flag;

    #[test]
    fn decode_flag_defaults_to_light() {
        assert!(decode_flag("true"));
        assert!(!decode_flag("false"));
        assert!(!decode_flag("null"));
        assert!(!decode_flag("\"yes\""));
        assert!(!decode_flag(""));
    }
}
