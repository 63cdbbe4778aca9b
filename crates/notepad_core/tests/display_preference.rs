use notepad_core::{DisplayPreference, MemoryStore, NoteStore, DARK_MODE_KEY, NOTES_KEY};

#[test]
fn defaults_to_light_mode_when_unset() {
    let kv = MemoryStore::new();
    let pref = DisplayPreference::load(&kv).unwrap();
    assert!(!pref.is_dark());
    assert_eq!(kv.raw(DARK_MODE_KEY), None);
}

#[test]
fn toggle_twice_returns_to_original_and_persists_each_step() {
    let kv = MemoryStore::new();
    let mut pref = DisplayPreference::load(&kv).unwrap();

    assert!(pref.toggle().unwrap());
    assert_eq!(kv.raw(DARK_MODE_KEY).as_deref(), Some("true"));

    assert!(!pref.toggle().unwrap());
    assert_eq!(kv.raw(DARK_MODE_KEY).as_deref(), Some("false"));
    assert!(!pref.is_dark());
}

#[test]
fn loads_persisted_dark_mode() {
    let kv = MemoryStore::with_entries([(DARK_MODE_KEY, "true")]);
    let mut pref = DisplayPreference::load(&kv).unwrap();
    assert!(pref.is_dark());

    assert!(!pref.toggle().unwrap());
    let reloaded = DisplayPreference::load(&kv).unwrap();
    assert!(!reloaded.is_dark());
}

#[test]
fn malformed_flag_falls_back_to_light() {
    let kv = MemoryStore::with_entries([(DARK_MODE_KEY, "dark please")]);
    let pref = DisplayPreference::load(&kv).unwrap();
    assert!(!pref.is_dark());
}

#[test]
fn toggle_does_not_touch_notes() {
    let kv = MemoryStore::new();
    let mut notes = NoteStore::open(&kv).unwrap();
    let mut pref = DisplayPreference::load(&kv).unwrap();
    notes.add("stay put").unwrap();
    let before = kv.raw(NOTES_KEY);

    pref.toggle().unwrap();

    assert_eq!(kv.raw(NOTES_KEY), before);
    assert_eq!(notes.len(), 1);
}
