//! End-to-end persistence scenarios over the on-disk medium.
//!
//! Covers:
//!  1. Fresh profile: key created, slots seeded, reopen reads back.
//!  2. Legacy migration: bare JSON slot decodes, next save encrypts it.
//!  3. Tampered slot on disk degrades to the default.
//!  4. Key slot corruption refuses to open.

use std::sync::Arc;

use festplan_store::slots::{EVENTS_SLOT, KEY_SLOT};
use festplan_store::{Binding, FileMedium, LoadOutcome, StorageMedium, Store, StoreError};
use tempfile::tempdir;

fn open(dir: &std::path::Path) -> (Arc<FileMedium>, Store) {
    let medium = Arc::new(FileMedium::new(dir).unwrap());
    let store = Store::open(medium.clone()).unwrap();
    (medium, store)
}

#[test]
fn fresh_profile_roundtrip_across_reopen() {
    let dir = tempdir().unwrap();

    {
        let (_, store) = open(dir.path());
        let mut events = Binding::new(EVENTS_SLOT, vec!["seed-event".to_string()]);
        assert_eq!(events.load(&store).unwrap(), LoadOutcome::NoPriorState);
        events
            .mutate(&store, |v| v.insert(0, "new-event".to_string()))
            .unwrap();
    }

    // New process: same key descriptor, same ciphertext.
    let (_, store) = open(dir.path());
    let mut events = Binding::new(EVENTS_SLOT, Vec::<String>::new());
    assert_eq!(events.load(&store).unwrap(), LoadOutcome::Decrypted);
    assert_eq!(
        events.get(),
        &vec!["new-event".to_string(), "seed-event".to_string()]
    );
}

#[test]
fn legacy_plaintext_slot_is_migrated_on_first_save() {
    let dir = tempdir().unwrap();
    let (medium, store) = open(dir.path());

    // A slot written before encryption existed.
    medium.set(EVENTS_SLOT, r#"["old-event"]"#).unwrap();

    let mut events = Binding::new(EVENTS_SLOT, Vec::<String>::new());
    assert_eq!(events.load(&store).unwrap(), LoadOutcome::LegacyPlaintext);
    assert_eq!(events.get(), &vec!["old-event".to_string()]);

    events
        .mutate(&store, |v| v.push("fresh-event".to_string()))
        .unwrap();
    let raw = medium.get(EVENTS_SLOT).unwrap().unwrap();
    assert!(raw.contains("\"iv\""), "slot should now be an envelope");
    assert!(!raw.contains("old-event"), "plaintext should be gone");
}

#[test]
fn tampered_file_degrades_to_default() {
    let dir = tempdir().unwrap();
    let (medium, store) = open(dir.path());

    let mut events = Binding::new(EVENTS_SLOT, Vec::<String>::new());
    events.load(&store).unwrap();
    events
        .mutate(&store, |v| v.push("precious".to_string()))
        .unwrap();

    // Corrupt the ciphertext bytes on disk.
    let raw = medium.get(EVENTS_SLOT).unwrap().unwrap();
    let mut envelope: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let byte = envelope["data"][0].as_u64().unwrap() as u8;
    envelope["data"][0] = serde_json::json!(byte ^ 0x01);
    medium.set(EVENTS_SLOT, &envelope.to_string()).unwrap();

    let mut reread = Binding::new(EVENTS_SLOT, vec!["default".to_string()]);
    assert_eq!(reread.load(&store).unwrap(), LoadOutcome::CorruptFallback);
    assert_eq!(reread.get(), &vec!["default".to_string()]);
}

#[test]
fn corrupt_key_descriptor_refuses_to_open() {
    let dir = tempdir().unwrap();
    {
        let (_, store) = open(dir.path());
        store.save_slot(EVENTS_SLOT, &vec![1u32]).unwrap();
    }

    let medium = Arc::new(FileMedium::new(dir.path()).unwrap());
    medium.set(KEY_SLOT, "{\"broken\":").unwrap();
    assert!(matches!(
        Store::open(medium).unwrap_err(),
        StoreError::KeyUnavailable(_)
    ));
}
