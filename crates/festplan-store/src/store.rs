use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::codec::{decrypt_value, encrypt_value, LoadOutcome};
use crate::error::StoreError;
use crate::keys::{get_or_create_key, MasterKey};
use crate::medium::StorageMedium;

/// Storage medium plus the profile's master key. One per profile; shared by
/// every entity binding.
pub struct Store {
    medium: Arc<dyn StorageMedium>,
    key: MasterKey,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    /// Run the key manager and bind it to the medium. Fails with
    /// [`StoreError::KeyUnavailable`] when the key slot is unreadable or its
    /// descriptor is corrupt.
    pub fn open(medium: Arc<dyn StorageMedium>) -> Result<Self, StoreError> {
        let key = get_or_create_key(medium.as_ref())?;
        Ok(Self { medium, key })
    }

    pub fn medium(&self) -> &Arc<dyn StorageMedium> {
        &self.medium
    }

    /// Read and decode one slot. A medium read failure degrades to the
    /// default like any other unusable prior state.
    pub fn load_slot<T: DeserializeOwned>(&self, slot: &str, default: T) -> (T, LoadOutcome) {
        match self.medium.get(slot) {
            Ok(text) => decrypt_value(&self.key, text.as_deref(), default),
            Err(e) => {
                warn!(slot, "slot read failed: {e}");
                (default, LoadOutcome::CorruptFallback)
            }
        }
    }

    /// Encrypt and write one slot. Write failures are hard errors.
    pub fn save_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), StoreError> {
        let text = encrypt_value(&self.key, value)?;
        self.medium.set(slot, &text)
    }

    pub fn remove_slot(&self, slot: &str) -> Result<(), StoreError> {
        self.medium.remove(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use crate::slots::KEY_SLOT;

    #[test]
    fn save_then_load_roundtrip() {
        let store = Store::open(Arc::new(MemoryMedium::new())).unwrap();
        store.save_slot("slot_a", &vec!["x", "y"]).unwrap();
        let (value, outcome) = store.load_slot::<Vec<String>>("slot_a", vec![]);
        assert_eq!(value, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(outcome, LoadOutcome::Decrypted);
    }

    #[test]
    fn slots_are_ciphertext_on_the_medium() {
        let medium = Arc::new(MemoryMedium::new());
        let store = Store::open(medium.clone()).unwrap();
        store.save_slot("slot_a", &"plain secret").unwrap();
        let raw = medium.get("slot_a").unwrap().unwrap();
        assert!(!raw.contains("plain secret"));
        assert!(raw.contains("\"iv\""));
    }

    #[test]
    fn reopen_with_persisted_key_reads_old_ciphertext() {
        let medium = Arc::new(MemoryMedium::new());
        let store = Store::open(medium.clone()).unwrap();
        store.save_slot("slot_a", &7u32).unwrap();
        drop(store);
        let reopened = Store::open(medium).unwrap();
        let (value, outcome) = reopened.load_slot("slot_a", 0u32);
        assert_eq!(value, 7);
        assert_eq!(outcome, LoadOutcome::Decrypted);
    }

    #[test]
    fn corrupt_key_slot_fails_open() {
        let medium = Arc::new(MemoryMedium::new());
        medium.set(KEY_SLOT, "garbage").unwrap();
        assert!(matches!(
            Store::open(medium).unwrap_err(),
            StoreError::KeyUnavailable(_)
        ));
    }
}
