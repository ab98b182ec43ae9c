//! Per-entity slot binding with an explicit `UNLOADED -> LOADED` lifecycle.
//!
//! The central correctness property of the persistence subsystem lives
//! here: a binding persists a mutation only after its initial load has
//! completed. A write racing the load would otherwise clobber real stored
//! state with the seed default.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec::LoadOutcome;
use crate::error::StoreError;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindState {
    Unloaded,
    Loaded,
}

/// Whether a mutation reached storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Persisted,
    /// The binding had not loaded yet; the in-memory value changed but
    /// nothing was written.
    Suppressed,
}

pub struct Binding<T> {
    slot: String,
    state: BindState,
    value: T,
    default: T,
}

impl<T: Serialize + DeserializeOwned + Clone> Binding<T> {
    /// A new binding starts `UNLOADED`, holding `default` (commonly the
    /// seed dataset) as its in-memory value.
    pub fn new(slot: impl Into<String>, default: T) -> Self {
        Self {
            slot: slot.into(),
            state: BindState::Unloaded,
            value: default.clone(),
            default,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state == BindState::Loaded
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// `UNLOADED -> LOADED`. Replaces the in-memory value wholesale with
    /// the slot's decoded state (or the pristine default). `LOADED` is
    /// terminal; loading twice is a misuse error.
    pub fn load(&mut self, store: &Store) -> Result<LoadOutcome, StoreError> {
        if self.state == BindState::Loaded {
            return Err(StoreError::AlreadyLoaded(self.slot.clone()));
        }
        let (value, outcome) = store.load_slot(&self.slot, self.default.clone());
        self.value = value;
        self.state = BindState::Loaded;
        Ok(outcome)
    }

    /// Apply `f` to the in-memory value, then persist. While the binding is
    /// still `UNLOADED` the write is suppressed.
    pub fn mutate<F: FnOnce(&mut T)>(
        &mut self,
        store: &Store,
        f: F,
    ) -> Result<WriteOutcome, StoreError> {
        f(&mut self.value);
        if self.state == BindState::Unloaded {
            debug!(slot = %self.slot, "write suppressed before initial load");
            return Ok(WriteOutcome::Suppressed);
        }
        store.save_slot(&self.slot, &self.value)?;
        Ok(WriteOutcome::Persisted)
    }

    /// Remove the slot and reset the in-memory value to `replacement`.
    pub fn clear(&mut self, store: &Store, replacement: T) -> Result<(), StoreError> {
        store.remove_slot(&self.slot)?;
        self.value = replacement;
        Ok(())
    }
}
