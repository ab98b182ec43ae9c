//! festplan-store — Encrypted local persistence for FestPlan
//!
//! # Encryption strategy
//! Every entity slot (user, events, vendors, settings, community posts) is
//! stored as an AES-256-GCM envelope `{"iv":[...],"data":[...]}`, both byte
//! sequences serialized as plain integer arrays. The 256-bit master key is
//! generated once per profile, kept as a JWK-style descriptor in its own
//! slot, and reused by all entities; the nonce is fresh per encryption call.
//!
//! # Legacy data
//! Slots written before encryption was introduced hold bare JSON. Decryption
//! detects the missing `iv`/`data` fields and returns the parsed payload
//! directly.
//!
//! # Failure policy
//! Decrypt failures never propagate: the caller-supplied default is returned
//! and the outcome is reported as [`LoadOutcome::CorruptFallback`]. Encrypt
//! failures are hard errors; plaintext is never written to an encrypted
//! slot. A missing or corrupt key descriptor surfaces as
//! [`StoreError::KeyUnavailable`] rather than silently orphaning existing
//! ciphertext under a fabricated key.

pub mod binding;
pub mod codec;
pub mod error;
pub mod keys;
pub mod medium;
pub mod slots;
pub mod store;

pub use binding::{Binding, WriteOutcome};
pub use codec::LoadOutcome;
pub use error::StoreError;
pub use keys::MasterKey;
pub use medium::{FileMedium, MemoryMedium, StorageMedium};
pub use store::Store;
