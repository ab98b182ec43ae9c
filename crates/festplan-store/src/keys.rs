//! Master key lifecycle: created once per profile, persisted as a portable
//! JWK-style descriptor, reused by every entity slot, never rotated.

use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::StoreError;
use crate::medium::StorageMedium;
use crate::slots::KEY_SLOT;

pub const KEY_LEN: usize = 32;
const KEY_ALG: &str = "A256GCM";

/// Portable key representation stored in the key slot.
#[derive(Serialize, Deserialize)]
struct KeyDescriptor {
    kty: String,
    alg: String,
    k: String,
}

/// 256-bit AES-GCM key material. Zeroized on drop.
pub struct MasterKey(Zeroizing<[u8; KEY_LEN]>);

impl MasterKey {
    pub(crate) fn bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MasterKey").field(&"<redacted>").finish()
    }
}

/// Import the stored key, or generate and persist a fresh one if no
/// descriptor exists yet. The same descriptor always imports to a
/// functionally identical key.
///
/// An unreadable or corrupt descriptor is a hard [`StoreError::KeyUnavailable`]:
/// fabricating a replacement key would silently orphan every previously
/// encrypted slot.
pub fn get_or_create_key(medium: &dyn StorageMedium) -> Result<MasterKey, StoreError> {
    let stored = medium
        .get(KEY_SLOT)
        .map_err(|e| StoreError::KeyUnavailable(format!("key slot unreadable: {e}")))?;

    if let Some(text) = stored {
        return import_key(&text);
    }

    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    rand::rngs::OsRng.fill_bytes(&mut *bytes);
    let descriptor = KeyDescriptor {
        kty: "oct".into(),
        alg: KEY_ALG.into(),
        k: general_purpose::URL_SAFE_NO_PAD.encode(bytes.as_ref()),
    };
    let text = serde_json::to_string(&descriptor)?;
    medium
        .set(KEY_SLOT, &text)
        .map_err(|e| StoreError::KeyUnavailable(format!("key slot unwritable: {e}")))?;
    Ok(MasterKey(bytes))
}

fn import_key(text: &str) -> Result<MasterKey, StoreError> {
    let descriptor: KeyDescriptor = serde_json::from_str(text)
        .map_err(|e| StoreError::KeyUnavailable(format!("key descriptor corrupt: {e}")))?;
    if descriptor.alg != KEY_ALG {
        return Err(StoreError::KeyUnavailable(format!(
            "unsupported key algorithm {}",
            descriptor.alg
        )));
    }
    let decoded = Zeroizing::new(
        general_purpose::URL_SAFE_NO_PAD
            .decode(descriptor.k.as_bytes())
            .map_err(|e| StoreError::KeyUnavailable(format!("key material undecodable: {e}")))?,
    );
    if decoded.len() != KEY_LEN {
        return Err(StoreError::KeyUnavailable(format!(
            "key material wrong length: {}",
            decoded.len()
        )));
    }
    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    bytes.copy_from_slice(&decoded);
    Ok(MasterKey(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;

    #[test]
    fn key_is_created_once_and_reimported() {
        let medium = MemoryMedium::new();
        let first = get_or_create_key(&medium).unwrap();
        let descriptor = medium.get(KEY_SLOT).unwrap().expect("descriptor persisted");
        let second = get_or_create_key(&medium).unwrap();
        assert_eq!(first.bytes(), second.bytes());
        // Descriptor untouched by the second call.
        assert_eq!(medium.get(KEY_SLOT).unwrap().unwrap(), descriptor);
    }

    #[test]
    fn corrupt_descriptor_surfaces_key_unavailable() {
        let medium = MemoryMedium::new();
        medium.set(KEY_SLOT, "not a descriptor").unwrap();
        let err = get_or_create_key(&medium).unwrap_err();
        assert!(matches!(err, StoreError::KeyUnavailable(_)), "{err}");
    }

    #[test]
    fn wrong_algorithm_is_rejected() {
        let medium = MemoryMedium::new();
        medium
            .set(KEY_SLOT, r#"{"kty":"oct","alg":"A128GCM","k":"AAAA"}"#)
            .unwrap();
        assert!(matches!(
            get_or_create_key(&medium).unwrap_err(),
            StoreError::KeyUnavailable(_)
        ));
    }

    #[test]
    fn truncated_key_material_is_rejected() {
        let medium = MemoryMedium::new();
        let short = general_purpose::URL_SAFE_NO_PAD.encode([7u8; 16]);
        medium
            .set(KEY_SLOT, &format!(r#"{{"kty":"oct","alg":"A256GCM","k":"{short}"}}"#))
            .unwrap();
        assert!(matches!(
            get_or_create_key(&medium).unwrap_err(),
            StoreError::KeyUnavailable(_)
        ));
    }
}
