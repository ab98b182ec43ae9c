//! Envelope codec: JSON value <-> AES-256-GCM ciphertext.
//!
//! Wire format per slot:
//!   `{"iv":[12 integers 0-255],"data":[N integers 0-255]}`
//!
//! Slots written before encryption existed hold bare JSON with no
//! `iv`/`data` wrapper and are returned as-is.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StoreError;
use crate::keys::MasterKey;

pub const NONCE_LEN: usize = 12;

#[derive(Serialize, Deserialize)]
struct CipherEnvelope {
    iv: Vec<u8>,
    data: Vec<u8>,
}

/// How a slot load resolved. Lets callers tell "no prior state" apart from
/// "prior state existed but could not be used".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Envelope decrypted and deserialized.
    Decrypted,
    /// Pre-encryption bare JSON, returned unchanged.
    LegacyPlaintext,
    /// Slot empty; the default was used.
    NoPriorState,
    /// Slot present but unusable (tamper, wrong key, corrupt bytes, parse
    /// error); the default was used.
    CorruptFallback,
}

/// Serialize `value` and encrypt it under a fresh random 12-byte nonce.
///
/// Never reuses a nonce with the same key; reuse would void the AEAD
/// confidentiality guarantee. Failure is a hard error; plaintext is never
/// returned as a fallback.
pub fn encrypt_value<T: Serialize>(key: &MasterKey, value: &T) -> Result<String, StoreError> {
    let plaintext = serde_json::to_vec(value)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.bytes()));
    let mut iv = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);
    let data = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext.as_slice())
        .map_err(|_| StoreError::EncryptFailed)?;
    let envelope = CipherEnvelope {
        iv: iv.to_vec(),
        data,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode a slot's text into a value, falling back to `default`.
///
/// Decryption failure never propagates to the caller; it resolves to the
/// default with [`LoadOutcome::CorruptFallback`]. Empty input resolves to
/// the default without touching the cipher.
pub fn decrypt_value<T: DeserializeOwned>(
    key: &MasterKey,
    text: Option<&str>,
    default: T,
) -> (T, LoadOutcome) {
    let text = match text {
        None => return (default, LoadOutcome::NoPriorState),
        Some(t) if t.is_empty() => return (default, LoadOutcome::NoPriorState),
        Some(t) => t,
    };

    let parsed: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            warn!("slot is not valid JSON: {e}");
            return (default, LoadOutcome::CorruptFallback);
        }
    };

    let is_envelope = parsed.get("iv").is_some() && parsed.get("data").is_some();
    if !is_envelope {
        // Pre-encryption payload.
        return match serde_json::from_value(parsed) {
            Ok(v) => (v, LoadOutcome::LegacyPlaintext),
            Err(e) => {
                warn!("legacy slot does not deserialize: {e}");
                (default, LoadOutcome::CorruptFallback)
            }
        };
    }

    let envelope: CipherEnvelope = match serde_json::from_value(parsed) {
        Ok(env) => env,
        Err(e) => {
            warn!("malformed cipher envelope: {e}");
            return (default, LoadOutcome::CorruptFallback);
        }
    };
    if envelope.iv.len() != NONCE_LEN {
        warn!("envelope iv has length {}", envelope.iv.len());
        return (default, LoadOutcome::CorruptFallback);
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.bytes()));
    let plaintext = match cipher.decrypt(Nonce::from_slice(&envelope.iv), envelope.data.as_slice())
    {
        Ok(pt) => pt,
        Err(_) => {
            warn!("AEAD decryption failed (tag mismatch or wrong key)");
            return (default, LoadOutcome::CorruptFallback);
        }
    };
    match serde_json::from_slice(&plaintext) {
        Ok(v) => (v, LoadOutcome::Decrypted),
        Err(e) => {
            warn!("decrypted payload does not deserialize: {e}");
            (default, LoadOutcome::CorruptFallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::get_or_create_key;
    use crate::medium::MemoryMedium;
    use serde_json::json;

    fn test_key() -> MasterKey {
        get_or_create_key(&MemoryMedium::new()).unwrap()
    }

    #[test]
    fn roundtrip_preserves_value() {
        let key = test_key();
        let value = json!({"name": "Diwali Bash", "budget": 50000, "tags": ["home", "family"]});
        let text = encrypt_value(&key, &value).unwrap();
        let (decoded, outcome) = decrypt_value(&key, Some(&text), json!(null));
        assert_eq!(decoded, value);
        assert_eq!(outcome, LoadOutcome::Decrypted);
    }

    #[test]
    fn envelope_wire_shape_is_integer_arrays() {
        let key = test_key();
        let text = encrypt_value(&key, &json!({"a": 1})).unwrap();
        let envelope: serde_json::Value = serde_json::from_str(&text).unwrap();
        let iv = envelope["iv"].as_array().unwrap();
        assert_eq!(iv.len(), NONCE_LEN);
        assert!(iv.iter().all(|b| b.is_u64() && b.as_u64().unwrap() <= 255));
        assert!(envelope["data"].as_array().unwrap().len() > 16); // payload + tag
    }

    #[test]
    fn nonce_is_fresh_per_call() {
        let key = test_key();
        let value = json!({"same": "plaintext"});
        let a: serde_json::Value =
            serde_json::from_str(&encrypt_value(&key, &value).unwrap()).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(&encrypt_value(&key, &value).unwrap()).unwrap();
        assert_ne!(a["iv"], b["iv"]);
    }

    #[test]
    fn tampered_data_returns_default() {
        let key = test_key();
        let text = encrypt_value(&key, &json!({"secret": true})).unwrap();
        let mut envelope: serde_json::Value = serde_json::from_str(&text).unwrap();
        // Flip one byte of ciphertext.
        let byte = envelope["data"][0].as_u64().unwrap() as u8;
        envelope["data"][0] = json!(byte ^ 0xff);
        let (decoded, outcome) =
            decrypt_value::<serde_json::Value>(&key, Some(&envelope.to_string()), json!("fallback"));
        assert_eq!(decoded, json!("fallback"));
        assert_eq!(outcome, LoadOutcome::CorruptFallback);
    }

    #[test]
    fn wrong_key_returns_default() {
        let key = test_key();
        let other = test_key();
        let text = encrypt_value(&key, &json!([1, 2, 3])).unwrap();
        let (decoded, outcome) = decrypt_value::<serde_json::Value>(&other, Some(&text), json!([]));
        assert_eq!(decoded, json!([]));
        assert_eq!(outcome, LoadOutcome::CorruptFallback);
    }

    #[test]
    fn legacy_plaintext_passes_through() {
        let key = test_key();
        let (decoded, outcome) =
            decrypt_value::<serde_json::Value>(&key, Some(r#"{"simple":"data"}"#), json!(null));
        assert_eq!(decoded, json!({"simple": "data"}));
        assert_eq!(outcome, LoadOutcome::LegacyPlaintext);
    }

    #[test]
    fn empty_and_missing_input_return_default_without_crypto() {
        let key = test_key();
        let (a, oa) = decrypt_value::<serde_json::Value>(&key, None, json!(42));
        let (b, ob) = decrypt_value::<serde_json::Value>(&key, Some(""), json!(42));
        assert_eq!((a, oa), (json!(42), LoadOutcome::NoPriorState));
        assert_eq!((b, ob), (json!(42), LoadOutcome::NoPriorState));
    }

    #[test]
    fn garbage_text_returns_default() {
        let key = test_key();
        let (decoded, outcome) =
            decrypt_value::<serde_json::Value>(&key, Some("not json at all"), json!("d"));
        assert_eq!(decoded, json!("d"));
        assert_eq!(outcome, LoadOutcome::CorruptFallback);
    }

    #[test]
    fn legacy_payload_of_wrong_type_falls_back() {
        let key = test_key();
        // Caller expects a list; legacy slot holds an object.
        let (decoded, outcome) =
            decrypt_value::<Vec<u32>>(&key, Some(r#"{"simple":"data"}"#), vec![9]);
        assert_eq!(decoded, vec![9]);
        assert_eq!(outcome, LoadOutcome::CorruptFallback);
    }
}
