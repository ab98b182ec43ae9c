use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Encryption key unavailable: {0}")]
    KeyUnavailable(String),

    #[error("AEAD encryption failed — nothing was persisted")]
    EncryptFailed,

    #[error("Slot {0} already loaded")]
    AlreadyLoaded(String),

    #[error("Storage medium error: {0}")]
    Medium(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}
