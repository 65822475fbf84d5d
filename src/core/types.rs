// shared key alias + error kinds
use thiserror::Error;

/// Mapping key. Keys are plain text labels.
pub type Key = String;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("duplicate key {key:?}")]
    DuplicateKey { key: Key },

    #[error("entry for {key:?} maps to {value:?} instead of itself")]
    NotIdentity { key: Key, value: Key },

    #[error("unknown key {key:?}")]
    UnknownKey { key: Key },
}
