//! Error types for pwstore core operations.
//!
//! This module defines the error hierarchy for all engine operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.
//!
//! Decryption failures are deliberately a single kind ([`VaultError::Decrypt`]):
//! the underlying cipher cannot tell a wrong passphrase from corrupted
//! ciphertext, so neither can we.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pwstore operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Core error type for pwstore operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Store root cannot be created or read at startup
    #[error("Cannot open password store at {}: {source}", path.display())]
    Fatal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Single read/write/delete failure after startup
    #[error("Storage error: {0}")]
    Storage(String),

    /// Named blob does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The cipher refused to encrypt
    #[error("Encryption error: {0}")]
    Encrypt(String),

    /// Wrong passphrase or corrupted ciphertext (intentionally not distinguished)
    #[error("Could not decrypt data")]
    Decrypt,

    /// Record could not be turned into bytes
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Decrypted bytes are not a record
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Supplied master passphrase does not open the validation record
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Bootstrap attempted on a store that already has a validation record
    #[error("Password store is already initialized")]
    AlreadyInitialized,

    /// A flow was driven with an input its current state does not accept
    #[error("Not allowed while {0}")]
    InvalidState(&'static str),

    /// User input failed a validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record with the derived key already exists
    #[error("An entry named {0} already exists; wait a second and try again")]
    KeyCollision(String),

    /// The validation record may be unreadable with any known passphrase
    #[error("Critical inconsistency: {0}. Inspect your password store manually.")]
    CriticalInconsistency(String),
}

impl VaultError {
    /// Errors the caller handles by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VaultError::Validation(_) | VaultError::IncorrectPassword | VaultError::KeyCollision(_)
        )
    }

    /// Errors that terminate the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, VaultError::Fatal { .. })
    }

    /// Errors that demand manual intervention and must never be retried.
    pub fn is_critical(&self) -> bool {
        matches!(self, VaultError::CriticalInconsistency(_))
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::Storage(err.to_string())
    }
}

/// Input rule violations. Always recoverable by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Master password must be at least {min} characters long")]
    ShortPassword { min: usize },

    #[error("Phrase must be at least {min} characters long")]
    ShortPhrase { min: usize },

    #[error("{0} is required")]
    Required(&'static str),

    #[error("Passwords do not match")]
    Mismatch,

    #[error("Password length must be between {min} and {max} characters (got {got})")]
    PasswordLength { min: usize, max: usize, got: usize },

    #[error("At least one character type must be included")]
    NoCharacterClass,

    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}
