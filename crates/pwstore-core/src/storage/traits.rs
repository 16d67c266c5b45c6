//! Blob store trait definition.
//!
//! The `BlobStore` trait is the seam between the engine and persistence.
//! Keys are slash-separated names without extension (e.g. `github_20240102_030405`
//! or `.checker/init`); values are opaque ciphertext bytes.

use crate::error::Result;

/// Raw persistence of named encrypted blobs.
///
/// All implementations must ensure:
/// - `put` either fully replaces the blob or leaves the previous one intact
/// - `list` reflects the current state on every call (no caching)
/// - `list` never reports the validation key or nested names
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key`, replacing any existing blob.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the write fails, or
    /// `VaultError::Validation` if the key is malformed.
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Read the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if no blob exists.
    fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Remove the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if no blob exists.
    fn delete(&self, key: &str) -> Result<()>;

    /// List top-level keys, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Whether a blob exists under `key`.
    fn contains(&self, key: &str) -> Result<bool>;
}
