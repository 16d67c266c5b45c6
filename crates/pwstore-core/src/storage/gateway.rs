//! Encryption gateway: records in, ciphertext blobs out.
//!
//! `seal` serializes a [`Record`] to JSON, encrypts it and persists it;
//! `open` does the reverse. The gateway owns both collaborators so every
//! higher-level operation goes through one place.

use crate::error::{Result, VaultError};
use crate::storage::encryption::{AgeCipher, Cipher};
use crate::storage::traits::BlobStore;
use crate::storage::types::Record;

/// Couples a blob store with a cipher.
pub struct Gateway {
    store: Box<dyn BlobStore>,
    cipher: Box<dyn Cipher>,
}

impl Gateway {
    /// Create a gateway over `store` and `cipher`.
    pub fn new(store: Box<dyn BlobStore>, cipher: Box<dyn Cipher>) -> Self {
        Self { store, cipher }
    }

    /// Create a gateway using age encryption.
    pub fn with_age(store: impl BlobStore + 'static) -> Self {
        Self::new(Box::new(store), Box::new(AgeCipher))
    }

    /// The underlying blob store.
    pub fn store(&self) -> &dyn BlobStore {
        self.store.as_ref()
    }

    /// Serialize, encrypt and persist `record` under `key`.
    ///
    /// # Errors
    ///
    /// - `VaultError::Serialization` if the record cannot be encoded
    /// - `VaultError::Encrypt` if the cipher fails
    /// - `VaultError::Storage` if the write fails (the previous blob, if any, is intact)
    pub fn seal(&self, key: &str, record: &Record, passphrase: &str) -> Result<()> {
        let plaintext = zeroize::Zeroizing::new(
            serde_json::to_vec(record).map_err(|e| VaultError::Serialization(e.to_string()))?,
        );
        let armored = self.cipher.encrypt(&plaintext, passphrase)?;
        self.store.put(key, &armored)
    }

    /// Read, decrypt and deserialize the record stored under `key`.
    ///
    /// # Errors
    ///
    /// - `VaultError::NotFound` if there is no such blob
    /// - `VaultError::Decrypt` if the passphrase is wrong or the blob corrupted
    /// - `VaultError::Deserialization` if the plaintext is not a record
    pub fn open(&self, key: &str, passphrase: &str) -> Result<Record> {
        let armored = self.store.get(key)?;
        let plaintext = zeroize::Zeroizing::new(self.cipher.decrypt(&armored, passphrase)?);
        serde_json::from_slice(&plaintext).map_err(|e| VaultError::Deserialization(e.to_string()))
    }
}
