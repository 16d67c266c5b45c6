//! The `Vault` facade.
//!
//! Owns the encryption gateway and the in-memory `Initialized` flag, and
//! exposes every engine operation in one place. Operations that need the
//! master passphrase take the [`Session`] explicitly.

use std::path::Path;

use crate::catalog;
use crate::error::{Result, VaultError};
use crate::rotation::{self, RotationOptions, RotationReport};
use crate::session::Session;
use crate::storage::dir::DirStore;
use crate::storage::gateway::Gateway;
use crate::storage::types::{EntryFields, EntrySummary, Record};
use crate::validation;

/// A password store ready for use.
pub struct Vault {
    gateway: Gateway,
    initialized: bool,
}

impl Vault {
    /// Prepare the directory store at `root` with age encryption.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Fatal` if the store directory is unusable.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let (store, initialized) = DirStore::ensure_ready(root.as_ref())?;
        Ok(Self::with_gateway(Gateway::with_age(store), initialized))
    }

    /// Wrap an existing gateway.
    pub fn with_gateway(gateway: Gateway, initialized: bool) -> Self {
        Self {
            gateway,
            initialized,
        }
    }

    /// Whether the store has a validation record.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Write the validation record and mark the store initialized.
    pub fn bootstrap(&mut self, master: &str, phrase: &str) -> Result<()> {
        if self.initialized {
            return Err(VaultError::AlreadyInitialized);
        }
        validation::bootstrap(&self.gateway, master, phrase)?;
        self.initialized = true;
        Ok(())
    }

    /// Verify `passphrase` and start a session.
    pub fn login(&self, passphrase: &str) -> Result<Session> {
        if !self.initialized {
            return Err(VaultError::InvalidState("the store is not initialized"));
        }
        validation::login(&self.gateway, passphrase)
    }

    pub fn list_entries(&self, session: &Session) -> Result<Vec<EntrySummary>> {
        catalog::list_entries(&self.gateway, session.passphrase())
    }

    pub fn add_entry(&self, session: &Session, label: &str, fields: &EntryFields) -> Result<String> {
        catalog::add_entry(&self.gateway, label, fields, session.passphrase())
    }

    pub fn show_entry(&self, session: &Session, key: &str) -> Result<Record> {
        catalog::show_entry(&self.gateway, key, session.passphrase())
    }

    pub fn delete_entry(&self, key: &str) -> Result<()> {
        catalog::delete_entry(&self.gateway, key)
    }

    /// Rotate the master passphrase; see [`rotation::rotate`].
    pub fn rotate(
        &self,
        session: &mut Session,
        current: &str,
        new: &str,
        options: RotationOptions,
    ) -> Result<RotationReport> {
        rotation::rotate(&self.gateway, session, current, new, options)
    }
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_initialized_flag_follows_bootstrap() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("store");

        let mut vault = Vault::open(&root).unwrap();
        assert!(!vault.is_initialized());
        assert!(matches!(
            vault.login("correcthorse"),
            Err(VaultError::InvalidState(_))
        ));

        assert!(vault.bootstrap("correcthorse", "short").is_err());
        assert!(!vault.is_initialized());

        vault
            .bootstrap("correcthorse", "the quick brown fox jumps")
            .unwrap();
        assert!(vault.is_initialized());
        assert!(Vault::open(&root).unwrap().is_initialized());
    }

    #[test]
    fn test_entry_operations_use_session() {
        let dir = tempdir().unwrap();
        let mut vault = Vault::open(dir.path().join("store")).unwrap();
        vault
            .bootstrap("correcthorse", "the quick brown fox jumps")
            .unwrap();
        let session = vault.login("correcthorse").unwrap();

        let key = vault
            .add_entry(
                &session,
                "Example Site",
                &EntryFields {
                    secret: "s3cret-value".into(),
                    ..EntryFields::default()
                },
            )
            .unwrap();
        assert_eq!(vault.list_entries(&session).unwrap()[0].label, "example site");
        assert_eq!(vault.show_entry(&session, &key).unwrap().secret, "s3cret-value");

        vault.delete_entry(&key).unwrap();
        assert!(vault.list_entries(&session).unwrap().is_empty());
    }
}
