//! Catalog browsing: list, detail view, delete confirmation.

use crate::error::{Result, VaultError};
use crate::session::Session;
use crate::storage::types::EntrySummary;
use crate::vault::Vault;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseState {
    Listing,
    Viewing { key: String, revealed: bool },
    ConfirmingDelete { key: String },
    Closed,
}

/// Holds a snapshot of the catalog; the snapshot is refreshed after every
/// delete and on request, never implicitly.
#[derive(Debug)]
pub struct BrowseFlow {
    state: BrowseState,
    entries: Vec<EntrySummary>,
}

impl BrowseFlow {
    /// Load the catalog and start in `Listing`.
    pub fn open(vault: &Vault, session: &Session) -> Result<Self> {
        Ok(Self {
            state: BrowseState::Listing,
            entries: vault.list_entries(session)?,
        })
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn entries(&self) -> &[EntrySummary] {
        &self.entries
    }

    /// Key of the entry being viewed or deleted.
    pub fn current_key(&self) -> Option<&str> {
        match &self.state {
            BrowseState::Viewing { key, .. } | BrowseState::ConfirmingDelete { key } => {
                Some(key.as_str())
            }
            _ => None,
        }
    }

    pub fn refresh(&mut self, vault: &Vault, session: &Session) -> Result<()> {
        self.entries = vault.list_entries(session)?;
        Ok(())
    }

    /// Open the detail view for the entry at `index`, secret hidden.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if self.state != BrowseState::Listing {
            return Err(VaultError::InvalidState("an entry is already open"));
        }
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| VaultError::NotFound(format!("entry #{}", index + 1)))?;
        self.state = BrowseState::Viewing {
            key: entry.key.clone(),
            revealed: false,
        };
        Ok(())
    }

    /// Show or hide the secret. Returns the new visibility.
    pub fn toggle_reveal(&mut self) -> Result<bool> {
        match &mut self.state {
            BrowseState::Viewing { revealed, .. } => {
                *revealed = !*revealed;
                Ok(*revealed)
            }
            _ => Err(VaultError::InvalidState("no entry is open")),
        }
    }

    pub fn request_delete(&mut self) -> Result<()> {
        let key = match &self.state {
            BrowseState::Viewing { key, .. } => key.clone(),
            _ => return Err(VaultError::InvalidState("no entry is open")),
        };
        self.state = BrowseState::ConfirmingDelete { key };
        Ok(())
    }

    /// Delete the pending entry, then re-list.
    ///
    /// The flow returns to `Listing` whether or not the delete succeeded.
    pub fn confirm_delete(&mut self, vault: &Vault, session: &Session) -> Result<()> {
        let key = match &self.state {
            BrowseState::ConfirmingDelete { key } => key.clone(),
            _ => return Err(VaultError::InvalidState("no delete is pending")),
        };
        self.state = BrowseState::Listing;
        let deleted = vault.delete_entry(&key);
        self.refresh(vault, session)?;
        deleted
    }

    /// Step back: confirm → detail → list → closed.
    pub fn back(&mut self) {
        self.state = match std::mem::replace(&mut self.state, BrowseState::Closed) {
            BrowseState::ConfirmingDelete { key } => BrowseState::Viewing {
                key,
                revealed: false,
            },
            BrowseState::Viewing { .. } => BrowseState::Listing,
            BrowseState::Listing | BrowseState::Closed => BrowseState::Closed,
        };
    }

    pub fn is_closed(&self) -> bool {
        self.state == BrowseState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::EntryFields;
    use tempfile::tempdir;

    fn populated(dir: &tempfile::TempDir) -> (Vault, Session) {
        let mut vault = Vault::open(dir.path().join("store")).unwrap();
        vault
            .bootstrap("correcthorse", "the quick brown fox jumps")
            .unwrap();
        let session = vault.login("correcthorse").unwrap();
        for label in ["alpha", "beta"] {
            vault
                .add_entry(
                    &session,
                    label,
                    &EntryFields {
                        secret: format!("{}-secret", label),
                        ..EntryFields::default()
                    },
                )
                .unwrap();
        }
        (vault, session)
    }

    #[test]
    fn test_view_reveal_and_back() {
        let dir = tempdir().unwrap();
        let (vault, session) = populated(&dir);
        let mut flow = BrowseFlow::open(&vault, &session).unwrap();
        assert_eq!(flow.entries().len(), 2);

        flow.select(1).unwrap();
        assert_eq!(flow.current_key(), Some(flow.entries()[1].key.as_str()));
        assert!(flow.toggle_reveal().unwrap());
        assert!(!flow.toggle_reveal().unwrap());

        flow.back();
        assert_eq!(flow.state(), &BrowseState::Listing);
        flow.back();
        assert!(flow.is_closed());
    }

    #[test]
    fn test_delete_refreshes_listing() {
        let dir = tempdir().unwrap();
        let (vault, session) = populated(&dir);
        let mut flow = BrowseFlow::open(&vault, &session).unwrap();

        flow.select(0).unwrap();
        flow.request_delete().unwrap();
        flow.back();
        assert!(matches!(flow.state(), BrowseState::Viewing { revealed: false, .. }));

        flow.request_delete().unwrap();
        flow.confirm_delete(&vault, &session).unwrap();
        assert_eq!(flow.state(), &BrowseState::Listing);
        assert_eq!(flow.entries().len(), 1);
        assert_eq!(flow.entries()[0].label, "beta");
    }

    #[test]
    fn test_invalid_transitions() {
        let dir = tempdir().unwrap();
        let (vault, session) = populated(&dir);
        let mut flow = BrowseFlow::open(&vault, &session).unwrap();

        assert!(matches!(flow.select(5), Err(VaultError::NotFound(_))));
        assert!(flow.toggle_reveal().is_err());
        assert!(flow.request_delete().is_err());
        assert!(flow.confirm_delete(&vault, &session).is_err());
    }
}
