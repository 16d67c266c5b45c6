//! First-run setup: master passphrase, then validation phrase.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, VaultError};
use crate::validation::{validate_confirmation, validate_master_passphrase, validate_phrase};
use crate::vault::Vault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    AwaitingMasterPassword,
    AwaitingPhrase,
    Bootstrapped,
}

/// Drives bootstrap one submission at a time.
///
/// The candidate passphrase is held only between the two steps and is
/// dropped once the validation record is written; it is entered again at
/// login.
pub struct SetupFlow {
    state: SetupState,
    candidate: Option<SecretString>,
}

impl SetupFlow {
    pub fn new() -> Self {
        Self {
            state: SetupState::AwaitingMasterPassword,
            candidate: None,
        }
    }

    pub fn state(&self) -> SetupState {
        self.state
    }

    /// Accept the master passphrase and its confirmation.
    ///
    /// On a validation error the flow stays where it is.
    pub fn submit_master(&mut self, passphrase: &str, confirmation: &str) -> Result<SetupState> {
        if self.state != SetupState::AwaitingMasterPassword {
            return Err(VaultError::InvalidState("setup is not asking for a password"));
        }
        validate_master_passphrase(passphrase)?;
        validate_confirmation(passphrase, confirmation)?;

        self.candidate = Some(SecretString::from(passphrase.to_string()));
        self.state = SetupState::AwaitingPhrase;
        Ok(self.state)
    }

    /// Accept the validation phrase and bootstrap the store.
    pub fn submit_phrase(&mut self, vault: &mut Vault, phrase: &str) -> Result<SetupState> {
        if self.state != SetupState::AwaitingPhrase {
            return Err(VaultError::InvalidState("setup is not asking for a phrase"));
        }
        validate_phrase(phrase)?;

        let candidate = self
            .candidate
            .as_ref()
            .ok_or(VaultError::InvalidState("setup has no candidate password"))?;
        vault.bootstrap(candidate.expose_secret(), phrase)?;

        self.candidate = None;
        self.state = SetupState::Bootstrapped;
        Ok(self.state)
    }

    /// Discard the candidate passphrase and start over.
    pub fn restart(&mut self) {
        if self.state != SetupState::Bootstrapped {
            self.candidate = None;
            self.state = SetupState::AwaitingMasterPassword;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == SetupState::Bootstrapped
    }
}

impl Default for SetupFlow {
    fn default() -> Self {
        Self::new()
    }
}
