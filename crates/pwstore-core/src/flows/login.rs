//! Login: retry until the passphrase opens the validation record.

use crate::error::{Result, VaultError};
use crate::session::Session;
use crate::vault::Vault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    AwaitingLogin,
    Authenticated,
}

/// Unlimited retries; the attempt count is informational only.
#[derive(Debug)]
pub struct LoginFlow {
    state: LoginState,
    failed_attempts: u32,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            state: LoginState::AwaitingLogin,
            failed_attempts: 0,
        }
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Try `passphrase`. A wrong passphrase leaves the flow awaiting login.
    pub fn submit(&mut self, vault: &Vault, passphrase: &str) -> Result<Session> {
        if self.state == LoginState::Authenticated {
            return Err(VaultError::InvalidState("already logged in"));
        }
        match vault.login(passphrase) {
            Ok(session) => {
                self.state = LoginState::Authenticated;
                Ok(session)
            }
            Err(err) => {
                if matches!(err, VaultError::IncorrectPassword) {
                    self.failed_attempts = self.failed_attempts.saturating_add(1);
                }
                Err(err)
            }
        }
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}
