//! Change-master-password form: current, new, confirm.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, ValidationError, VaultError};
use crate::rotation::{RotationOptions, RotationReport};
use crate::session::Session;
use crate::validation::{validate_confirmation, validate_master_passphrase};
use crate::vault::Vault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    EnteringCurrent,
    EnteringNew,
    Confirming,
    Done,
    Cancelled,
    /// The validation record may be unreadable. Terminal.
    Critical,
}

pub struct RotationFlow {
    state: RotationState,
    current: Option<SecretString>,
    new: Option<SecretString>,
    options: RotationOptions,
}

impl RotationFlow {
    pub fn new(options: RotationOptions) -> Self {
        Self {
            state: RotationState::EnteringCurrent,
            current: None,
            new: None,
            options,
        }
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            RotationState::Done | RotationState::Cancelled | RotationState::Critical
        )
    }

    pub fn submit_current(&mut self, current: &str) -> Result<RotationState> {
        self.require_state(RotationState::EnteringCurrent)?;
        if current.is_empty() {
            return Err(ValidationError::Required("Current password").into());
        }
        self.current = Some(SecretString::from(current.to_string()));
        self.state = RotationState::EnteringNew;
        Ok(self.state)
    }

    pub fn submit_new(&mut self, new: &str) -> Result<RotationState> {
        self.require_state(RotationState::EnteringNew)?;
        validate_master_passphrase(new)?;
        self.new = Some(SecretString::from(new.to_string()));
        self.state = RotationState::Confirming;
        Ok(self.state)
    }

    /// Confirm the new passphrase and run the rotation.
    ///
    /// A mismatch returns to `EnteringNew`; a wrong current passphrase or a
    /// failed write returns to `EnteringCurrent`; a critical inconsistency
    /// ends the flow in `Critical`.
    pub fn confirm(
        &mut self,
        vault: &Vault,
        session: &mut Session,
        confirmation: &str,
    ) -> Result<RotationReport> {
        self.require_state(RotationState::Confirming)?;
        let (Some(current), Some(new)) = (self.current.take(), self.new.take()) else {
            self.state = RotationState::EnteringCurrent;
            return Err(VaultError::InvalidState("the form is incomplete"));
        };

        if let Err(err) = validate_confirmation(new.expose_secret(), confirmation) {
            self.current = Some(current);
            self.state = RotationState::EnteringNew;
            return Err(err.into());
        }

        let outcome = vault.rotate(
            session,
            current.expose_secret(),
            new.expose_secret(),
            self.options,
        );
        self.state = match &outcome {
            Ok(_) => RotationState::Done,
            Err(err) if err.is_critical() => RotationState::Critical,
            Err(_) => RotationState::EnteringCurrent,
        };
        outcome
    }

    pub fn cancel(&mut self) {
        if !self.is_finished() {
            self.current = None;
            self.new = None;
            self.state = RotationState::Cancelled;
        }
    }

    fn require_state(&self, state: RotationState) -> Result<()> {
        if self.state != state {
            return Err(VaultError::InvalidState("the password form is on another step"));
        }
        Ok(())
    }
}
