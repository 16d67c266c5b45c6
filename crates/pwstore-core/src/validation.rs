//! Store bootstrap and master passphrase verification.
//!
//! A store is bootstrapped once: the user picks a master passphrase and an
//! independent validation phrase, and the phrase is sealed under the
//! passphrase as the validation record. Every later login is a single
//! attempt to open that record.

use chrono::Utc;

use crate::codec::VALIDATION_KEY;
use crate::error::{Result, ValidationError, VaultError};
use crate::session::Session;
use crate::storage::gateway::Gateway;
use crate::storage::types::Record;

/// Minimum master passphrase length, in characters.
pub const MIN_MASTER_LEN: usize = 8;

/// Minimum validation phrase length, in characters.
pub const MIN_PHRASE_LEN: usize = 12;

/// Check the master passphrase length rule.
pub fn validate_master_passphrase(passphrase: &str) -> std::result::Result<(), ValidationError> {
    if passphrase.chars().count() < MIN_MASTER_LEN {
        return Err(ValidationError::ShortPassword {
            min: MIN_MASTER_LEN,
        });
    }
    Ok(())
}

/// Check the validation phrase length rule.
pub fn validate_phrase(phrase: &str) -> std::result::Result<(), ValidationError> {
    if phrase.chars().count() < MIN_PHRASE_LEN {
        return Err(ValidationError::ShortPhrase {
            min: MIN_PHRASE_LEN,
        });
    }
    Ok(())
}

/// Check that a confirmation field repeats the original exactly.
pub fn validate_confirmation(
    original: &str,
    confirmation: &str,
) -> std::result::Result<(), ValidationError> {
    if original != confirmation {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Write the validation record for a fresh store.
///
/// # Errors
///
/// - `VaultError::AlreadyInitialized` if a validation record already exists
/// - `VaultError::Validation` if either input breaks a length rule
/// - any seal error from the gateway
pub fn bootstrap(gateway: &Gateway, master: &str, phrase: &str) -> Result<()> {
    validate_master_passphrase(master)?;
    validate_phrase(phrase)?;

    if gateway.store().contains(VALIDATION_KEY)? {
        return Err(VaultError::AlreadyInitialized);
    }

    let record = Record::new(phrase, Utc::now());
    gateway.seal(VALIDATION_KEY, &record, master)?;
    tracing::info!("password store bootstrapped");
    Ok(())
}

/// Open the validation record with `passphrase`, returning the phrase.
///
/// Decrypt and deserialization failures both become
/// `VaultError::IncorrectPassword`. Never writes to the store.
pub(crate) fn verify(gateway: &Gateway, passphrase: &str) -> Result<Record> {
    gateway
        .open(VALIDATION_KEY, passphrase)
        .map_err(|err| match err {
            VaultError::Decrypt | VaultError::Deserialization(_) => VaultError::IncorrectPassword,
            other => other,
        })
}

/// Authenticate against the validation record.
///
/// # Errors
///
/// - `VaultError::IncorrectPassword` for a wrong passphrase or unreadable record
/// - `VaultError::NotFound` if the store has not been bootstrapped
pub fn login(gateway: &Gateway, passphrase: &str) -> Result<Session> {
    match verify(gateway, passphrase) {
        Ok(_) => {
            tracing::info!("login succeeded");
            Ok(Session::new(passphrase))
        }
        Err(err) => {
            tracing::debug!(error = %err, "login rejected");
            Err(err)
        }
    }
}
