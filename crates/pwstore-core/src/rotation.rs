//! Master passphrase rotation.
//!
//! The protocol runs in a fixed order:
//!
//! 1. open the validation record with the current passphrase
//! 2. re-seal it under the new passphrase (atomic write, the old blob
//!    survives a failed write)
//! 3. open it again with the new passphrase and compare the phrase
//! 4. switch the session to the new passphrase
//!
//! A failure in step 3 is a [`VaultError::CriticalInconsistency`] and is
//! never rolled back automatically. With [`RotationOptions::reseal_entries`]
//! set, every entry that opens under the old passphrase is then re-sealed
//! under the new one; failures there are collected, not raised.

use chrono::Utc;

use crate::codec::VALIDATION_KEY;
use crate::error::{Result, VaultError};
use crate::session::Session;
use crate::storage::gateway::Gateway;
use crate::validation::{validate_master_passphrase, verify};

/// Rotation behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationOptions {
    /// Re-seal every readable entry under the new passphrase.
    pub reseal_entries: bool,
}

/// What happened to the catalog entries during a rotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationReport {
    /// Entries now sealed under the new passphrase.
    pub resealed: Vec<String>,
    /// Entries that did not open under the old passphrase and were left alone.
    pub skipped: Vec<String>,
    /// Entries whose re-seal failed, with the error message.
    pub failed: Vec<(String, String)>,
    /// Entries left under the old passphrase because re-sealing was off.
    pub left_under_old: usize,
    /// Set when the catalog could not be listed after the rotation committed.
    pub listing_error: Option<String>,
}

impl RotationReport {
    /// Whether every entry is readable with the new passphrase.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
            && self.failed.is_empty()
            && self.left_under_old == 0
            && self.listing_error.is_none()
    }
}

/// Change the master passphrase from `current` to `new`.
///
/// # Errors
///
/// - `VaultError::Validation` if `new` is too short (store untouched)
/// - `VaultError::IncorrectPassword` if `current` does not open the
///   validation record (store untouched)
/// - the seal error if step 2 fails (validation record still opens with `current`)
/// - `VaultError::CriticalInconsistency` if step 3 fails
pub fn rotate(
    gateway: &Gateway,
    session: &mut Session,
    current: &str,
    new: &str,
    options: RotationOptions,
) -> Result<RotationReport> {
    validate_master_passphrase(new)?;

    let mut record = verify(gateway, current)?;

    record.updated_at = Utc::now();
    gateway.seal(VALIDATION_KEY, &record, new)?;

    match gateway.open(VALIDATION_KEY, new) {
        Ok(reopened) if reopened.secret.as_bytes() == record.secret.as_bytes() => {}
        Ok(_) => {
            tracing::error!("validation phrase changed during rotation");
            return Err(VaultError::CriticalInconsistency(
                "the validation record does not match after re-encryption".to_string(),
            ));
        }
        Err(err) => {
            tracing::error!(error = %err, "validation record unreadable after rotation");
            return Err(VaultError::CriticalInconsistency(format!(
                "the validation record cannot be opened with the new password ({})",
                err
            )));
        }
    }

    session.replace_passphrase(new);
    tracing::info!("master password rotated");

    let mut report = RotationReport::default();
    // The rotation has committed; a listing failure only limits the re-seal.
    let keys: Vec<String> = match gateway.store().list() {
        Ok(keys) => keys.into_iter().filter(|key| key != VALIDATION_KEY).collect(),
        Err(err) => {
            tracing::warn!(error = %err, "could not list entries after rotation");
            report.listing_error = Some(err.to_string());
            return Ok(report);
        }
    };

    if !options.reseal_entries {
        report.left_under_old = keys.len();
        return Ok(report);
    }

    for key in keys {
        let entry = match gateway.open(&key, current) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "entry not readable with previous password");
                report.skipped.push(key);
                continue;
            }
        };
        match gateway.seal(&key, &entry, new) {
            Ok(()) => report.resealed.push(key),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "failed to re-seal entry");
                report.failed.push((key, err.to_string()));
            }
        }
    }

    tracing::info!(
        resealed = report.resealed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "entries re-sealed"
    );
    Ok(report)
}
