//! Catalog of stored entries.
//!
//! Listing is best-effort: every entry is opened to read its metadata, and
//! an entry that fails to open is left out rather than failing the listing.

use chrono::{Local, Utc};

use crate::codec::{decode_label, encode_key, VALIDATION_KEY};
use crate::error::{Result, ValidationError, VaultError};
use crate::storage::gateway::Gateway;
use crate::storage::types::{EntryFields, EntrySummary, Record};

/// Strip control characters (`\x00`-`\x1F`, `\x7F`) and trim whitespace.
///
/// # Examples
///
/// ```
/// use pwstore_core::catalog::sanitize_input;
///
/// assert_eq!(sanitize_input("  git\u{7}hub \n"), "github");
/// ```
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Summaries of every entry that opens under `passphrase`, sorted by key.
///
/// Never includes the validation record. Entries that cannot be read are
/// skipped and logged at debug level.
pub fn list_entries(gateway: &Gateway, passphrase: &str) -> Result<Vec<EntrySummary>> {
    let keys = gateway.store().list()?;
    let mut entries = Vec::with_capacity(keys.len());

    for key in keys {
        if key == VALIDATION_KEY {
            continue;
        }
        match gateway.open(&key, passphrase) {
            Ok(record) => entries.push(EntrySummary {
                label: decode_label(&key),
                username: record.username.clone(),
                email: record.email.clone(),
                created_at: record.created_at,
                key,
            }),
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "skipping unreadable entry");
            }
        }
    }

    Ok(entries)
}

/// Seal a new entry and return its key.
///
/// The label and free-text fields are sanitized; the secret is stored as
/// given.
///
/// # Errors
///
/// - `VaultError::Validation` if the label or secret is empty
/// - `VaultError::KeyCollision` if an entry with the derived key exists
/// - any seal error from the gateway
pub fn add_entry(
    gateway: &Gateway,
    label: &str,
    fields: &EntryFields,
    passphrase: &str,
) -> Result<String> {
    let label = sanitize_input(label);
    if label.is_empty() {
        return Err(ValidationError::Required("Site/Service name").into());
    }
    if fields.secret.is_empty() {
        return Err(ValidationError::Required("Password").into());
    }

    let key = encode_key(&label, &Local::now());
    if gateway.store().contains(&key)? {
        return Err(VaultError::KeyCollision(key));
    }

    let cleaned = EntryFields {
        secret: fields.secret.clone(),
        username: sanitize_input(&fields.username),
        email: sanitize_input(&fields.email),
        url: sanitize_input(&fields.url),
    };
    let record = Record::new(fields.secret.as_str(), Utc::now()).with_fields(&cleaned);
    gateway.seal(&key, &record, passphrase)?;

    tracing::info!(key = %key, "entry added");
    Ok(key)
}

/// Entry keys are flat file names; anything nested is not an entry.
fn is_entry_key(key: &str) -> bool {
    key != VALIDATION_KEY && !key.contains('/')
}

/// Open one entry for the detail view.
///
/// # Errors
///
/// - `VaultError::NotFound` if the key is not an entry key or is absent
/// - `VaultError::Decrypt` if the entry cannot be read
pub fn show_entry(gateway: &Gateway, key: &str, passphrase: &str) -> Result<Record> {
    if !is_entry_key(key) {
        return Err(VaultError::NotFound(key.to_string()));
    }
    gateway.open(key, passphrase)
}

/// Remove an entry. Callers re-list afterwards.
pub fn delete_entry(gateway: &Gateway, key: &str) -> Result<()> {
    if !is_entry_key(key) {
        return Err(VaultError::NotFound(key.to_string()));
    }
    gateway.store().delete(key)?;
    tracing::info!(key = %key, "entry deleted");
    Ok(())
}
