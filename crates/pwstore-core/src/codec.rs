//! Store key encoding.
//!
//! A record's key is derived from a human label and its creation instant:
//! `<sanitized-label>_<YYYYMMDD_HHMMSS>`. Keys sort lexicographically by label,
//! then chronologically.

use chrono::{DateTime, TimeZone};

/// Reserved key of the validation record. Never a user record.
pub const VALIDATION_KEY: &str = ".checker/init";

/// File extension of every persisted blob.
pub const BLOB_EXTENSION: &str = "gpg";

/// Maximum number of label characters kept in a key.
pub const MAX_LABEL_CHARS: usize = 20;

/// `chrono` format of the key's timestamp suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const TIMESTAMP_LEN: usize = 15;

/// Build a store key from a label and creation instant.
///
/// Characters outside `[A-Za-z0-9-_]` become `_`, the result is lower-cased
/// and cut to [`MAX_LABEL_CHARS`]. The timestamp is rendered in the instant's
/// own timezone.
pub fn encode_key<Tz: TimeZone>(label: &str, created_at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let clean: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .take(MAX_LABEL_CHARS)
        .collect();

    format!("{}_{}", clean, created_at.format(TIMESTAMP_FORMAT))
}

/// Recover a display label from a store key.
///
/// A trailing `.gpg` is ignored. When the key ends in `_YYYYMMDD_HHMMSS` that
/// suffix is dropped; keys of any other shape are kept whole. Remaining
/// underscores become spaces.
pub fn decode_label(key: &str) -> String {
    let key = key
        .strip_suffix(&format!(".{}", BLOB_EXTENSION))
        .unwrap_or(key);

    let label = match split_timestamp(key) {
        Some(prefix) => prefix,
        None => key,
    };

    label.replace('_', " ")
}

/// Return the label part of `key` if it ends in a well-formed timestamp.
fn split_timestamp(key: &str) -> Option<&str> {
    if key.len() < TIMESTAMP_LEN + 1 {
        return None;
    }
    let split = key.len() - TIMESTAMP_LEN;
    if !key.is_char_boundary(split) {
        return None;
    }
    let (head, suffix) = key.split_at(split);
    let prefix = head.strip_suffix('_')?;

    let bytes = suffix.as_bytes();
    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        8 => *b == b'_',
        _ => b.is_ascii_digit(),
    });

    shaped.then_some(prefix)
}
