//! Record types persisted by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One credential entry.
///
/// Serialized to JSON before encryption. Records are immutable once written;
/// any change is a full rewrite. String fields are wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Record {
    #[serde(alias = "password")]
    pub secret: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub url: Option<String>,
    #[zeroize(skip)]
    pub created_at: DateTime<Utc>,
    #[zeroize(skip)]
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Create a record stamped with `now` for both timestamps.
    pub fn new(secret: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            secret: secret.into(),
            username: None,
            email: None,
            url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy optional metadata from submitted fields.
    pub fn with_fields(mut self, fields: &EntryFields) -> Self {
        self.username = non_empty(&fields.username);
        self.email = non_empty(&fields.email);
        self.url = non_empty(&fields.url);
        self
    }

    /// Whether the record was rewritten after creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("url", &self.url)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Values submitted by the add-entry form.
#[derive(Debug, Clone, Default)]
pub struct EntryFields {
    pub secret: String,
    pub username: String,
    pub email: String,
    pub url: String,
}

/// Display metadata for one catalog entry. Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub key: String,
    pub label: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_serialized_field_names() {
        let record = Record::new("hunter22", now()).with_fields(&EntryFields {
            username: "jake".into(),
            ..EntryFields::default()
        });
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        let object = json.as_object().unwrap();
        for field in ["secret", "username", "email", "url", "created_at", "updated_at"] {
            assert!(object.contains_key(field), "missing {}", field);
        }
        assert_eq!(json["username"], "jake");
        assert!(json["email"].is_null());
    }

    #[test]
    fn test_reads_legacy_password_field_and_empty_strings() {
        let json = r#"{
            "password": "s3cret",
            "username": "",
            "email": "a@example.com",
            "url": "",
            "created_at": "2024-05-01T08:30:00Z",
            "updated_at": "2024-05-01T08:30:00+02:00"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.secret, "s3cret");
        assert_eq!(record.username, None);
        assert_eq!(record.email.as_deref(), Some("a@example.com"));
        assert!(record.was_updated());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let record = Record::new("do-not-print", now());
        let output = format!("{:?}", record);
        assert!(output.contains("REDACTED"));
        assert!(!output.contains("do-not-print"));
    }

    #[test]
    fn test_with_fields_drops_blank_values() {
        let record = Record::new("x", now()).with_fields(&EntryFields {
            secret: "x".into(),
            username: "   ".into(),
            email: " me@example.com ".into(),
            url: String::new(),
        });
        assert_eq!(record.username, None);
        assert_eq!(record.email.as_deref(), Some("me@example.com"));
        assert_eq!(record.url, None);
    }
}
