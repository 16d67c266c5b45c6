//! Authenticated session state.
//!
//! A `Session` exists only after a successful login and is passed explicitly
//! to every operation that needs the master passphrase. The passphrase is
//! held in a [`SecretString`] and wiped when the session is dropped.

use secrecy::{ExposeSecret, SecretString};

/// Master passphrase plus the last user-facing error.
pub struct Session {
    passphrase: SecretString,
    last_error: Option<String>,
}

impl Session {
    pub(crate) fn new(passphrase: &str) -> Self {
        Self {
            passphrase: SecretString::from(passphrase.to_string()),
            last_error: None,
        }
    }

    /// The active master passphrase.
    ///
    /// Avoid storing or logging this value.
    pub fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }

    pub(crate) fn replace_passphrase(&mut self, passphrase: &str) {
        self.passphrase = SecretString::from(passphrase.to_string());
    }

    /// Record an error for the next screen to show.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// The pending error, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Take and clear the pending error.
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("passphrase", &"[REDACTED]")
            .field("last_error", &self.last_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_slot() {
        let mut session = Session::new("correcthorse");
        assert!(session.last_error().is_none());

        session.set_error("could not read this entry");
        assert_eq!(session.last_error(), Some("could not read this entry"));
        assert_eq!(session.take_error().as_deref(), Some("could not read this entry"));
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_replace_passphrase() {
        let mut session = Session::new("old-passphrase");
        session.replace_passphrase("new-passphrase");
        assert_eq!(session.passphrase(), "new-passphrase");
    }

    #[test]
    fn test_debug_redacts() {
        let session = Session::new("correcthorse");
        let output = format!("{:?}", session);
        assert!(output.contains("REDACTED"));
        assert!(!output.contains("correcthorse"));
    }
}
