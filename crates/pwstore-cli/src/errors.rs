//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use pwstore_core::VaultError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, entry)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong master password)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// Store directory unusable at startup
    Fatal { message: String, hint: String },

    /// Rotation left the validation record in doubt
    Critical(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hint() {
            Some(hint) => write!(f, "{}\n{}", self.message(), hint),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for CliError {}

/// Convert an engine error, classifying it when it has a CLI exit code.
pub fn vault_error(err: VaultError) -> anyhow::Error {
    match CliError::from_vault(&err) {
        Some(mapped) => mapped.into(),
        None => anyhow::Error::new(err),
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and optional hint.
    pub fn auth_failed(message: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a Fatal error with message and hint.
    pub fn fatal(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Fatal {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Map an engine error to its CLI class, if it has one.
    pub fn from_vault(err: &VaultError) -> Option<Self> {
        let mapped = match err {
            VaultError::Fatal { .. } => Self::fatal(
                err.to_string(),
                "Hint: Check that the directory is writable, or pass --store <PATH>.",
            ),
            VaultError::CriticalInconsistency(_) => CliError::Critical(err.to_string()),
            VaultError::NotFound(_) => Self::not_found(
                err.to_string(),
                "Hint: Run `pwstore` and choose \"List entries\" to see what is stored.",
            ),
            VaultError::IncorrectPassword => Self::auth_failed(err.to_string()),
            VaultError::Validation(_)
            | VaultError::KeyCollision(_)
            | VaultError::AlreadyInitialized
            | VaultError::InvalidState(_) => Self::invalid_input(err.to_string()),
            _ => return None,
        };
        Some(mapped)
    }

    /// The main message without hint.
    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. }
            | CliError::AuthFailed { message, .. }
            | CliError::Fatal { message, .. } => message,
            CliError::InvalidInput(message) | CliError::Critical(message) => message,
        }
    }

    /// The hint line, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } | CliError::Fatal { hint, .. } => Some(hint),
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            CliError::Critical(_) => {
                Some("Hint: Do not retry. Back up the store directory and inspect .checker/init.gpg manually.")
            }
            CliError::InvalidInput(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Fatal { .. } => exit_codes::FATAL,
            CliError::Critical(_) => exit_codes::CRITICAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;
    use pwstore_core::ValidationError;
    use std::path::PathBuf;

    #[test]
    fn test_vault_error_exit_codes() {
        let fatal = VaultError::Fatal {
            path: PathBuf::from("/store"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let cases = [
            (fatal, exit_codes::FATAL),
            (
                VaultError::CriticalInconsistency("x".into()),
                exit_codes::CRITICAL,
            ),
            (VaultError::NotFound("k".into()), exit_codes::NOT_FOUND),
            (VaultError::IncorrectPassword, exit_codes::AUTH_FAILED),
            (
                VaultError::Validation(ValidationError::NoCharacterClass),
                exit_codes::INVALID_INPUT,
            ),
        ];
        for (err, code) in cases {
            let mapped = CliError::from_vault(&err).expect("mapped");
            assert_eq!(mapped.exit_code(), code, "{}", err);
        }
    }

    #[test]
    fn test_unclassified_errors_fall_through() {
        assert!(CliError::from_vault(&VaultError::Storage("disk".into())).is_none());
        assert!(CliError::from_vault(&VaultError::Decrypt).is_none());
    }

    #[test]
    fn test_display_includes_hint() {
        let err = CliError::not_found("Entry not found", "Hint: list first");
        assert_eq!(err.to_string(), "Entry not found\nHint: list first");
        assert_eq!(CliError::invalid_input("bad").to_string(), "bad");
        assert!(CliError::Critical("x".into()).hint().is_some());
    }
}
