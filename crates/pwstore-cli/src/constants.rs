//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap for usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong master password).
    pub const AUTH_FAILED: i32 = 5;

    /// The store directory cannot be created or read.
    pub const FATAL: i32 = 6;

    /// The validation record may be unreadable; manual inspection needed.
    pub const CRITICAL: i32 = 7;
}

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "PWSTORE_LOG";

/// Directory name of the store under `$HOME`.
pub const STORE_DIR_NAME: &str = ".password-manager-store";

/// Directory name under the XDG config home.
pub const CONFIG_DIR_NAME: &str = "pwstore";
