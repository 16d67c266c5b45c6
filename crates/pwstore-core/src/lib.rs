//! # pwstore Core
//!
//! Core library for pwstore - a local, offline password store: a directory of
//! individually encrypted records gated by a single master passphrase.
//!
//! This crate holds the engine: store layout, record encryption, bootstrap and
//! login, the catalog, master passphrase rotation and password generation.
//! The terminal front-end lives in `pwstore-cli`.
//!
//! ## Architecture
//!
//! - **codec**: store key encoding (`<label>_<YYYYMMDD_HHMMSS>`)
//! - **generator**: password generation and strength scoring
//! - **storage**: blob store, cipher boundary and encryption gateway
//! - **validation**: bootstrap and login against the validation record
//! - **catalog**: list, add, show and delete entries
//! - **rotation**: master passphrase change protocol
//! - **vault**: facade tying the above together
//! - **flows**: state machines for setup, login, rotation and browsing

pub mod catalog;
pub mod codec;
pub mod error;
pub mod flows;
pub mod fs;
pub mod generator;
pub mod rotation;
pub mod session;
pub mod storage;
pub mod validation;
pub mod vault;

pub use error::{Result, ValidationError, VaultError};
pub use generator::{evaluate_strength, generate_password, PasswordOptions, Strength};
pub use rotation::{RotationOptions, RotationReport};
pub use session::Session;
pub use storage::{EntryFields, EntrySummary, Record};
pub use vault::Vault;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
