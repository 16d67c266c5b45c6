//! Storage abstraction for pwstore.
//!
//! ## Architecture
//!
//! - **traits**: the `BlobStore` seam (named ciphertext blobs)
//! - **dir**: the directory-backed store (`~/.password-manager-store/`)
//! - **encryption**: the `Cipher` boundary and its age implementation
//! - **gateway**: record serialization on top of store + cipher
//! - **types**: `Record` and the catalog's display types
//!
//! ## Security
//!
//! - Encryption at rest (no plaintext modes)
//! - Owner-only permissions on every directory and file
//! - Atomic writes so a failed write never damages the previous blob

pub mod dir;
pub mod encryption;
pub mod gateway;
pub mod traits;
pub mod types;

pub use dir::DirStore;
pub use encryption::{AgeCipher, Cipher};
pub use gateway::Gateway;
pub use traits::BlobStore;
pub use types::{EntryFields, EntrySummary, Record};
