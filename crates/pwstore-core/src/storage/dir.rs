//! Directory-backed blob store.
//!
//! Layout under the root:
//!
//! ```text
//! <root>/                          (0700)
//! ├── .checker/                    (0700)
//! │   └── init.gpg                 validation record
//! └── <label>_<YYYYMMDD_HHMMSS>.gpg
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::codec::{BLOB_EXTENSION, VALIDATION_KEY};
use crate::error::{Result, ValidationError, VaultError};
use crate::fs::{ensure_private_dir, write_atomic};
use crate::storage::traits::BlobStore;

/// Name of the subdirectory holding the validation record.
pub const CHECKER_DIR: &str = ".checker";

/// A store rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Prepare the store directory and report whether it is bootstrapped.
    ///
    /// Creates the root and its `.checker` subdirectory with owner-only
    /// permissions when absent. Returns the store together with the
    /// `Initialized` flag (the validation record exists).
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Fatal` if the root or `.checker` cannot be created
    /// or the root cannot be read. The process cannot continue without them.
    pub fn ensure_ready(root: impl Into<PathBuf>) -> Result<(Self, bool)> {
        let root = root.into();
        let fatal = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| VaultError::Fatal { path, source }
        };

        if !root.is_dir() {
            tracing::info!(root = %root.display(), "creating password store");
        }
        ensure_private_dir(&root).map_err(fatal(&root))?;
        fs::read_dir(&root).map_err(fatal(&root))?;

        let checker = root.join(CHECKER_DIR);
        ensure_private_dir(&checker).map_err(fatal(&checker))?;

        let store = Self { root };
        let initialized = store.path_for(VALIDATION_KEY)?.is_file();
        tracing::debug!(initialized, "password store ready");
        Ok((store, initialized))
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Rejects empty keys, absolute paths, and empty, `.` or `..` segments
    /// (`a//b`, `a/./b`, a trailing `/`). Each file has exactly one key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let invalid = || VaultError::from(ValidationError::InvalidKey(key.to_string()));
        if key
            .split('/')
            .any(|segment| matches!(segment, "" | "." | ".."))
        {
            return Err(invalid());
        }

        let relative = Path::new(key);
        let mut path = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => path.push(part),
                _ => return Err(invalid()),
            }
        }

        let file_name = path
            .file_name()
            .ok_or_else(invalid)?
            .to_string_lossy()
            .into_owned();
        path.set_file_name(format!("{}.{}", file_name, BLOB_EXTENSION));
        Ok(path)
    }
}

impl BlobStore for DirStore {
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        write_atomic(&path, bytes)
            .map_err(|e| VaultError::Storage(format!("Failed to write {}: {}", key, e)))?;
        tracing::debug!(key, bytes = bytes.len(), "blob written");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path_for(key)?;
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => VaultError::NotFound(key.to_string()),
            _ => VaultError::Storage(format!("Failed to read {}: {}", key, e)),
        })
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => VaultError::NotFound(key.to_string()),
            _ => VaultError::Storage(format!("Failed to delete {}: {}", key, e)),
        })?;
        tracing::debug!(key, "blob deleted");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let suffix = format!(".{}", BLOB_EXTENSION);
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            // Follows symlinks so only directories and other non-files drop out.
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(key) = name.strip_suffix(&suffix) {
                if !key.is_empty() {
                    keys.push(key.to_string());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.path_for(key)?.is_file())
    }
}
