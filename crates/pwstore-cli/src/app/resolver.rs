//! Path resolution for the config file and the store directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, expand_home, PwstoreConfig};

/// Resolve the config file path. Returns the path and whether it was given
/// explicitly with `--config`.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<(PathBuf, bool)> {
    match cli.config.as_deref() {
        Some(path) if !path.trim().is_empty() => Ok((expand_home(path)?, true)),
        _ => Ok((default_config_path()?, false)),
    }
}

/// Resolve the store directory: `--store` / `PWSTORE_STORE`, then the
/// config file, then `$HOME/.password-manager-store`.
pub fn resolve_store_path(cli: &Cli, config: &PwstoreConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return expand_home(path);
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return expand_home(path);
    }
    default_store_path()
}
