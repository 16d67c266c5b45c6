//! Application context for the pwstore CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use pwstore_core::{PasswordOptions, Vault};

use crate::cli::Cli;
use crate::config::{load_config, PwstoreConfig};
use crate::errors::vault_error;
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_store_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<PwstoreConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&PwstoreConfig> {
        self.config.get_or_try_init(|| {
            let (path, explicit) = resolve_config_path(self.cli)?;
            load_config(&path, explicit)
        })
    }

    /// UI context honoring `--no-color` and `ui.color`.
    ///
    /// Falls back to defaults when the config cannot be read, so errors
    /// about the config itself can still be rendered.
    pub fn ui(&self) -> UiContext {
        let color_setting = self.config().map(|c| c.ui.color).unwrap_or(true);
        UiContext::from_env(self.cli.no_color, color_setting)
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Generator defaults from the `[generator]` config section.
    pub fn password_options(&self) -> anyhow::Result<PasswordOptions> {
        Ok(self.config()?.generator.clone())
    }

    /// Prepare the store directory and open the vault.
    pub fn open_vault(&self) -> anyhow::Result<Vault> {
        let path = self.store_path()?;
        tracing::debug!(store = %path.display(), "opening store");
        Vault::open(&path).map_err(vault_error)
    }
}
