use std::path::{Path, PathBuf};

use pwstore_core::PasswordOptions;
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR_NAME, STORE_DIR_NAME};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PwstoreConfig {
    pub store: StoreSection,
    pub generator: PasswordOptions,
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self { color: true }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(STORE_DIR_NAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<PwstoreConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`; a missing file yields defaults unless
/// `required` is set.
pub fn load_config(path: &Path, required: bool) -> anyhow::Result<PwstoreConfig> {
    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PwstoreConfig::default());
    }
    read_config(path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(CONFIG_DIR_NAME));
        }
    }
    Ok(home_dir()?.join(".config").join(CONFIG_DIR_NAME))
}

/// Expand a leading `~/` against `$HOME`.
pub fn expand_home(path: &str) -> anyhow::Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None if path == "~" => home_dir(),
        None => Ok(PathBuf::from(path)),
    }
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
