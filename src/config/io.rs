//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.relaykey/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".relaykey")
    }

    /// Get the global config file path (~/.relaykey/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Load global configuration from ~/.relaykey/config.toml
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::global_config_path())
    }

    /// Write config text to `path` under a lock file, via a temp file and rename.
    ///
    /// The text must parse as a `Config`; the parent directory is created if needed.
    pub fn write_file(path: &Path, content: &str) -> Result<()> {
        toml::from_str::<Config>(content)
            .with_context(|| format!("Refusing to write invalid config: {}", path.display()))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        lock_file
            .lock_exclusive()
            .with_context(|| format!("Failed to lock {}", lock_path.display()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.sync_all())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move config into place: {}", path.display()))?;

        tracing::debug!("Wrote config to {}", path.display());
        Ok(())
    }
}
