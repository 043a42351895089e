//! Context configuration file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::context as context_config;
use crate::error::{PlatformError, Result};

use super::models::ContextConfig;

/// Reads and writes `~/.solctl/config.json`
pub struct ContextStore {
    config_path: PathBuf,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStore {
    /// Store backed by the default config path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Store backed by a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(context_config::DIR_NAME)
            .join(context_config::FILE_NAME)
    }

    /// Load the configuration. A missing file yields an empty config;
    /// an unreadable or corrupt one is an error.
    pub fn load(&self) -> Result<ContextConfig> {
        if !self.config_path.exists() {
            debug!("No config file at {}", self.config_path.display());
            return Ok(ContextConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| self.config_error("read", &e))?;

        serde_json::from_str(&content).map_err(|e| self.config_error("parse", &e))
    }

    /// Save the configuration, replacing the file atomically
    pub fn save(&self, config: &ContextConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PlatformError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| PlatformError::Config(format!("Failed to serialize config: {}", e)))?;

        let tmp_path = self.config_path.with_extension("json.tmp");
        write_private(&tmp_path, &json)?;

        fs::rename(&tmp_path, &self.config_path).map_err(|e| self.config_error("replace", &e))?;
        debug!("Saved config to {}", self.config_path.display());
        Ok(())
    }

    fn config_error(&self, action: &str, err: &dyn std::fmt::Display) -> PlatformError {
        PlatformError::Config(format!(
            "Failed to {} context config {}: {}",
            action,
            self.config_path.display(),
            err
        ))
    }
}

/// Write a file readable only by the owner (tokens live in it)
fn write_private(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        PlatformError::Config(format!("Failed to write {}: {}", path.display(), e))
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            PlatformError::Config(format!(
                "Failed to set permissions on {}: {}",
                path.display(),
                e
            ))
        })?;
    }

    Ok(())
}
