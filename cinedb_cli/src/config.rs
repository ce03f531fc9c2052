//! Layered CLI configuration
//!
//! Defaults -> TOML config file -> CINEDB_* environment variables. The
//! config file lives under the XDG config directory; `CINEDB_API_KEY` is
//! accepted as a direct override so a credential never has to be written to
//! disk.

use anyhow::{Context, Result};
use cinedb_client_core::ClientConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub default_format: String,
    pub color_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            color_enabled: true,
        }
    }
}

/// Handles config file location and layered loading
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Use a specific config path (for testing)
    #[allow(dead_code)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("cinedb/config.toml");
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cinedb/config.toml")
    }

    /// Load configuration: defaults, then file, then environment
    pub fn load(&self) -> Result<AppConfig> {
        let mut config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.config_path))
            .merge(Env::prefixed("CINEDB_").split("__"))
            .extract()
            .context("failed to load configuration")?;

        // Credential shortcut so users can skip the nested CLIENT__ form.
        if let Ok(api_key) = std::env::var("CINEDB_API_KEY") {
            if !api_key.is_empty() {
                config.client.api_key = api_key;
            }
        }
        Ok(config)
    }

    /// Write a default config file, refusing to clobber an existing one
    pub fn init(&self) -> Result<()> {
        if self.config_path.exists() {
            anyhow::bail!(
                "config file already exists at {}",
                self.config_path.display()
            );
        }
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let rendered = toml::to_string_pretty(&AppConfig::default())
            .context("failed to render default configuration")?;
        fs::write(&self.config_path, rendered)
            .with_context(|| format!("failed to write {}", self.config_path.display()))?;
        Ok(())
    }
}
