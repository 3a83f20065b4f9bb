use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub default_format: String,
    pub color_enabled: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ListingConfig {
    /// Skip entries without an extension (directories of numbered frames
    /// conventionally carry one; stray lockfiles and the like do not).
    pub require_extension: bool,
    pub follow_links: bool,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LogConfig {
    pub enabled: bool,
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            color_enabled: true,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            require_extension: true,
            follow_links: false,
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered
/// configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with the default configuration path
    pub fn new() -> Self {
        Self {
            config_path: paths::get_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    #[allow(dead_code)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("SEQLS_").split("__"));

        figment.extract().context("Failed to load configuration")
    }
}
