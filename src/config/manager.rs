//! Configuration manager for loading and saving component configuration
//!
//! The configuration path comes from `IMAGE_WIDGET_CONFIG`, falling back to
//! `image-widget.json` in the working directory.

use crate::config::models::WidgetConfig;
use crate::error::{ImageWidgetError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the configuration path
pub const CONFIG_PATH_ENV: &str = "IMAGE_WIDGET_CONFIG";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map_or_else(|| PathBuf::from("image-widget.json"), PathBuf::from)
    }

    /// Load configuration from the default path
    pub fn load() -> Result<WidgetConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`
    ///
    /// If the file doesn't exist or is corrupt, returns default configuration.
    pub fn load_from(path: &Path) -> Result<WidgetConfig> {
        if !path.exists() {
            info!("Configuration file {} not found, using defaults", path.display());
            return Ok(WidgetConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(WidgetConfig::default())
            }
        }
    }

    /// Save configuration to `path` with atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save_to(config: &WidgetConfig, path: &Path) -> Result<()> {
        let file_name = path.file_name().ok_or_else(|| {
            ImageWidgetError::ConfigError(StringError::new("Invalid config path"))
        })?;
        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        if !config_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(config_dir)?;
        }

        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        let temp_path = config_dir.join(temp_name);
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, path)?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
