//! Configuration System
//!
//! Layered configuration built with the `config` crate: built-in defaults, an
//! optional user-level TOML file, then an explicit file supplied by the caller.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "delete-result";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ResultsConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.logging
            .validate()
            .map_err(|e| ApiError::ConfigError(format!("logging: {}", e)))
    }
}

/// Path to the user-level config file.
///
/// Uses XDG_CONFIG_HOME when set, otherwise ~/.config/delete-result/config.toml.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE));
        }
    }
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILE)
    })
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)
}

/// Loads [`ResultsConfig`] from its layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    global_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            global_path: global_config_path(),
        }
    }

    /// Loader with an explicit user-level file location (or none).
    pub fn with_global_path(global_path: Option<PathBuf>) -> Self {
        Self { global_path }
    }

    /// Load and validate configuration.
    ///
    /// The user-level file is optional; `explicit`, when given, must exist.
    pub fn load(&self, explicit: Option<&Path>) -> Result<ResultsConfig, ApiError> {
        let mut builder = builder_with_defaults()?;

        if let Some(global) = &self.global_path {
            if global.exists() {
                builder = builder.add_source(File::from(global.as_path()).required(false));
            } else {
                debug!(config_path = %global.display(), "No user-level configuration file");
            }
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: ResultsConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
