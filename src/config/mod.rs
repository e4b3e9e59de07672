// ABOUTME: Configuration management for sos2a
// Handles data/log locations, UI preferences, and the default log filter

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Override for where submitted assessments are stored
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Open the help overlay when the wizard starts
    #[serde(default)]
    pub show_help_on_start: bool,

    /// Event poll / redraw interval in milliseconds (default: 250ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_help_on_start: false,
            tick_rate_ms: default_tick_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_log_filter() -> String {
    "sos2a=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            data_dir: None,
            ui: UiPreferences::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load and merge the given files, lowest precedence first. Missing files are skipped.
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();

        for path in paths {
            if path.exists() {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;

                let file_config: AppConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;

                config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Save configuration to user config directory
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::get_user_config_dir()?;
        self.save_to(&config_dir.join("config.toml"))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/sos2a/config.toml")];

        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".sos2a").join("config.toml"));
        }

        paths
    }

    /// Base directory (~/.sos2a)
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".sos2a"))
    }

    fn get_user_config_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config"))
    }

    /// Where the store keeps its tables
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::base_dir()?.join("data")),
        }
    }

    pub fn log_dir() -> PathBuf {
        Self::base_dir()
            .map(|base| base.join("logs"))
            .unwrap_or_else(|_| PathBuf::from(".sos2a/logs"))
    }

    /// Merge another config into this one
    fn merge(&mut self, other: AppConfig) {
        // Don't override version
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.ui.show_help_on_start {
            self.ui.show_help_on_start = true;
        }
        if other.ui.tick_rate_ms != default_tick_rate() {
            self.ui.tick_rate_ms = other.ui.tick_rate_ms;
        }
        if other.logging.filter != default_log_filter() {
            self.logging.filter = other.logging.filter;
        }
    }
}
