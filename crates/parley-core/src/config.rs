//! Configuration management for Parley.
//!
//! Loads configuration from ${PARLEY_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Color theme used by the terminal renderer.
///
/// The session core only reads this value; it is never changed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Conversation store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Artificial latency added to conversation creation (milliseconds).
    pub create_latency_ms: u64,
}

impl StoreConfig {
    pub fn create_latency(&self) -> Duration {
        Duration::from_millis(self.create_latency_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level filter directive (e.g. "info", "parley_tui=debug").
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Parley configuration and data directories.
    //!
    //! PARLEY_HOME resolution order:
    //! 1. PARLEY_HOME environment variable (if set)
    //! 2. ~/.config/parley (default)
    //! 3. ./.parley when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Parley home directory.
    pub fn parley_home() -> PathBuf {
        if let Ok(home) = std::env::var("PARLEY_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".parley"),
            |h| h.join(".config").join("parley"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        parley_home().join("config.toml")
    }

    /// Returns the directory holding rolling log files.
    pub fn logs_dir() -> PathBuf {
        parley_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal width (columns) below which the narrow layout is used.
    pub mobile_breakpoint: u16,

    /// Title for conversations created via "new chat".
    pub default_conversation_title: String,

    /// Seconds a notice stays visible.
    pub notice_ttl_secs: u64,

    /// Color theme.
    pub theme: Theme,

    /// Models offered by the header selector, in cycling order.
    pub models: Vec<String>,

    /// Model selected at startup. Must be one of `models`.
    pub default_model: String,

    /// Conversation store settings.
    pub store: StoreConfig,

    /// Logging settings.
    pub log: LogConfig,
}

impl Config {
    pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 100;
    pub const DEFAULT_CONVERSATION_TITLE: &str = "New Chat";
    const DEFAULT_NOTICE_TTL_SECS: u64 = 5;
    const DEFAULT_MODELS: [&str; 4] = [
        "GPT-4o Vision (Unrestricted)",
        "GPT-4 Turbo",
        "GPT-3.5 Turbo",
        "DALL-E 3",
    ];

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.mobile_breakpoint > 0,
            "mobile_breakpoint must be at least 1"
        );
        anyhow::ensure!(!self.models.is_empty(), "models must not be empty");
        anyhow::ensure!(
            self.models.contains(&self.default_model),
            "default_model {:?} is not listed in models",
            self.default_model
        );
        Ok(())
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if a config file already exists there.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Serializes the Rust defaults to TOML.
    pub fn generate() -> Result<String> {
        toml::to_string(&Config::default()).context("Failed to serialize default config to TOML")
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mobile_breakpoint: Self::DEFAULT_MOBILE_BREAKPOINT,
            default_conversation_title: Self::DEFAULT_CONVERSATION_TITLE.to_string(),
            notice_ttl_secs: Self::DEFAULT_NOTICE_TTL_SECS,
            theme: Theme::default(),
            models: Self::DEFAULT_MODELS.map(String::from).to_vec(),
            default_model: Self::DEFAULT_MODELS[0].to_string(),
            store: StoreConfig::default(),
            log: LogConfig::default(),
        }
    }
}
