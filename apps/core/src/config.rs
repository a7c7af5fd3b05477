use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application data lives in the platform's per-user data directory, with a
/// temp-dir fallback for stripped-down environments.
pub fn stable_app_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "Ctrl", "Ctrl")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("ctrl"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_results: u16,
    pub database_path: PathBuf,
    /// Where this config was loaded from; not part of the file itself.
    #[serde(skip)]
    pub config_path: PathBuf,
    pub clipboard: ClipboardConfig,
    pub file_search: FileSearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub enabled: bool,
    /// How often the host is expected to tick the clipboard poll.
    pub poll_interval_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            enabled: true,
            poll_interval_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    pub enabled: bool,
    /// Extra directories to index and walk besides the user folders.
    pub extra_roots: Vec<PathBuf>,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        FileSearchConfig {
            enabled: true,
            extra_roots: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let base = stable_app_data_dir();
        Self {
            max_results: 50,
            database_path: base.join("ctrl.db"),
            config_path: base.join("config.toml"),
            clipboard: ClipboardConfig::default(),
            file_search: FileSearchConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config io error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {err}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

/// Loads the config from `path`, or from the standard location when `None`.
/// A missing file yields the defaults; a present but malformed or invalid
/// file is an error rather than a silent fallback.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::default().config_path,
    };
    if !path.exists() {
        let mut cfg = Config::default();
        cfg.config_path = path;
        return Ok(cfg);
    }

    let text = fs::read_to_string(&path)?;
    let mut cfg: Config = toml::from_str(&text)?;
    cfg.config_path = path;
    validate(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

pub fn save(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = cfg.config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(cfg)?;
    fs::write(&cfg.config_path, text)?;
    Ok(())
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.max_results < 5 || cfg.max_results > 100 {
        return Err("max_results out of range".into());
    }

    if cfg.database_path.as_os_str().is_empty() {
        return Err("database_path is required".into());
    }

    if cfg.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    if cfg.clipboard.poll_interval_ms < 100 || cfg.clipboard.poll_interval_ms > 10_000 {
        return Err("clipboard.poll_interval_ms out of range".into());
    }

    Ok(())
}
