use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "config parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Command producing the inventory text, one entry per VM.
    pub list_command: Vec<String>,
    /// Command that starts a VM; the result id is appended as the last arg.
    pub start_command: Vec<String>,
    /// Command that opens the management application itself.
    pub launch_command: Vec<String>,
    pub max_results: u16,
    pub icon_name: String,
    pub icon_fallback: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_command: vec!["VBoxManage".into(), "list".into(), "vms".into()],
            start_command: vec!["VBoxManage".into(), "startvm".into()],
            launch_command: vec!["virtualbox".into()],
            max_results: 20,
            icon_name: "virtualbox".into(),
            icon_fallback: "computer".into(),
        }
    }
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.list_command.is_empty() {
        return Err("list_command is required".into());
    }

    if cfg.start_command.is_empty() {
        return Err("start_command is required".into());
    }

    if cfg.max_results < 1 || cfg.max_results > 100 {
        return Err("max_results out of range".into());
    }

    Ok(())
}

/// Loads the config file at `path`, or the default location when `None`.
/// A missing file yields the defaults; a present but broken file is an error.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path(),
    };

    let config = if path.exists() {
        let text = std::fs::read_to_string(&path)?;
        toml::from_str(&text).map_err(ConfigError::Parse)?
    } else {
        Config::default()
    };

    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn default_config_path() -> PathBuf {
    stable_app_data_dir().join("config.toml")
}

pub fn stable_app_data_dir() -> PathBuf {
    if let Ok(base) = std::env::var("XDG_DATA_HOME") {
        if !base.is_empty() {
            return PathBuf::from(base).join("vmsearch");
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".local/share/vmsearch");
        }
    }

    std::env::temp_dir().join("vmsearch")
}
