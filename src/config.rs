use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::messages::DEFAULT_WARNINGS;

pub const DEFAULT_THRESHOLD_MS: u64 = 350;
pub const DEFAULT_REVERT_FACTOR: u32 = 4;
pub const DEFAULT_CURSOR: char = '|';

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub threshold_ms: u64,
    pub revert_factor: u32,
    pub warnings: Vec<String>,
    pub cursor: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_ms: DEFAULT_THRESHOLD_MS,
            revert_factor: DEFAULT_REVERT_FACTOR,
            warnings: DEFAULT_WARNINGS.iter().map(|s| s.to_string()).collect(),
            cursor: DEFAULT_CURSOR,
        }
    }
}

/// Reasons a config can't be turned into runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroThreshold,
    ZeroRevertFactor,
    TooFewWarnings(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroThreshold => write!(f, "threshold must be at least 1ms"),
            ConfigError::ZeroRevertFactor => write!(f, "revert factor must be at least 1"),
            ConfigError::TooFewWarnings(n) => write!(
                f,
                "need a calm string and at least one warning, got {} string(s)",
                n
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("slowpoke_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // no config file yet is the normal case
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
