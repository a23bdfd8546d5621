//! Settings file
//!
//! Loaded from `--config <path>` or `<config_dir>/backfill/config.toml`.
//! Every key is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::git::constants::DEFAULT_REMOTE;
use crate::model::{DEFAULT_MAX_STEP_MINUTES, DEFAULT_MIN_STEP_MINUTES};
use crate::reachability::DEFAULT_TIMEOUT_SECS;
use crate::run_log::DEFAULT_LOG_DIR;

/// Errors reading the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Repository prefilled in the form and used by the console
    pub repo_path: Option<PathBuf>,
    /// Profile URL for the reachability check
    pub profile_url: Option<String>,
    /// Remote to push to
    pub remote: String,
    /// Directory for run logs and the diagnostics log
    pub log_dir: PathBuf,
    pub min_step_minutes: u32,
    pub max_step_minutes: u32,
    pub reachability_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_path: None,
            profile_url: None,
            remote: DEFAULT_REMOTE.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            min_step_minutes: DEFAULT_MIN_STEP_MINUTES,
            max_step_minutes: DEFAULT_MAX_STEP_MINUTES,
            reachability_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// The default settings path: `<config_dir>/backfill/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("backfill").join("config.toml"))
    }

    /// Load settings
    ///
    /// An explicit path must exist. The default path is optional: when it is
    /// absent, defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Timeout for the reachability check
    pub fn reachability_timeout(&self) -> Duration {
        Duration::from_secs(self.reachability_timeout_secs)
    }

    /// Load and parse a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
