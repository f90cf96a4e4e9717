//! Configuration management

use crate::domain::PeriodKind;
use crate::error::{LedgerError, Result};
use crate::infrastructure::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "HRLEDGER_CONFIG";

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "hrledger.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Period used when no period flags are given
    pub default_period: PeriodKind,
    /// Rows per page for listings
    pub page_size: usize,
    /// Suffix printed after amounts
    pub currency: String,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_period: PeriodKind::Month,
            page_size: 20,
            currency: "VND".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load the config for a run
    ///
    /// Lookup order: `explicit` path, then `HRLEDGER_CONFIG`, then
    /// `hrledger.toml` in `dir`, then built-in defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match Self::locate(explicit, std::env::var_os(CONFIG_ENV), dir) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Config::default()),
        }
    }

    /// Pick the config file to read, if any
    ///
    /// Explicit and environment paths are returned even when missing so that a
    /// typo is reported instead of silently falling back to defaults.
    pub fn locate(explicit: Option<&Path>, env: Option<OsString>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(value) = env.filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(value));
        }
        let local = dir.join(CONFIG_FILE_NAME);
        local.is_file().then_some(local)
    }

    /// Read and validate a config file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LedgerError::Config(format!("Config file not found: {}", path.display()))
            } else {
                LedgerError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(LedgerError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
