use crate::core::currency::CurrencyRates;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

pub const DEFAULT_AWARDS_URL: &str = "http://oscars.yipitdata.com/";
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/output";
pub const DEFAULT_CONCURRENCY: usize = 32;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_awards_url() -> String {
    DEFAULT_AWARDS_URL.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Awards index listing films grouped by year
    #[serde(default = "default_awards_url")]
    pub awards_url: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Maximum detail requests in flight
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Per-request timeout for detail lookups
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub rates: CurrencyRates,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            awards_url: default_awards_url(),
            output_dir: default_output_dir(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
            rates: CurrencyRates::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "filmbudget", "filmbudget")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Per-request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
