//! Configuration management
//!
//! Config is read from, in order:
//!
//! 1. an explicit `--config <path>` (must exist),
//! 2. `./taskdist.toml`,
//! 3. `{config_dir}/taskdist/config.toml`,
//! 4. built-in defaults.
//!
//! Relative store paths are resolved against the directory of the file they
//! came from.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::services::{PoolPolicy, ScoringWeights};
use crate::paths;

/// taskdist configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where tasks, employees and CV profiles live
    #[serde(default)]
    pub store: StoreConfig,
    /// Scoring weights
    #[serde(default)]
    pub scoring: ScoringWeights,
    /// Employee eligibility
    #[serde(default)]
    pub pool: PoolPolicy,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Store locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Workforce TOML file
    pub workforce: PathBuf,
    /// Directory of JSON CV profiles
    pub cv_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            workforce: PathBuf::from(paths::WORKFORCE_FILE),
            cv_dir: PathBuf::from(paths::CV_DIR),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub bind: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load config following the lookup order
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path does not exist, or if any config
    /// file that does exist cannot be parsed.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        for candidate in [paths::project_config(), paths::global_config()] {
            if candidate.exists() {
                log::debug!("Using config {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        if let Some(field) = config.scoring.first_negative() {
            anyhow::bail!("{}: [scoring] {field} must not be negative", path.display());
        }
        if let Some(base) = path.parent() {
            config.store.resolve_against(base);
        }
        Ok(config)
    }

    /// Save config to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl StoreConfig {
    fn resolve_against(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        if self.workforce.is_relative() {
            self.workforce = base.join(&self.workforce);
        }
        if self.cv_dir.is_relative() {
            self.cv_dir = base.join(&self.cv_dir);
        }
    }
}
