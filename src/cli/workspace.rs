//! Stores opened from config

use std::path::Path;

use taskdist::adapters::{JsonCvDirectory, TomlWorkforceStore};
use taskdist::config::Config;
use taskdist::core::services::Distributor;

/// Config plus the stores it points at
#[derive(Debug)]
pub struct Workspace {
    /// Effective configuration
    pub config: Config,
    store: TomlWorkforceStore,
    cv: JsonCvDirectory,
}

impl Workspace {
    /// Load config and open the stores it names
    pub fn open(config_path: Option<&Path>) -> anyhow::Result<Self> {
        Ok(Self::from_config(Config::load(config_path)?))
    }

    /// Open the stores named by an already-loaded config
    pub fn from_config(config: Config) -> Self {
        log::debug!(
            "Workforce store {}, CV directory {}",
            config.store.workforce.display(),
            config.store.cv_dir.display()
        );
        Self {
            store: TomlWorkforceStore::new(&config.store.workforce),
            cv: JsonCvDirectory::new(&config.store.cv_dir),
            config,
        }
    }

    /// A distributor over this workspace's stores
    pub fn distributor(&self) -> Distributor<'_> {
        Distributor::new(&self.store, &self.store, &self.store)
            .with_cv(&self.cv)
            .with_weights(self.config.scoring)
            .with_policy(self.config.pool.clone())
    }
}
