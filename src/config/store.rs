//! Thread-safe configuration storage.
//!
//! The generation client reads the store on every request, so a reload
//! (or a credential set at runtime) takes effect on the next submission.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-place change to the current config.
    pub fn update<F: FnOnce(&mut Config)>(&self, change: F) {
        change(&mut *self.inner.write());
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
