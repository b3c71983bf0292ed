use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::error::{Error, Result};

static INSTANCE: Lazy<ConfigManager> = Lazy::new(|| ConfigManager::with_config(Config::default()));

/// Holds the process-wide defaults used by the helpers whenever an optional
/// argument is omitted.
pub struct ConfigManager {
    config: RwLock<Config>,
}

impl ConfigManager {
    fn with_config(config: Config) -> Self {
        ConfigManager {
            config: RwLock::new(config),
        }
    }

    /// The process-wide manager
    pub fn get() -> &'static ConfigManager {
        &INSTANCE
    }

    /// Installs `config` as the process-wide configuration.
    ///
    /// # Errors
    ///
    /// Fails when the lock was poisoned by a panicking writer.
    pub fn init(config: Config) -> Result<()> {
        Self::get().replace(config)
    }

    /// Reads `stringkit.toml` from `dir` (defaults when absent) and installs
    /// it as the process-wide configuration.
    pub fn init_from_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
        Self::init(Config::load_from_dir(dir)?)
    }

    /// Waits for every other lock to be released
    pub fn write(&self) -> Result<RwLockWriteGuard<Config>> {
        self.config
            .write()
            .map_err(|e| Error::Msg(format!("Failed to acquire write lock: {}", e)))
    }

    /// Waits for any write lock to be released
    pub fn read(&self) -> Result<RwLockReadGuard<Config>> {
        self.config
            .read()
            .map_err(|e| Error::Msg(format!("Failed to acquire read lock: {}", e)))
    }

    pub fn replace(&self, config: Config) -> Result<()> {
        *self.write()? = config;
        Ok(())
    }

    /// Updates the configuration in place, releasing the lock afterwards.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut cfg = self.write()?;
        f(&mut cfg);
        Ok(())
    }

    /// A copy of the current configuration. A poisoned lock yields the
    /// defaults.
    pub fn snapshot(&self) -> Config {
        self.read().map(|cfg| cfg.clone()).unwrap_or_default()
    }
}
