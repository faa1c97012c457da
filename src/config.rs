//! Settings store for fixture generation
//!
//! A flat key/value lookup with defaults, loadable from a TOML file. The
//! fixture factory consumes exactly one recognized key: the scratch-directory
//! path for disposable test artifacts.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Settings key for the scratch directory used for disposable test artifacts
pub const SCRATCH_DIR_KEY: &str = "taskrunner.scratch.dir";

/// Fallback scratch directory when no value is configured
pub const DEFAULT_SCRATCH_DIR: &str = "/tmp";

/// Flat string key/value settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Creates an empty settings store; every lookup falls back to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file of flat `key = "value"` pairs
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parses settings from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Sets a string value, replacing any previous one
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the configured value for `key`, or `default` when unset
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
