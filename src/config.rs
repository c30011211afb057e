//! Tracker configuration.
//!
//! A configuration file is optional. When present it is a JSON object such
//! as:
//!
//! ```json
//! {
//!   "data_file": "/home/me/.local/share/taskdeck/tasks.json",
//!   "seed_sample_tasks": true
//! }
//! ```
//!
//! Missing keys fall back to [`TrackerConfig::default`].

use crate::fs_utils;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the task document, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Errors raised while loading tracker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read tracker config {path}: {source}")]
    Read {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid JSON for [`TrackerConfig`].
    #[error("failed to parse tracker config: {0}")]
    Parse(#[source] serde_json::Error),
    /// The configuration file is not valid JSON for [`TrackerConfig`].
    #[error("failed to parse tracker config {path}: {source}")]
    ParseFile {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for opening a file-backed task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Path of the JSON task document.
    pub data_file: Utf8PathBuf,
    /// Whether a first run adds the starter tasks.
    pub seed_sample_tasks: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: Utf8PathBuf::from(DEFAULT_DATA_FILE),
            seed_sample_tasks: false,
        }
    }
}

impl TrackerConfig {
    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON is malformed or has
    /// fields of the wrong type.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(ConfigError::Parse)
    }

    /// Loads configuration from `path`, using defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read
    /// and [`ConfigError::ParseFile`] when its contents are invalid.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = fs_utils::read_optional(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        match contents {
            Some(json) => serde_json::from_str(&json).map_err(|source| ConfigError::ParseFile {
                path: path.to_owned(),
                source,
            }),
            None => {
                tracing::debug!(%path, "tracker config missing, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Sets the task document path.
    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<Utf8PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Enables or disables first-run sample tasks.
    #[must_use]
    pub fn with_seed_sample_tasks(mut self, seed: bool) -> Self {
        self.seed_sample_tasks = seed;
        self
    }
}
