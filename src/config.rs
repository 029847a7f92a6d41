//! Configuration for the concurrent loader.
//!
//! [`LoaderConfig`] is plain data with `serde` support so it can live in a
//! JSON settings file next to the data it describes:
//!
//! ```json
//! { "workers": 8 }
//! ```
//!
//! Missing fields take their defaults.

use crate::error::{FrameError, FrameResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_WORKERS: usize = 4;

/// Settings for [`FrameLoader`](crate::FrameLoader).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Upper bound on worker threads. A batch never uses more workers than
    /// it has files.
    pub workers: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// [`FrameError::Config`] on malformed JSON, otherwise see
    /// [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> FrameResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    /// [`FrameError::Io`] if the file cannot be read, otherwise see
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> FrameResult<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// # Errors
    /// [`FrameError::InvalidArgument`] when `workers` is zero.
    pub fn validate(&self) -> FrameResult<()> {
        if self.workers == 0 {
            return Err(FrameError::InvalidArgument(
                "loader needs at least one worker".to_string(),
            ));
        }
        Ok(())
    }
}
