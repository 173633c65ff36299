//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! store and the servers. Request handlers never read process-wide environment
//! variables, which keeps behaviour consistent across multi-threaded runtimes
//! and test harnesses.

use std::path::{Path, PathBuf};

use crate::error::{FoodError, FoodResult};
use crate::store::FoodStore;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    data_file: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// When `data_file` is provided it must point at an existing file.
    ///
    /// # Errors
    ///
    /// Returns `FoodError::InvalidInput` when the override path does not
    /// exist.
    pub fn new(data_file: Option<PathBuf>) -> FoodResult<Self> {
        if let Some(path) = &data_file {
            if !path.is_file() {
                return Err(FoodError::InvalidInput(format!(
                    "data file does not exist: {}",
                    path.display()
                )));
            }
        }
        Ok(Self { data_file })
    }

    /// The configured dataset override, if any.
    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    /// Loads the food store for this configuration.
    ///
    /// Uses the override file when configured, otherwise the dataset bundled
    /// into the crate.
    ///
    /// # Errors
    ///
    /// Returns any error the underlying store load can produce.
    pub fn load_store(&self) -> FoodResult<FoodStore> {
        match &self.data_file {
            Some(path) => FoodStore::from_path(path),
            None => FoodStore::bundled(),
        }
    }
}

/// Parse a dataset override from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, no override is configured and
/// the bundled dataset is used.
pub fn data_file_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
