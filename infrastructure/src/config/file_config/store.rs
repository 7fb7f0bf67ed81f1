//! Record store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw record store configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// JSON fixtures file to seed the store from
    pub fixtures: Option<PathBuf>,
    /// Seed the built-in sample packages when no fixtures file is given
    pub seed_samples: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            fixtures: None,
            seed_samples: true,
        }
    }
}
