//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL query audit log (unset = disabled)
    pub query_log: Option<PathBuf>,
    /// Directory for daily-rotated diagnostic log files (unset = stderr only)
    pub directory: Option<PathBuf>,
}
