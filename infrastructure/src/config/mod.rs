//! Configuration file loading for tracking-server
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRACKING_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tracking.toml` or `./.tracking.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tracking-server/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileQueryConfig, FileServerConfig,
    FileStoreConfig,
};
pub use loader::ConfigLoader;
