//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys fall back to their defaults.

mod logging;
mod output;
mod query;
mod server;
mod store;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use query::FileQueryConfig;
pub use server::FileServerConfig;
pub use store::FileStoreConfig;

use serde::{Deserialize, Serialize};
use tracking_domain::{ConfigIssue, ConfigIssueCode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener and SOAP endpoint path
    pub server: FileServerConfig,
    /// Query behavior (timeouts)
    pub query: FileQueryConfig,
    /// Record store seeding
    pub store: FileStoreConfig,
    /// Diagnostic and audit logs
    pub logging: FileLoggingConfig,
    /// Console output for `lookup`
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.port == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroPort,
                "server.port must not be 0",
            ));
        }

        if self.server.soap_path.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptySoapPath,
                "server.soap_path must not be empty",
            ));
        } else if !self.server.soap_path.starts_with('/') {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::SoapPathWithoutSlash,
                format!(
                    "server.soap_path must start with '/', got '{}'",
                    self.server.soap_path
                ),
            ));
        }

        if self.store.fixtures.is_none() && !self.store.seed_samples {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyStore,
                "store.fixtures is unset and store.seed_samples is false: every lookup will miss",
            ));
        }

        issues
    }
}
