//! Query configuration from TOML (`[query]` section)

use serde::{Deserialize, Serialize};
use tracking_application::QueryConfig;

/// Raw query behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    /// Store lookup timeout in milliseconds (0 = no timeout)
    pub lookup_timeout_ms: u64,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: 5000,
        }
    }
}

impl FileQueryConfig {
    pub fn to_query_config(&self) -> QueryConfig {
        QueryConfig::from_timeout_millis(Some(self.lookup_timeout_ms).filter(|&ms| ms > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_timeout_is_five_seconds() {
        let config = FileQueryConfig::default().to_query_config();
        assert_eq!(config.lookup_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_omitted_key_keeps_default() {
        let config: FileQueryConfig = toml::from_str("").unwrap();
        assert_eq!(
            config.to_query_config().lookup_timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_zero_disables_timeout() {
        let config: FileQueryConfig = toml::from_str("lookup_timeout_ms = 0").unwrap();
        assert!(config.to_query_config().lookup_timeout.is_none());
    }

    #[test]
    fn test_custom_timeout() {
        let config: FileQueryConfig = toml::from_str("lookup_timeout_ms = 250").unwrap();
        assert_eq!(
            config.to_query_config().lookup_timeout,
            Some(Duration::from_millis(250))
        );
    }
}
