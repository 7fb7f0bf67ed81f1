//! Application-level configuration.
//!
//! Controls how the query use case behaves at runtime, independent of where
//! the values were loaded from.

use std::time::Duration;

/// Query behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    /// Maximum time to wait for the store before giving up with an internal error.
    pub lookup_timeout: Option<Duration>,
}

impl QueryConfig {
    pub fn with_timeout_millis(millis: u64) -> Self {
        Self {
            lookup_timeout: Some(Duration::from_millis(millis)),
        }
    }

    /// Creates a QueryConfig from an optional timeout in milliseconds.
    ///
    /// If `millis` is `None`, lookups are never cut short.
    pub fn from_timeout_millis(millis: Option<u64>) -> Self {
        Self {
            lookup_timeout: millis.map(Duration::from_millis),
        }
    }
}
