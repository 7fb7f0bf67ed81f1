//! Structured configuration issues.
//!
//! Configuration validation does not fail fast: it returns every issue it
//! finds, each tagged with a [`Severity`], and the composition root decides
//! whether to continue.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the service cannot start with this configuration.
    Error,
    /// Non-fatal: the service starts but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `server.port` is 0.
    ZeroPort,
    /// `server.soap_path` is empty.
    EmptySoapPath,
    /// `server.soap_path` does not start with `/`.
    SoapPathWithoutSlash,
    /// No fixtures file and sample seeding disabled: every lookup is a miss.
    EmptyStore,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(ConfigIssueCode::ZeroPort, "port is 0");
        assert!(err.is_error());
        let warn = ConfigIssue::warning(ConfigIssueCode::EmptyStore, "empty");
        assert_eq!(warn.severity, Severity::Warning);
        assert!(!warn.is_error());
    }
}
