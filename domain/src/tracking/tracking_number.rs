//! Tracking number value object

use crate::core::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::LazyLock;

/// Two ASCII uppercase letters followed by exactly ten ASCII digits.
static TRACKING_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{10}$").expect("tracking number pattern is valid")
});

/// Check whether `input` is a well-formed tracking number.
///
/// The check is exact: no trimming, no case folding. Callers that accept
/// user input are expected to trim before calling.
pub fn is_valid_tracking_number(input: &str) -> bool {
    TRACKING_NUMBER_PATTERN.is_match(input)
}

/// A validated tracking number (Value Object)
///
/// Once constructed, the inner string is guaranteed to match the
/// `AA0000000000` shape, so lookups never see malformed keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Parse a tracking number, rejecting anything that does not match the format
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        if is_valid_tracking_number(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(DomainError::invalid_tracking_number())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrackingNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TrackingNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_tracking_number(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::invalid_tracking_number())
        }
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for TrackingNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TrackingNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TrackingNumber::try_from(s).map_err(serde::de::Error::custom)
    }
}
