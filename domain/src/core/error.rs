//! Domain error types
//!
//! [`DomainError`] is the single error value that leaves the query core.
//! Every error carries an [`ErrorKind`] whose numeric code is part of the
//! wire contract:
//!
//! | Code | Kind | Meaning |
//! |------|------|---------|
//! | 1001 | `InvalidTrackingNumber` | Input fails format validation |
//! | 1002 | `PackageNotFound` | No record for the given key |
//! | 1003 | `MissingRequiredField` | A required field is absent or blank |
//! | 1004 | `InvalidWeight` | Non-positive or non-numeric weight |
//! | 1005 | `InvalidDateFormat` | A date could not be parsed |
//! | 1006 | `InvalidStatus` | A status value was rejected |
//! | 1007 | `InvalidEventDescription` | Event description too long |
//! | 1500 | `InternalServerError` | Unclassified internal failure |
//! | 1502 | `ProtocolParsingError` | Malformed inbound message |

use thiserror::Error;

/// Wire name of the tracking number field, used as `invalidField`.
pub const TRACKING_NUMBER_FIELD: &str = "trackingNumber";

/// Closed set of error kinds known to the tracking service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidTrackingNumber,
    PackageNotFound,
    MissingRequiredField,
    InvalidWeight,
    InvalidDateFormat,
    InvalidStatus,
    InvalidEventDescription,
    InternalServerError,
    ProtocolParsingError,
}

impl ErrorKind {
    /// Every kind, in code order.
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::InvalidTrackingNumber,
        ErrorKind::PackageNotFound,
        ErrorKind::MissingRequiredField,
        ErrorKind::InvalidWeight,
        ErrorKind::InvalidDateFormat,
        ErrorKind::InvalidStatus,
        ErrorKind::InvalidEventDescription,
        ErrorKind::InternalServerError,
        ErrorKind::ProtocolParsingError,
    ];

    /// Numeric code sent on the wire as `errorCode`.
    pub fn code(self) -> u16 {
        match self {
            ErrorKind::InvalidTrackingNumber => 1001,
            ErrorKind::PackageNotFound => 1002,
            ErrorKind::MissingRequiredField => 1003,
            ErrorKind::InvalidWeight => 1004,
            ErrorKind::InvalidDateFormat => 1005,
            ErrorKind::InvalidStatus => 1006,
            ErrorKind::InvalidEventDescription => 1007,
            ErrorKind::InternalServerError => 1500,
            ErrorKind::ProtocolParsingError => 1502,
        }
    }

    /// Look up a kind by its numeric code.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Message used when the error is built without a custom one.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::InvalidTrackingNumber => {
                "Invalid tracking number format: expected two uppercase letters followed by 10 digits"
            }
            ErrorKind::PackageNotFound => "Package not found",
            ErrorKind::MissingRequiredField => "Missing required field",
            ErrorKind::InvalidWeight => "Weight must be a positive number",
            ErrorKind::InvalidDateFormat => "Invalid date format",
            ErrorKind::InvalidStatus => "Invalid status",
            ErrorKind::InvalidEventDescription => "Event description cannot exceed 500 characters",
            ErrorKind::InternalServerError => "Internal server error",
            ErrorKind::ProtocolParsingError => "Could not process SOAP message",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidTrackingNumber => "INVALID_TRACKING_NUMBER",
            ErrorKind::PackageNotFound => "PACKAGE_NOT_FOUND",
            ErrorKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorKind::InvalidWeight => "INVALID_WEIGHT",
            ErrorKind::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ErrorKind::InvalidStatus => "INVALID_STATUS",
            ErrorKind::InvalidEventDescription => "INVALID_EVENT_DESCRIPTION",
            ErrorKind::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorKind::ProtocolParsingError => "PROTOCOL_PARSING_ERROR",
        };
        f.write_str(name)
    }
}

/// Domain-level error (Value Object)
///
/// Constructed where a rule is violated and propagated unchanged until it is
/// shaped into a protocol fault. There are no setters: the builder-style
/// methods consume `self`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{code}] {message}", code = .kind.code())]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    invalid_field: Option<String>,
}

impl DomainError {
    /// Create an error with the kind's default message
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
            invalid_field: None,
        }
    }

    /// Create an error with a custom message
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            invalid_field: None,
        }
    }

    /// Attach the name of the offending field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.invalid_field = Some(field.into());
        self
    }

    // Common error constructors

    pub fn invalid_tracking_number() -> Self {
        Self::new(ErrorKind::InvalidTrackingNumber).with_field(TRACKING_NUMBER_FIELD)
    }

    pub fn package_not_found(tracking_number: &str) -> Self {
        Self::with_message(
            ErrorKind::PackageNotFound,
            format!("Package not found: {}", tracking_number),
        )
        .with_field(TRACKING_NUMBER_FIELD)
    }

    pub fn missing_required_field(field: &str) -> Self {
        Self::with_message(
            ErrorKind::MissingRequiredField,
            format!("Missing required field: {}", field),
        )
        .with_field(field)
    }

    pub fn invalid_weight() -> Self {
        Self::new(ErrorKind::InvalidWeight).with_field("weight")
    }

    pub fn invalid_date_format(field: &str, value: &str) -> Self {
        Self::with_message(
            ErrorKind::InvalidDateFormat,
            format!("Invalid date format for {}: '{}'", field, value),
        )
        .with_field(field)
    }

    pub fn invalid_status(field: &str) -> Self {
        Self::new(ErrorKind::InvalidStatus).with_field(field)
    }

    pub fn invalid_event_description() -> Self {
        Self::new(ErrorKind::InvalidEventDescription).with_field("description")
    }

    pub fn internal() -> Self {
        Self::new(ErrorKind::InternalServerError)
    }

    pub fn protocol_parsing() -> Self {
        Self::new(ErrorKind::ProtocolParsingError)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn invalid_field(&self) -> Option<&str> {
        self.invalid_field.as_deref()
    }
}

impl From<ErrorKind> for DomainError {
    fn from(kind: ErrorKind) -> Self {
        DomainError::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_taxonomy() {
        assert_eq!(ErrorKind::InvalidTrackingNumber.code(), 1001);
        assert_eq!(ErrorKind::PackageNotFound.code(), 1002);
        assert_eq!(ErrorKind::MissingRequiredField.code(), 1003);
        assert_eq!(ErrorKind::InvalidWeight.code(), 1004);
        assert_eq!(ErrorKind::InternalServerError.code(), 1500);
        assert_eq!(ErrorKind::ProtocolParsingError.code(), 1502);
    }

    #[test]
    fn test_codes_are_unique() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(404), None);
    }

    #[test]
    fn test_invalid_tracking_number_names_field() {
        let error = DomainError::invalid_tracking_number();
        assert_eq!(error.code(), 1001);
        assert_eq!(error.invalid_field(), Some("trackingNumber"));
    }

    #[test]
    fn test_package_not_found_interpolates_number() {
        let error = DomainError::package_not_found("PE0000000000");
        assert_eq!(error.kind(), ErrorKind::PackageNotFound);
        assert_eq!(error.message(), "Package not found: PE0000000000");
        assert_eq!(error.invalid_field(), Some("trackingNumber"));
    }

    #[test]
    fn test_internal_has_no_field() {
        let error = DomainError::internal();
        assert_eq!(error.message(), "Internal server error");
        assert!(error.invalid_field().is_none());
    }

    #[test]
    fn test_display_includes_code() {
        let error = DomainError::missing_required_field("senderName");
        assert_eq!(error.to_string(), "[1003] Missing required field: senderName");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::PackageNotFound.to_string(), "PACKAGE_NOT_FOUND");
    }
}
