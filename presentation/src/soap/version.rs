//! SOAP protocol versions

use super::fault::FaultClassification;

pub const SOAP11_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP12_ENVELOPE_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Envelope version of a request; replies always use the same one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoapVersion {
    #[default]
    V11,
    V12,
}

impl SoapVersion {
    pub fn namespace(self) -> &'static str {
        match self {
            SoapVersion::V11 => SOAP11_ENVELOPE_NS,
            SoapVersion::V12 => SOAP12_ENVELOPE_NS,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            SoapVersion::V11 => "text/xml; charset=utf-8",
            SoapVersion::V12 => "application/soap+xml; charset=utf-8",
        }
    }

    pub fn from_namespace(namespace: &[u8]) -> Option<Self> {
        if namespace == SOAP11_ENVELOPE_NS.as_bytes() {
            Some(SoapVersion::V11)
        } else if namespace == SOAP12_ENVELOPE_NS.as_bytes() {
            Some(SoapVersion::V12)
        } else {
            None
        }
    }

    /// Best guess from a `Content-Type` header, used when the body is unreadable
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type
            .to_ascii_lowercase()
            .starts_with("application/soap+xml")
        {
            SoapVersion::V12
        } else {
            SoapVersion::V11
        }
    }

    /// Qualified fault code for a classification
    pub fn fault_code(self, classification: FaultClassification) -> &'static str {
        match (self, classification) {
            (SoapVersion::V11, FaultClassification::Client) => "soap:Client",
            (SoapVersion::V11, FaultClassification::Server) => "soap:Server",
            (SoapVersion::V12, FaultClassification::Client) => "soap:Sender",
            (SoapVersion::V12, FaultClassification::Server) => "soap:Receiver",
        }
    }
}

impl std::fmt::Display for SoapVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoapVersion::V11 => write!(f, "SOAP 1.1"),
            SoapVersion::V12 => write!(f, "SOAP 1.2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_roundtrip() {
        for version in [SoapVersion::V11, SoapVersion::V12] {
            assert_eq!(
                SoapVersion::from_namespace(version.namespace().as_bytes()),
                Some(version)
            );
        }
        assert_eq!(SoapVersion::from_namespace(b"urn:other"), None);
    }

    #[test]
    fn test_from_content_type() {
        assert_eq!(
            SoapVersion::from_content_type("application/soap+xml; charset=utf-8"),
            SoapVersion::V12
        );
        assert_eq!(SoapVersion::from_content_type("text/xml"), SoapVersion::V11);
        assert_eq!(SoapVersion::from_content_type(""), SoapVersion::V11);
    }

    #[test]
    fn test_fault_codes() {
        assert_eq!(
            SoapVersion::V11.fault_code(FaultClassification::Client),
            "soap:Client"
        );
        assert_eq!(
            SoapVersion::V12.fault_code(FaultClassification::Server),
            "soap:Receiver"
        );
    }
}
