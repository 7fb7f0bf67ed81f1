//! Fault adapter: the single place where client/server blame is decided.
//!
//! A [`DomainError`] becomes a [`ProtocolFault`] by code range alone:
//! below [`SERVER_CODE_FLOOR`] the caller is at fault, from it upward the
//! service is. Server faults always carry the kind's fixed message.

use serde::Serialize;
use tracing::error;
use tracking_domain::DomainError;

/// Lowest error code attributed to the service
pub const SERVER_CODE_FLOOR: u16 = 1500;

/// Who is to blame for a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FaultClassification {
    Client,
    Server,
}

impl FaultClassification {
    pub fn for_code(code: u16) -> Self {
        if code < SERVER_CODE_FLOOR {
            FaultClassification::Client
        } else {
            FaultClassification::Server
        }
    }
}

/// `TrackingError` payload carried in the fault detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultDetail {
    pub error_code: u16,
    pub error_message: String,
    /// Empty when no single field is to blame
    pub invalid_field: String,
}

/// Protocol-level failure, ready to be serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolFault {
    pub classification: FaultClassification,
    pub reason: String,
    pub detail: FaultDetail,
}

impl ProtocolFault {
    pub fn is_client(&self) -> bool {
        self.classification == FaultClassification::Client
    }
}

/// Shape a domain error into a fault
pub fn to_fault(error: &DomainError) -> ProtocolFault {
    let classification = FaultClassification::for_code(error.code());

    let (message, invalid_field) = match classification {
        FaultClassification::Client => (
            error.message().to_string(),
            error.invalid_field().unwrap_or_default().to_string(),
        ),
        FaultClassification::Server => (error.kind().default_message().to_string(), String::new()),
    };

    ProtocolFault {
        classification,
        reason: message.clone(),
        detail: FaultDetail {
            error_code: error.code(),
            error_message: message,
            invalid_field,
        },
    }
}

/// Fault for a failure that never became a [`DomainError`]
///
/// The cause is logged and dropped; the fault is the generic 1500.
pub fn unclassified_fault(cause: &dyn std::error::Error) -> ProtocolFault {
    error!("Unclassified failure: {}", cause);
    to_fault(&DomainError::internal())
}
