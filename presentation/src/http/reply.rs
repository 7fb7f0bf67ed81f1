//! SOAP HTTP replies.

use crate::soap::{
    FaultClassification, ProtocolFault, SoapVersion, render_fault, render_response,
    unclassified_fault,
};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::error;
use tracking_application::TrackingStatusResponse;

/// Sent only if the generic fault itself cannot be rendered
const LAST_RESORT_FAULT: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><soap:Fault>"#,
    "<faultcode>soap:Server</faultcode><faultstring>Internal server error</faultstring>",
    r#"<detail><TrackingError xmlns="http://logistica.com/ws/tracking"><errorCode>1500</errorCode>"#,
    "<errorMessage>Internal server error</errorMessage><invalidField></invalidField>",
    "</TrackingError></detail></soap:Fault></soap:Body></soap:Envelope>",
);

/// HTTP status for a fault under a given SOAP version
pub fn fault_status(version: SoapVersion, classification: FaultClassification) -> StatusCode {
    match (version, classification) {
        (SoapVersion::V12, FaultClassification::Client) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A rendered SOAP envelope with its HTTP status and content type
#[derive(Debug)]
pub struct SoapReply {
    version: SoapVersion,
    status: StatusCode,
    body: String,
}

impl SoapReply {
    pub fn success(version: SoapVersion, response: &TrackingStatusResponse) -> Self {
        match render_response(version, response) {
            Ok(body) => Self {
                version,
                status: StatusCode::OK,
                body,
            },
            Err(e) => Self::fault(version, &unclassified_fault(&e)),
        }
    }

    pub fn fault(version: SoapVersion, fault: &ProtocolFault) -> Self {
        let status = fault_status(version, fault.classification);
        match render_fault(version, fault) {
            Ok(body) => Self {
                version,
                status,
                body,
            },
            Err(e) => {
                error!("Could not render fault: {}", e);
                Self {
                    version: SoapVersion::V11,
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: LAST_RESORT_FAULT.to_string(),
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for SoapReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.version.content_type())],
            self.body,
        )
            .into_response()
    }
}
