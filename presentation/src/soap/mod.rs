//! SOAP codec for the tracking service.
//!
//! - [`envelope`] decodes inbound `GetTrackingStatus` calls
//! - [`fault`] turns domain errors into classified faults
//! - [`render`] encodes responses and faults for the request's SOAP version

pub mod envelope;
pub mod fault;
pub mod render;
pub mod version;

pub use envelope::{EnvelopeError, EnvelopeRejection, TrackingRequest, parse_request};
pub use fault::{
    FaultClassification, FaultDetail, ProtocolFault, SERVER_CODE_FLOOR, to_fault,
    unclassified_fault,
};
pub use render::{RenderError, TRACKING_NS, render_fault, render_response};
pub use version::SoapVersion;
