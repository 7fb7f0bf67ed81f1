//! Inbound SOAP envelope parsing.
//!
//! Accepts SOAP 1.1 and 1.2 envelopes whose first `Body` child is a
//! `GetTrackingStatus` (or `GetTrackingStatusRequest`) element, and extracts
//! the text of its `trackingNumber` child. Element prefixes are irrelevant:
//! the envelope and body are matched by resolved namespace, the operation
//! and its argument by local name.

use super::version::SoapVersion;
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use thiserror::Error;
use tracing::debug;

/// Operation element names accepted inside the body
pub const OPERATION_NAMES: [&str; 2] = ["GetTrackingStatus", "GetTrackingStatusRequest"];

const TRACKING_NUMBER_ELEMENT: &[u8] = b"trackingNumber";

/// Why an envelope could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("Document has no SOAP Envelope")]
    MissingEnvelope,

    #[error("Unsupported envelope namespace: {0}")]
    UnsupportedNamespace(String),

    #[error("Envelope has no Body")]
    MissingBody,

    #[error("Body has no operation element")]
    MissingOperation,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// A rejected envelope, with the version if it got far enough to know it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeRejection {
    pub version: Option<SoapVersion>,
    pub reason: EnvelopeError,
}

impl EnvelopeRejection {
    fn new(version: Option<SoapVersion>, reason: EnvelopeError) -> Self {
        Self { version, reason }
    }
}

/// A decoded `GetTrackingStatus` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingRequest {
    pub version: SoapVersion,
    /// Trimmed text of `trackingNumber`; `None` when the element is absent
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Document,
    Envelope,
    Body,
    Operation,
    Done,
}

/// Parse a request envelope
pub fn parse_request(xml: &str) -> Result<TrackingRequest, EnvelopeRejection> {
    let mut reader = NsReader::from_str(xml);
    let mut stage = Stage::Document;
    let mut version: Option<SoapVersion> = None;
    let mut depth = 0usize;
    let mut tracking_number: Option<String> = None;
    let mut capturing = false;

    loop {
        let (namespace, event) = reader.read_resolved_event().map_err(|e| {
            EnvelopeRejection::new(version, EnvelopeError::Malformed(e.to_string()))
        })?;

        let (element, is_empty) = match event {
            Event::Start(e) => {
                depth += 1;
                (e, false)
            }
            Event::Empty(e) => (e, true),
            Event::End(_) => {
                if capturing && depth == 4 {
                    capturing = false;
                }
                if stage == Stage::Operation && depth == 3 {
                    stage = Stage::Done;
                }
                depth = depth.saturating_sub(1);
                continue;
            }
            Event::Text(text) => {
                if capturing && let Some(buffer) = tracking_number.as_mut() {
                    let unescaped = text.unescape().map_err(|e| {
                        EnvelopeRejection::new(version, EnvelopeError::Malformed(e.to_string()))
                    })?;
                    buffer.push_str(&unescaped);
                }
                continue;
            }
            Event::CData(data) => {
                if capturing && let Some(buffer) = tracking_number.as_mut() {
                    buffer.push_str(&String::from_utf8_lossy(&data));
                }
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        // Depth of the element itself; an empty element never opens a level
        let level = if is_empty { depth + 1 } else { depth };
        let local_name = element.local_name();
        let local = local_name.as_ref();

        match (stage, level) {
            (Stage::Document, 1) => {
                if local != b"Envelope" {
                    return Err(EnvelopeRejection::new(None, EnvelopeError::MissingEnvelope));
                }
                version = match &namespace {
                    ResolveResult::Bound(ns) => SoapVersion::from_namespace(ns.as_ref()),
                    _ => None,
                };
                if version.is_none() {
                    let found = match &namespace {
                        ResolveResult::Bound(ns) => String::from_utf8_lossy(ns.as_ref()).into_owned(),
                        _ => "(none)".to_string(),
                    };
                    return Err(EnvelopeRejection::new(
                        None,
                        EnvelopeError::UnsupportedNamespace(found),
                    ));
                }
                stage = Stage::Envelope;
            }
            (Stage::Envelope, 2) => {
                let in_envelope_ns = matches!(
                    (&namespace, version),
                    (ResolveResult::Bound(ns), Some(v)) if ns.as_ref() == v.namespace().as_bytes()
                );
                if local == b"Body" && in_envelope_ns {
                    if is_empty {
                        return Err(EnvelopeRejection::new(version, EnvelopeError::MissingOperation));
                    }
                    stage = Stage::Body;
                }
            }
            (Stage::Body, 3) => {
                let name = String::from_utf8_lossy(local).into_owned();
                if !OPERATION_NAMES.contains(&name.as_str()) {
                    return Err(EnvelopeRejection::new(
                        version,
                        EnvelopeError::UnsupportedOperation(name),
                    ));
                }
                debug!("SOAP operation {}", name);
                stage = if is_empty { Stage::Done } else { Stage::Operation };
            }
            (Stage::Operation, 4) => {
                if local == TRACKING_NUMBER_ELEMENT && tracking_number.is_none() {
                    tracking_number = Some(String::new());
                    capturing = !is_empty;
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(EnvelopeRejection::new(
            version,
            EnvelopeError::Malformed("unexpected end of document".to_string()),
        ));
    }

    let version = match (stage, version) {
        (Stage::Document, _) | (_, None) => {
            return Err(EnvelopeRejection::new(None, EnvelopeError::MissingEnvelope));
        }
        (Stage::Envelope, v) => {
            return Err(EnvelopeRejection::new(v, EnvelopeError::MissingBody));
        }
        (Stage::Body, v) => {
            return Err(EnvelopeRejection::new(v, EnvelopeError::MissingOperation));
        }
        (Stage::Operation | Stage::Done, Some(v)) => v,
    };

    Ok(TrackingRequest {
        version,
        tracking_number: tracking_number.map(|raw| raw.trim().to_string()),
    })
}
