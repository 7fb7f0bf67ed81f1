//! Outbound SOAP envelope rendering.

use super::fault::ProtocolFault;
use super::version::SoapVersion;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;
use thiserror::Error;
use tracking_application::TrackingStatusResponse;

/// Target namespace of the tracking service payloads
pub const TRACKING_NS: &str = "http://logistica.com/ws/tracking";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("XML write failed: {0}")]
    Write(String),

    #[error("Rendered XML is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Thin wrapper over `quick_xml::Writer` that maps every write error
struct XmlBuilder {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlBuilder {
    fn new() -> Result<Self, RenderError> {
        let mut builder = Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        };
        builder.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(builder)
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.writer
            .write_event(event)
            .map_err(|e| RenderError::Write(e.to_string()))
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), RenderError> {
        let mut element = BytesStart::new(name);
        for attribute in attributes {
            element.push_attribute(*attribute);
        }
        self.write(Event::Start(element))
    }

    fn end(&mut self, name: &str) -> Result<(), RenderError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), RenderError> {
        self.start(name, &[])?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn nil_element(&mut self, name: &str) -> Result<(), RenderError> {
        let mut element = BytesStart::new(name);
        element.push_attribute(("xsi:nil", "true"));
        self.write(Event::Empty(element))
    }

    fn open_envelope(&mut self, version: SoapVersion) -> Result<(), RenderError> {
        self.start(
            "soap:Envelope",
            &[("xmlns:soap", version.namespace()), ("xmlns:xsi", XSI_NS)],
        )?;
        self.start("soap:Body", &[])
    }

    fn close_envelope(&mut self) -> Result<(), RenderError> {
        self.end("soap:Body")?;
        self.end("soap:Envelope")
    }

    fn finish(self) -> Result<String, RenderError> {
        Ok(String::from_utf8(self.writer.into_inner().into_inner())?)
    }
}

/// Render a successful `GetTrackingStatusResponse` envelope
pub fn render_response(
    version: SoapVersion,
    response: &TrackingStatusResponse,
) -> Result<String, RenderError> {
    let mut xml = XmlBuilder::new()?;
    xml.open_envelope(version)?;
    xml.start("GetTrackingStatusResponse", &[("xmlns", TRACKING_NS)])?;

    xml.text_element("status", &response.status)?;
    xml.text_element("currentLocation", &response.current_location)?;
    match &response.estimated_delivery_date {
        Some(date) => xml.text_element("estimatedDeliveryDate", date)?,
        None => xml.nil_element("estimatedDeliveryDate")?,
    }

    xml.start("history", &[])?;
    for entry in &response.history {
        xml.start("event", &[])?;
        xml.text_element("date", &entry.date)?;
        xml.text_element("description", &entry.description)?;
        xml.text_element("location", &entry.location)?;
        xml.end("event")?;
    }
    xml.end("history")?;

    xml.end("GetTrackingStatusResponse")?;
    xml.close_envelope()?;
    xml.finish()
}

/// Render a fault envelope in the shape `version` prescribes
pub fn render_fault(version: SoapVersion, fault: &ProtocolFault) -> Result<String, RenderError> {
    let code = version.fault_code(fault.classification);

    let mut xml = XmlBuilder::new()?;
    xml.open_envelope(version)?;
    xml.start("soap:Fault", &[])?;

    let detail_element = match version {
        SoapVersion::V11 => {
            xml.text_element("faultcode", code)?;
            xml.text_element("faultstring", &fault.reason)?;
            "detail"
        }
        SoapVersion::V12 => {
            xml.start("soap:Code", &[])?;
            xml.text_element("soap:Value", code)?;
            xml.end("soap:Code")?;
            xml.start("soap:Reason", &[])?;
            xml.start("soap:Text", &[("xml:lang", "en")])?;
            xml.write(Event::Text(BytesText::new(&fault.reason)))?;
            xml.end("soap:Text")?;
            xml.end("soap:Reason")?;
            "soap:Detail"
        }
    };

    xml.start(detail_element, &[])?;
    xml.start("TrackingError", &[("xmlns", TRACKING_NS)])?;
    xml.text_element("errorCode", &fault.detail.error_code.to_string())?;
    xml.text_element("errorMessage", &fault.detail.error_message)?;
    xml.text_element("invalidField", &fault.detail.invalid_field)?;
    xml.end("TrackingError")?;
    xml.end(detail_element)?;

    xml.end("soap:Fault")?;
    xml.close_envelope()?;
    xml.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::envelope::parse_request;
    use crate::soap::fault::to_fault;
    use tracking_application::HistoryEntry;
    use tracking_domain::DomainError;

    fn response(estimate: Option<&str>) -> TrackingStatusResponse {
        TrackingStatusResponse {
            status: "In transit".to_string(),
            current_location: "Lima - Perú".to_string(),
            estimated_delivery_date: estimate.map(str::to_string),
            history: vec![
                HistoryEntry {
                    date: "2025-06-01T08:00:00.000Z".to_string(),
                    description: "Paquete recibido en bodega central".to_string(),
                    location: "Lima".to_string(),
                },
                HistoryEntry {
                    date: "2025-06-02T14:30:00.000Z".to_string(),
                    description: "Tránsito <express> & más".to_string(),
                    location: "Lima".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_response_contains_fields_in_order() {
        let xml = render_response(SoapVersion::V11, &response(Some("2025-06-10"))).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/""#));
        assert!(xml.contains(r#"<GetTrackingStatusResponse xmlns="http://logistica.com/ws/tracking">"#));
        assert!(xml.contains("<status>In transit</status>"));
        assert!(xml.contains("<currentLocation>Lima - Perú</currentLocation>"));
        assert!(xml.contains("<estimatedDeliveryDate>2025-06-10</estimatedDeliveryDate>"));

        let first = xml.find("2025-06-01T08:00:00.000Z").unwrap();
        let second = xml.find("2025-06-02T14:30:00.000Z").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_response_escapes_text() {
        let xml = render_response(SoapVersion::V11, &response(None)).unwrap();
        assert!(xml.contains("Tránsito &lt;express&gt; &amp; más"));
    }

    #[test]
    fn test_missing_estimate_is_nil() {
        let xml = render_response(SoapVersion::V11, &response(None)).unwrap();
        assert!(xml.contains(r#"<estimatedDeliveryDate xsi:nil="true"/>"#));
        assert!(xml.contains(r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#));
    }

    #[test]
    fn test_soap12_response_uses_12_namespace() {
        let xml = render_response(SoapVersion::V12, &response(None)).unwrap();
        assert!(xml.contains(r#"xmlns:soap="http://www.w3.org/2003/05/soap-envelope""#));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render_response(SoapVersion::V11, &response(Some("2025-06-10"))).unwrap();
        let b = render_response(SoapVersion::V11, &response(Some("2025-06-10"))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_soap11_client_fault() {
        let fault = to_fault(&DomainError::invalid_tracking_number());
        let xml = render_fault(SoapVersion::V11, &fault).unwrap();

        assert!(xml.contains("<faultcode>soap:Client</faultcode>"));
        assert!(xml.contains("<faultstring>Invalid tracking number format"));
        assert!(xml.contains(r#"<detail><TrackingError xmlns="http://logistica.com/ws/tracking">"#));
        assert!(xml.contains("<errorCode>1001</errorCode>"));
        assert!(xml.contains("<invalidField>trackingNumber</invalidField>"));
    }

    #[test]
    fn test_soap12_server_fault() {
        let fault = to_fault(&DomainError::internal());
        let xml = render_fault(SoapVersion::V12, &fault).unwrap();

        assert!(xml.contains("<soap:Code><soap:Value>soap:Receiver</soap:Value></soap:Code>"));
        assert!(xml.contains(r#"<soap:Text xml:lang="en">Internal server error</soap:Text>"#));
        assert!(xml.contains("<soap:Detail><TrackingError"));
        assert!(xml.contains("<errorCode>1500</errorCode>"));
        assert!(xml.contains("<invalidField></invalidField>"));
    }

    #[test]
    fn test_rendered_envelope_is_well_formed() {
        // A rendered fault is itself a parseable envelope, just not a request
        let fault = to_fault(&DomainError::package_not_found("PE0000000000"));
        let xml = render_fault(SoapVersion::V11, &fault).unwrap();
        let rejection = parse_request(&xml).unwrap_err();
        assert_eq!(rejection.version, Some(SoapVersion::V11));
    }
}
