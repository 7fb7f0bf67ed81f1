//! HTTP surface: the SOAP endpoint, a health probe and a service index.

use super::reply::SoapReply;
use crate::soap::{SoapVersion, parse_request, to_fault};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};
use tracking_application::GetTrackingStatusUseCase;
use tracking_domain::DomainError;

pub const SERVICE_NAME: &str = "EnvíosExpress SOAP API";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<GetTrackingStatusUseCase>,
    pub soap_path: Arc<str>,
}

impl AppState {
    pub fn new(use_case: Arc<GetTrackingStatusUseCase>, soap_path: &str) -> Self {
        Self {
            use_case,
            soap_path: Arc::from(soap_path),
        }
    }
}

/// Build the HTTP router; the SOAP endpoint is mounted at `state.soap_path`.
pub fn build_router(state: AppState) -> Router {
    let soap_path = state.soap_path.to_string();
    Router::new()
        .route(&soap_path, post(soap_handler))
        .route("/health", get(health))
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn soap_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> SoapReply {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let fallback_version = SoapVersion::from_content_type(content_type);

    if !content_type.is_empty() && !content_type.to_ascii_lowercase().contains("xml") {
        warn!("SOAP request with non-XML content type {:?}", content_type);
    }

    let Ok(xml) = std::str::from_utf8(&body) else {
        warn!("SOAP request body is not valid UTF-8 ({} bytes)", body.len());
        return SoapReply::fault(fallback_version, &to_fault(&DomainError::protocol_parsing()));
    };

    let request = match parse_request(xml) {
        Ok(request) => request,
        Err(rejection) => {
            warn!("Rejected SOAP envelope: {}", rejection.reason);
            let version = rejection.version.unwrap_or(fallback_version);
            return SoapReply::fault(version, &to_fault(&DomainError::protocol_parsing()));
        }
    };
    debug!(
        "{} request for {:?}",
        request.version, request.tracking_number
    );

    // Absent and empty both fail validation as an invalid tracking number
    let tracking_number = request.tracking_number.unwrap_or_default();

    match state.use_case.execute(&tracking_number).await {
        Ok(response) => SoapReply::success(request.version, &response),
        Err(error) => SoapReply::fault(request.version, &to_fault(&error)),
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "SOAP API for parcel tracking",
        "endpoints": {
            "soap": state.soap_path.as_ref(),
            "health": "/health",
        },
        "operations": ["GetTrackingStatus"],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{NaiveDate, TimeZone, Utc};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use tracking_application::{NoQueryLogger, PackageStore, QueryConfig, StoreError};
    use tracking_domain::{PackageRecord, PackageStatus, TrackingEvent, TrackingNumber};

    // ── Test doubles ──────────────────────────────────────────────

    struct SingleRecordStore {
        record: PackageRecord,
    }

    #[async_trait]
    impl PackageStore for SingleRecordStore {
        async fn find_by_tracking_number(
            &self,
            tracking_number: &TrackingNumber,
        ) -> Result<Option<PackageRecord>, StoreError> {
            Ok((tracking_number == &self.record.tracking_number).then(|| self.record.clone()))
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl PackageStore for BrokenStore {
        async fn find_by_tracking_number(
            &self,
            _tracking_number: &TrackingNumber,
        ) -> Result<Option<PackageRecord>, StoreError> {
            Err(StoreError::Corrupted {
                tracking_number: "PE1234567890".to_string(),
                reason: "SECRET-TABLE-NAME checksum mismatch".to_string(),
            })
        }
    }

    struct SlowStore;

    #[async_trait]
    impl PackageStore for SlowStore {
        async fn find_by_tracking_number(
            &self,
            _tracking_number: &TrackingNumber,
        ) -> Result<Option<PackageRecord>, StoreError> {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Ok(None)
        }
    }

    // ── Helpers ───────────────────────────────────────────────────

    fn record() -> PackageRecord {
        PackageRecord {
            tracking_number: TrackingNumber::parse("PE1234567890").unwrap(),
            sender_name: "Juan Pérez".to_string(),
            receiver_name: "María González".to_string(),
            origin: "Lima".to_string(),
            destination: "Quito".to_string(),
            weight: 2.5,
            dimensions: "30x20x15".to_string(),
            status: PackageStatus::InTransit,
            current_location: "Lima - Perú".to_string(),
            estimated_delivery_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            created_at: None,
            updated_at: None,
            events: vec![
                TrackingEvent::new(
                    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
                    "Paquete recibido en bodega central",
                    "Lima",
                ),
                TrackingEvent::new(
                    Utc.with_ymd_and_hms(2025, 6, 2, 14, 30, 0).unwrap(),
                    "Paquete en tránsito hacia destino",
                    "Lima",
                ),
            ],
        }
    }

    fn app_with(store: Arc<dyn PackageStore>, config: QueryConfig) -> Router {
        let use_case =
            GetTrackingStatusUseCase::new(store, Arc::new(NoQueryLogger)).with_config(config);
        build_router(AppState::new(Arc::new(use_case), "/soap"))
    }

    fn test_app() -> Router {
        app_with(
            Arc::new(SingleRecordStore { record: record() }),
            QueryConfig::default(),
        )
    }

    fn soap11_request(tracking_number: &str) -> String {
        format!(
            r#"<?xml version="1.0"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tns="http://logistica.com/ws/tracking">
  <soap:Body><tns:GetTrackingStatus><tns:trackingNumber>{}</tns:trackingNumber></tns:GetTrackingStatus></soap:Body>
</soap:Envelope>"#,
            tracking_number
        )
    }

    fn soap12_request(tracking_number: &str) -> String {
        format!(
            r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope"><env:Body><GetTrackingStatus><trackingNumber>{}</trackingNumber></GetTrackingStatus></env:Body></env:Envelope>"#,
            tracking_number
        )
    }

    async fn post_soap(app: Router, content_type: &str, body: String) -> (StatusCode, String, String) {
        let req = Request::builder()
            .method("POST")
            .uri("/soap")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ── Tests ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn soap11_lookup_returns_history_in_order() {
        let (status, content_type, body) =
            post_soap(test_app(), "text/xml", soap11_request("PE1234567890")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/xml; charset=utf-8");
        assert!(body.contains("<status>In transit</status>"));
        assert!(body.contains("<estimatedDeliveryDate>2025-06-10</estimatedDeliveryDate>"));
        let first = body.find("2025-06-01T08:00:00.000Z").unwrap();
        let second = body.find("2025-06-02T14:30:00.000Z").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn soap11_request_with_padded_number_is_trimmed() {
        let (status, _, _) =
            post_soap(test_app(), "text/xml", soap11_request("  PE1234567890\n")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn soap12_lookup_replies_in_soap12() {
        let (status, content_type, body) = post_soap(
            test_app(),
            "application/soap+xml; charset=utf-8",
            soap12_request("PE1234567890"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/soap+xml; charset=utf-8");
        assert!(body.contains("http://www.w3.org/2003/05/soap-envelope"));
    }

    #[tokio::test]
    async fn invalid_number_is_client_fault() {
        let (status, _, body) = post_soap(test_app(), "text/xml", soap11_request("INVALID123")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("<faultcode>soap:Client</faultcode>"));
        assert!(body.contains("<errorCode>1001</errorCode>"));
        assert!(body.contains("<invalidField>trackingNumber</invalidField>"));
    }

    #[tokio::test]
    async fn soap12_client_fault_is_400() {
        let (status, _, body) = post_soap(
            test_app(),
            "application/soap+xml",
            soap12_request("PE0000000000"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("<soap:Value>soap:Sender</soap:Value>"));
        assert!(body.contains("<errorCode>1002</errorCode>"));
        assert!(body.contains("Package not found: PE0000000000"));
    }

    #[tokio::test]
    async fn empty_tracking_number_is_invalid() {
        let (_, _, body) = post_soap(test_app(), "text/xml", soap11_request("")).await;
        assert!(body.contains("<errorCode>1001</errorCode>"));
    }

    #[tokio::test]
    async fn absent_tracking_number_is_invalid() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><GetTrackingStatus/></soap:Body></soap:Envelope>"#;
        let (_, _, body) = post_soap(test_app(), "text/xml", xml.to_string()).await;
        assert!(body.contains("<errorCode>1001</errorCode>"));
    }

    #[tokio::test]
    async fn malformed_xml_is_parsing_fault() {
        let (status, _, body) =
            post_soap(test_app(), "text/xml", "<soap:Envelope><oops".to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("<faultcode>soap:Server</faultcode>"));
        assert!(body.contains("<errorCode>1502</errorCode>"));
    }

    #[tokio::test]
    async fn unreadable_soap12_body_faults_in_soap12() {
        let (status, content_type, body) =
            post_soap(test_app(), "application/soap+xml", "not xml".to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type, "application/soap+xml; charset=utf-8");
        assert!(body.contains("soap:Receiver"));
    }

    #[tokio::test]
    async fn non_utf8_body_is_parsing_fault() {
        let req = Request::builder()
            .method("POST")
            .uri("/soap")
            .header("content-type", "text/xml")
            .body(Body::from(vec![0xff, 0xfe, 0x00]))
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&bytes).contains("<errorCode>1502</errorCode>"));
    }

    #[tokio::test]
    async fn store_failure_never_leaks() {
        let app = app_with(Arc::new(BrokenStore), QueryConfig::default());
        let (status, _, body) = post_soap(app, "text/xml", soap11_request("PE1234567890")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("<errorCode>1500</errorCode>"));
        assert!(body.contains("<faultstring>Internal server error</faultstring>"));
        assert!(!body.contains("SECRET-TABLE-NAME"));
    }

    #[tokio::test]
    async fn lookup_timeout_is_server_fault() {
        let app = app_with(Arc::new(SlowStore), QueryConfig::with_timeout_millis(20));
        let (_, _, body) = post_soap(app, "text/xml", soap11_request("PE1234567890")).await;
        assert!(body.contains("<faultcode>soap:Server</faultcode>"));
        assert!(body.contains("<errorCode>1500</errorCode>"));
    }

    #[tokio::test]
    async fn repeated_requests_are_byte_identical() {
        let app = test_app();
        let (_, _, first) = post_soap(app.clone(), "text/xml", soap11_request("PE1234567890")).await;
        let (_, _, second) = post_soap(app, "text/xml", soap11_request("PE1234567890")).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["service"], SERVICE_NAME);
    }

    #[tokio::test]
    async fn index_lists_soap_path() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["endpoints"]["soap"], "/soap");
    }

    #[tokio::test]
    async fn get_on_soap_path_is_not_allowed() {
        let req = Request::builder().uri("/soap").body(Body::empty()).unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
