//! HTTP adapter (axum) for the SOAP endpoint.

mod reply;
mod router;

pub use reply::{SoapReply, fault_status};
pub use router::{AppState, SERVICE_NAME, build_router};
