//! Port for structured query logging.
//!
//! Defines the [`QueryLogger`] trait for recording one audit event per
//! completed tracking query.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port produces a machine-readable
//! trail (JSONL) of who asked for what and how it ended.

use serde_json::{Value, json};
use tracking_domain::DomainError;

/// A structured query event for logging.
pub struct QueryEvent {
    /// Event type identifier ("query_served" or "query_faulted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl QueryEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A query that produced a tracking status response
    pub fn served(tracking_number: &str, status: &str, elapsed_ms: u64) -> Self {
        Self::new(
            "query_served",
            json!({
                "tracking_number": tracking_number,
                "outcome": "ok",
                "status": status,
                "elapsed_ms": elapsed_ms,
            }),
        )
    }

    /// A query that ended in a domain error
    pub fn faulted(tracking_number: &str, error: &DomainError, elapsed_ms: u64) -> Self {
        Self::new(
            "query_faulted",
            json!({
                "tracking_number": tracking_number,
                "outcome": "fault",
                "error_code": error.code(),
                "elapsed_ms": elapsed_ms,
            }),
        )
    }
}

/// Port for logging query events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a broken audit log must
/// never turn a successful query into a fault.
pub trait QueryLogger: Send + Sync {
    fn log(&self, event: QueryEvent);
}

/// No-op implementation for tests and when query logging is disabled.
pub struct NoQueryLogger;

impl QueryLogger for NoQueryLogger {
    fn log(&self, _event: QueryEvent) {}
}
