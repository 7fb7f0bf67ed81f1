//! Application layer for tracking-soap
//!
//! This crate contains the tracking query use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QueryConfig;
pub use ports::{
    package_store::{PackageStore, StoreError},
    query_logger::{NoQueryLogger, QueryEvent, QueryLogger},
};
pub use use_cases::get_tracking_status::{
    GetTrackingStatusUseCase, HistoryEntry, TrackingStatusResponse,
};
