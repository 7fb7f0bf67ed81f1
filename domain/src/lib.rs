//! Domain layer for tracking-soap
//!
//! This crate contains the core business rules, entities, and value objects
//! of the parcel tracking query service. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tracking number
//!
//! The public key of a shipment: two uppercase letters followed by ten
//! digits (`PE1234567890`). Validation happens before any lookup.
//!
//! ## Error taxonomy
//!
//! Every failure leaving the query core is a [`DomainError`] with a numeric
//! code. Codes below 1500 blame the caller, codes from 1500 up blame the
//! service.

pub mod config;
pub mod core;
pub mod tracking;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::{DomainError, ErrorKind, TRACKING_NUMBER_FIELD};
pub use tracking::{
    entities::{MAX_EVENT_DESCRIPTION_CHARS, PackageRecord, TrackingEvent},
    status::{PackageStatus, translate_status},
    tracking_number::{TrackingNumber, is_valid_tracking_number},
};
