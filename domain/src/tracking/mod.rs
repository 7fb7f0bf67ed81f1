//! Package tracking concepts.
//!
//! - [`tracking_number::TrackingNumber`]: validated public shipment key
//! - [`status::PackageStatus`]: lifecycle status and its display label
//! - [`entities::PackageRecord`] / [`entities::TrackingEvent`]: stored data

pub mod entities;
pub mod status;
pub mod tracking_number;
