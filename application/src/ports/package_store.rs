//! Package store port
//!
//! Defines the read-only interface the query service uses to fetch records.

use async_trait::async_trait;
use thiserror::Error;
use tracking_domain::{PackageRecord, TrackingNumber};

/// Errors that can occur while reading from a package store
///
/// These never reach the wire: the query service logs them and replaces them
/// with a generic internal error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupted record {tracking_number}: {reason}")]
    Corrupted {
        tracking_number: String,
        reason: String,
    },
}

/// Read-only access to stored package records
///
/// Implementations must return records with `events` sorted ascending by
/// date. The store is never mutated through this port.
#[async_trait]
pub trait PackageStore: Send + Sync {
    /// Look up a package by its tracking number.
    ///
    /// `Ok(None)` means the key is well-formed but unknown.
    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<PackageRecord>, StoreError>;
}
