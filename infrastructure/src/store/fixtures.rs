//! JSON fixture loading for the in-memory store.
//!
//! Fixture files use the same field names as the wire format:
//!
//! ```json
//! { "packages": [ { "trackingNumber": "PE1234567890", "senderName": "...",
//!   "weight": 2.5, "status": "IN_TRANSIT", "estimatedDeliveryDate": "2025-06-10",
//!   "events": [ { "date": "2025-06-01T08:00:00Z", "description": "...", "location": "..." } ] } ] }
//! ```
//!
//! Every record is validated before it reaches the store; the first broken
//! record aborts the load.

use super::memory::InMemoryPackageStore;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use tracking_domain::{DomainError, PackageRecord, PackageStatus, TrackingEvent, TrackingNumber};

/// Errors raised while seeding a store from fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixtures {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixtures JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid record {tracking_number}: {source}")]
    InvalidRecord {
        tracking_number: String,
        #[source]
        source: DomainError,
    },

    #[error("Duplicate tracking number: {0}")]
    DuplicateTrackingNumber(String),
}

impl FixtureError {
    /// The domain rule a record broke, if that is what failed
    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            FixtureError::InvalidRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    packages: Vec<FixturePackage>,
}

// Required strings default to empty so that a missing field surfaces as a
// domain validation error instead of a JSON error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixturePackage {
    #[serde(default)]
    tracking_number: String,
    #[serde(default)]
    sender_name: String,
    #[serde(default)]
    receiver_name: String,
    #[serde(default)]
    origin: String,
    #[serde(default)]
    destination: String,
    #[serde(default)]
    weight: Option<serde_json::Value>,
    #[serde(default)]
    dimensions: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    current_location: String,
    estimated_delivery_date: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    #[serde(default)]
    events: Vec<FixtureEvent>,
}

#[derive(Debug, Deserialize)]
struct FixtureEvent {
    #[serde(default)]
    date: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    location: String,
}

/// Loads package records from JSON fixtures
pub struct FixtureLoader;

impl FixtureLoader {
    /// Read and parse a fixtures file into a store
    pub fn load(path: &Path) -> Result<InMemoryPackageStore, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes of fixtures from {}", content.len(), path.display());
        Self::parse_str(&content)
    }

    /// Parse fixtures JSON into a store
    pub fn parse_str(json: &str) -> Result<InMemoryPackageStore, FixtureError> {
        let file: FixtureFile = serde_json::from_str(json)?;
        let records = file
            .packages
            .into_iter()
            .map(into_record)
            .collect::<Result<Vec<_>, _>>()?;
        InMemoryPackageStore::from_records(records)
    }
}

fn into_record(raw: FixturePackage) -> Result<PackageRecord, FixtureError> {
    let label = raw.tracking_number.clone();
    let invalid = |source: DomainError| FixtureError::InvalidRecord {
        tracking_number: label.clone(),
        source,
    };

    let tracking_number = TrackingNumber::parse(&raw.tracking_number).map_err(&invalid)?;

    let estimated_delivery_date = raw
        .estimated_delivery_date
        .as_deref()
        .map(|value| parse_date("estimatedDeliveryDate", value))
        .transpose()
        .map_err(&invalid)?;
    let created_at = raw
        .created_at
        .as_deref()
        .map(|value| parse_timestamp("createdAt", value))
        .transpose()
        .map_err(&invalid)?;
    let updated_at = raw
        .updated_at
        .as_deref()
        .map(|value| parse_timestamp("updatedAt", value))
        .transpose()
        .map_err(&invalid)?;

    let events = raw
        .events
        .into_iter()
        .map(|event| {
            Ok(TrackingEvent {
                date: parse_timestamp("date", &event.date)?,
                description: event.description,
                location: event.location,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()
        .map_err(&invalid)?;

    let record = PackageRecord {
        tracking_number,
        sender_name: raw.sender_name,
        receiver_name: raw.receiver_name,
        origin: raw.origin,
        destination: raw.destination,
        // Missing or non-numeric weight fails validation as NaN
        weight: raw
            .weight
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(f64::NAN),
        dimensions: raw.dimensions,
        status: PackageStatus::from(raw.status.as_str()),
        current_location: raw.current_location,
        estimated_delivery_date,
        created_at,
        updated_at,
        events,
    };

    let mut issues = record.validate().into_iter();
    if let Some(first) = issues.next() {
        for other in issues {
            warn!("Record {} also has: {}", label, other);
        }
        return Err(invalid(first));
    }

    Ok(record)
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC) or a plain
/// calendar date (midnight UTC).
fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::invalid_date_format(field, value))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| DomainError::invalid_date_format(field, value))
}
