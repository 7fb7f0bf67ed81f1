//! Package record and tracking event entities

use super::status::PackageStatus;
use super::tracking_number::TrackingNumber;
use crate::core::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};

/// Maximum length of an event description, in characters.
pub const MAX_EVENT_DESCRIPTION_CHARS: usize = 500;

/// A single status-change record in a package's history (Entity)
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEvent {
    pub date: DateTime<Utc>,
    pub description: String,
    pub location: String,
}

impl TrackingEvent {
    pub fn new(
        date: DateTime<Utc>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            location: location.into(),
        }
    }

    /// Check the event for well-formedness, collecting every problem found
    pub fn validate(&self) -> Vec<DomainError> {
        let mut issues = Vec::new();
        if self.description.trim().is_empty() {
            issues.push(DomainError::missing_required_field("description"));
        } else if self.description.chars().count() > MAX_EVENT_DESCRIPTION_CHARS {
            issues.push(DomainError::invalid_event_description());
        }
        if self.location.trim().is_empty() {
            issues.push(DomainError::missing_required_field("location"));
        }
        issues
    }
}

/// A stored shipment with its event history (Entity)
///
/// Owned by the record store; queries only read it. `events` is kept sorted
/// ascending by date once the record has been through [`sort_events`].
///
/// [`sort_events`]: PackageRecord::sort_events
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    pub tracking_number: TrackingNumber,
    pub sender_name: String,
    pub receiver_name: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub dimensions: String,
    pub status: PackageStatus,
    pub current_location: String,
    pub estimated_delivery_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub events: Vec<TrackingEvent>,
}

impl PackageRecord {
    /// Sort the history oldest first. Events sharing a date keep their
    /// relative order.
    pub fn sort_events(&mut self) {
        self.events.sort_by_key(|event| event.date);
    }

    /// The most recent event, if any
    pub fn latest_event(&self) -> Option<&TrackingEvent> {
        self.events.iter().max_by_key(|event| event.date)
    }

    pub fn is_delivered(&self) -> bool {
        self.status == PackageStatus::Delivered
    }

    /// Check the record and its events, collecting every problem found.
    ///
    /// An empty vector means the record is well-formed.
    pub fn validate(&self) -> Vec<DomainError> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("senderName", &self.sender_name),
            ("receiverName", &self.receiver_name),
            ("origin", &self.origin),
            ("destination", &self.destination),
        ] {
            if value.trim().is_empty() {
                issues.push(DomainError::missing_required_field(field));
            }
        }

        if !self.weight.is_finite() || self.weight <= 0.0 {
            issues.push(DomainError::invalid_weight());
        }

        if self.status.as_code().trim().is_empty() {
            issues.push(DomainError::invalid_status("status"));
        }

        for event in &self.events {
            issues.extend(event.validate());
        }

        issues
    }
}
