//! Get tracking status use case
//!
//! The central query path of the service:
//!
//! 1. **Validate** the raw tracking number (no I/O on failure)
//! 2. **Look up** the record through the [`PackageStore`] port, optionally
//!    bounded by [`QueryConfig::lookup_timeout`]
//! 3. **Translate** the status and assemble a [`TrackingStatusResponse`]
//!
//! Every failure leaves as a [`DomainError`]. Store failures and timeouts are
//! logged with their cause and replaced by a generic internal error, so no
//! infrastructure detail reaches the caller.

use crate::config::QueryConfig;
use crate::ports::package_store::PackageStore;
use crate::ports::query_logger::{QueryEvent, QueryLogger};
use chrono::SecondsFormat;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracking_domain::{DomainError, PackageRecord, TrackingEvent, TrackingNumber, translate_status};

/// One entry of a package's history, as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// RFC 3339 UTC timestamp with millisecond precision
    pub date: String,
    pub description: String,
    pub location: String,
}

impl From<&TrackingEvent> for HistoryEntry {
    fn from(event: &TrackingEvent) -> Self {
        Self {
            date: event.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            description: event.description.clone(),
            location: event.location.clone(),
        }
    }
}

/// Successful result of a tracking query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStatusResponse {
    /// Display label of the package status
    pub status: String,
    pub current_location: String,
    /// `YYYY-MM-DD`, or `None` when no estimate exists
    pub estimated_delivery_date: Option<String>,
    /// Oldest first
    pub history: Vec<HistoryEntry>,
}

impl TrackingStatusResponse {
    pub fn from_record(record: &PackageRecord) -> Self {
        Self {
            status: translate_status(&record.status).to_string(),
            current_location: record.current_location.clone(),
            estimated_delivery_date: record
                .estimated_delivery_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            history: record.events.iter().map(HistoryEntry::from).collect(),
        }
    }
}

/// Use case for answering a single tracking query
pub struct GetTrackingStatusUseCase {
    store: Arc<dyn PackageStore>,
    logger: Arc<dyn QueryLogger>,
    config: QueryConfig,
}

impl GetTrackingStatusUseCase {
    pub fn new(store: Arc<dyn PackageStore>, logger: Arc<dyn QueryLogger>) -> Self {
        Self {
            store,
            logger,
            config: QueryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Execute the use case.
    ///
    /// `tracking_number` is taken as received; trimming is the caller's job.
    pub async fn execute(
        &self,
        tracking_number: &str,
    ) -> Result<TrackingStatusResponse, DomainError> {
        let started = Instant::now();
        let result = self.resolve(tracking_number).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => {
                info!(
                    "Served {} ({}) in {}ms",
                    tracking_number, response.status, elapsed_ms
                );
                self.logger.log(QueryEvent::served(
                    tracking_number,
                    &response.status,
                    elapsed_ms,
                ));
            }
            Err(err) => {
                warn!("Query for {:?} failed: {}", tracking_number, err);
                self.logger
                    .log(QueryEvent::faulted(tracking_number, err, elapsed_ms));
            }
        }

        result
    }

    async fn resolve(&self, raw: &str) -> Result<TrackingStatusResponse, DomainError> {
        let tracking_number = TrackingNumber::parse(raw)?;

        let record = self.lookup(&tracking_number).await?.ok_or_else(|| {
            debug!("No record for {}", tracking_number);
            DomainError::package_not_found(tracking_number.as_str())
        })?;

        Ok(TrackingStatusResponse::from_record(&record))
    }

    async fn lookup(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<PackageRecord>, DomainError> {
        let lookup = self.store.find_by_tracking_number(tracking_number);

        let result = match self.config.lookup_timeout {
            Some(limit) => match tokio::time::timeout(limit, lookup).await {
                Ok(result) => result,
                Err(_) => {
                    error!(
                        "Lookup for {} timed out after {:?}",
                        tracking_number, limit
                    );
                    return Err(DomainError::internal());
                }
            },
            None => lookup.await,
        };

        result.map_err(|e| {
            error!("Store lookup for {} failed: {}", tracking_number, e);
            DomainError::internal()
        })
    }
}
