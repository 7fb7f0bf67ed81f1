//! In-memory package store
//!
//! The whole dataset is built up front and never mutated afterwards, so
//! lookups need no locking.

use super::fixtures::FixtureError;
use async_trait::async_trait;
use std::collections::HashMap;
use tracking_application::{PackageStore, StoreError};
use tracking_domain::{PackageRecord, TrackingNumber};

/// Read-only record store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryPackageStore {
    records: HashMap<TrackingNumber, PackageRecord>,
}

impl InMemoryPackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, rejecting duplicate tracking numbers
    pub fn from_records(
        records: impl IntoIterator<Item = PackageRecord>,
    ) -> Result<Self, FixtureError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Add a record, sorting its events oldest first
    pub fn insert(&mut self, mut record: PackageRecord) -> Result<(), FixtureError> {
        if self.records.contains_key(&record.tracking_number) {
            return Err(FixtureError::DuplicateTrackingNumber(
                record.tracking_number.into_inner(),
            ));
        }
        record.sort_events();
        self.records.insert(record.tracking_number.clone(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Known tracking numbers, sorted
    pub fn tracking_numbers(&self) -> Vec<&TrackingNumber> {
        let mut numbers: Vec<_> = self.records.keys().collect();
        numbers.sort();
        numbers
    }
}

#[async_trait]
impl PackageStore for InMemoryPackageStore {
    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<PackageRecord>, StoreError> {
        Ok(self.records.get(tracking_number).cloned())
    }
}
