//! Record store adapters.
//!
//! [`InMemoryPackageStore`] implements the
//! [`PackageStore`](tracking_application::PackageStore) port. It is seeded
//! from a JSON fixtures file or from the built-in sample packages.

mod fixtures;
mod memory;

pub use fixtures::{FixtureError, FixtureLoader};
pub use memory::InMemoryPackageStore;

use crate::config::FileStoreConfig;
use tracing::info;

const SAMPLE_PACKAGES: &str = include_str!("samples.json");

/// Store seeded with the built-in sample packages
pub fn sample_store() -> Result<InMemoryPackageStore, FixtureError> {
    FixtureLoader::parse_str(SAMPLE_PACKAGES)
}

/// Build the store described by `[store]`.
///
/// A fixtures file wins over the samples; with neither, the store is empty.
pub fn load_store(config: &FileStoreConfig) -> Result<InMemoryPackageStore, FixtureError> {
    let store = match &config.fixtures {
        Some(path) => {
            let store = FixtureLoader::load(path)?;
            info!("Loaded {} packages from {}", store.len(), path.display());
            store
        }
        None if config.seed_samples => {
            let store = sample_store()?;
            info!("Seeded {} sample packages", store.len());
            store
        }
        None => {
            info!("Starting with an empty package store");
            InMemoryPackageStore::new()
        }
    };
    Ok(store)
}
