//! Infrastructure layer for tracking-soap
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FileQueryConfig,
    FileServerConfig, FileStoreConfig,
};
pub use logging::JsonlQueryLogger;
pub use store::{FixtureError, FixtureLoader, InMemoryPackageStore, load_store, sample_store};
