//! Presentation layer for tracking-soap
//!
//! This crate contains the SOAP codec, the axum HTTP endpoint,
//! CLI definitions and console output formatting.

pub mod cli;
pub mod http;
pub mod output;
pub mod soap;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{AppState, build_router};
pub use output::console::ConsoleFormatter;
pub use soap::{ProtocolFault, SoapVersion, to_fault};
