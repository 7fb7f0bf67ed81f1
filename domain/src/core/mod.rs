//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: the error taxonomy every failure is shaped into

pub mod error;
