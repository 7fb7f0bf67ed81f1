//! Use cases (application services)

pub mod get_tracking_status;
