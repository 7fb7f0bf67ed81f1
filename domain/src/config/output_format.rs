//! Output format value object

use serde::{Deserialize, Serialize};

/// How a lookup result is printed on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored summary (default)
    #[default]
    Text,
    /// Pretty-printed JSON of the response DTO
    Json,
}
