//! Package status value object and display translation

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle status of a package (Value Object)
///
/// The six known codes are closed; anything else read from storage is kept
/// verbatim in [`PackageStatus::Other`] so it can still be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageStatus {
    Received,
    InTransit,
    OutForDelivery,
    Delivered,
    Exception,
    Returned,
    /// Unmapped status code, passed through unchanged
    Other(String),
}

impl PackageStatus {
    /// Get the wire code for this status
    pub fn as_code(&self) -> &str {
        match self {
            PackageStatus::Received => "RECEIVED",
            PackageStatus::InTransit => "IN_TRANSIT",
            PackageStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            PackageStatus::Delivered => "DELIVERED",
            PackageStatus::Exception => "EXCEPTION",
            PackageStatus::Returned => "RETURNED",
            PackageStatus::Other(s) => s,
        }
    }

    /// Human-readable label shown to API consumers
    pub fn label(&self) -> &str {
        match self {
            PackageStatus::Received => "Received",
            PackageStatus::InTransit => "In transit",
            PackageStatus::OutForDelivery => "Out for delivery",
            PackageStatus::Delivered => "Delivered",
            PackageStatus::Exception => "Exception",
            PackageStatus::Returned => "Returned to sender",
            PackageStatus::Other(s) => s,
        }
    }

    /// All known (non-passthrough) statuses
    pub fn known() -> [PackageStatus; 6] {
        [
            PackageStatus::Received,
            PackageStatus::InTransit,
            PackageStatus::OutForDelivery,
            PackageStatus::Delivered,
            PackageStatus::Exception,
            PackageStatus::Returned,
        ]
    }
}

/// Translate a status into its display label.
pub fn translate_status(status: &PackageStatus) -> &str {
    status.label()
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl std::str::FromStr for PackageStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "RECEIVED" => PackageStatus::Received,
            "IN_TRANSIT" => PackageStatus::InTransit,
            "OUT_FOR_DELIVERY" => PackageStatus::OutForDelivery,
            "DELIVERED" => PackageStatus::Delivered,
            "EXCEPTION" => PackageStatus::Exception,
            "RETURNED" => PackageStatus::Returned,
            other => PackageStatus::Other(other.to_string()),
        })
    }
}

impl From<&str> for PackageStatus {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl Serialize for PackageStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for PackageStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PackageStatus::from(s.as_str()))
    }
}
