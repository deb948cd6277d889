//! Status endpoint for monitoring and integration checks.
//!
//! Returns the service identity and liveness with a timestamp taken at
//! response time. Nothing here performs I/O beyond reading the clock.

use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Service identifier reported by the status endpoint
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// Service version reported by the status endpoint
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Liveness value. The service only ever reports itself as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Liveness {
    Active,
}

/// Identity and liveness record returned by `GET /api/status`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub status: Liveness,
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl ServiceStatus {
    /// Build the record for the current instant.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            status: Liveness::Active,
            timestamp,
        }
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-15T09:30:00.125Z`.
fn serialize_iso8601<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Status handler.
pub async fn status() -> Json<ServiceStatus> {
    Json(ServiceStatus::now())
}
