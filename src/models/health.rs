use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{SERVICE_NAME, utc_timestamp};

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
/// - `service`: fixed service identifier
/// - `version`: service version
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-01-01T00:00:00.123456",
///   "service": "hello-world-python",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: utc_timestamp(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_health_response_healthy() {
        let response = HealthResponse::healthy();

        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "hello-world-python");
        assert_eq!(response.version, "1.0.0");

        // Verify timestamp is valid naive ISO 8601 format
        let parsed_time = NaiveDateTime::parse_from_str(&response.timestamp, "%Y-%m-%dT%H:%M:%S%.f");
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid naive ISO 8601 format"
        );
    }
}
