use chrono::Utc;

/// # Greeting Response
///
/// Payload returned by the root endpoint: a fixed greeting plus the current
/// timestamp, machine hostname, and service version.
pub mod hello;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
pub mod health;

/// # Readiness Response
///
/// Lifecycle signal for orchestrators: the instance is ready to accept
/// traffic. Carries no version field, unlike the health payload.
pub mod ready;

/// Service identifier reported by the health and readiness endpoints.
pub const SERVICE_NAME: &str = "hello-world-python";

/// Current UTC wall-clock time as a naive ISO-8601 string with microsecond
/// precision and no timezone suffix, e.g. `2024-01-01T00:00:00.123456`.
pub(crate) fn utc_timestamp() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
