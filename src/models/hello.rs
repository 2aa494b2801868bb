use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::utc_timestamp;

/// Fixed greeting carried by every root-endpoint response.
pub const GREETING: &str = "Hello World from Python microservice!";

/// # Greeting Response
///
/// Response body for `GET /`. Built fresh on every request from the current
/// wall-clock time and the machine hostname; never cached.
///
/// ## Fields
/// - `message`: fixed greeting string
/// - `timestamp`: ISO 8601 UTC timestamp of the request
/// - `hostname`: network host name of the serving machine
/// - `version`: service version
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello World from Python microservice!",
///   "timestamp": "2024-01-01T00:00:00.123456",
///   "hostname": "web-1",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
    pub hostname: String,
    pub version: String,
}

impl HelloResponse {
    /// Builds a greeting payload, querying the OS for the machine hostname.
    ///
    /// Hostname lookup is performed at request time, not cached at startup.
    /// Lookup failure is the one fallible path in response construction.
    pub fn now() -> std::io::Result<Self> {
        let hostname = hostname::get()?.to_string_lossy().into_owned();

        Ok(Self {
            message: GREETING.to_string(),
            timestamp: utc_timestamp(),
            hostname,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
