use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{SERVICE_NAME, utc_timestamp};

/// Response body for the readiness probe. Deliberately omits the version
/// field carried by the health payload.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

impl ReadyResponse {
    pub fn ready() -> Self {
        Self {
            status: "ready".to_string(),
            timestamp: utc_timestamp(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_response_ready() {
        let response = ReadyResponse::ready();

        assert_eq!(response.status, "ready");
        assert_eq!(response.service, "hello-world-python");
        assert!(!response.timestamp.is_empty());
    }

    #[test]
    fn test_ready_response_has_no_version_key() {
        let response = ReadyResponse::ready();

        let json = serde_json::to_value(&response).expect("Should serialize to JSON");
        let object = json.as_object().expect("Should serialize as a JSON object");

        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("version"));
    }
}
