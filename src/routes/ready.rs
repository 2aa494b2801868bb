use crate::models::ready::ReadyResponse;
use actix_web::{HttpResponse, Responder, get};

/// Readiness probe. Same shape as the health payload minus the version
/// field.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Readiness",
    responses(
        (status = 200, description = "Service is ready to accept traffic", body = ReadyResponse)
    )
)]
#[get("/ready")]
pub async fn ready() -> impl Responder {
    HttpResponse::Ok().json(ReadyResponse::ready())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(ready);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_ready_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");

        assert_eq!(body_json["status"], "ready");
        assert_eq!(body_json["service"], "hello-world-python");
        assert!(body_json["timestamp"].is_string());

        // Readiness payload deliberately carries no version field
        let object = body_json.as_object().unwrap();
        assert!(!object.contains_key("version"));
    }
}
