use crate::models::hello::HelloResponse;
use actix_web::{HttpResponse, Responder, get};
use tracing::error;

/// # Greeting Endpoint
///
/// Returns the hello-world greeting along with the current timestamp, the
/// machine hostname, and the service version.
///
/// ## Response
///
/// - **200 OK**: JSON object with `message`, `timestamp` (ISO 8601),
///   `hostname` and `version`
/// - **500 Internal Server Error**: hostname lookup failed; no fallback
///   value is defined
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Hello World from Python microservice!",
///   "timestamp": "2024-01-01T00:00:00.123456",
///   "hostname": "web-1",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    tag = "Greeting",
    responses(
        (status = 200, description = "Greeting payload", body = HelloResponse),
        (status = 500, description = "Hostname lookup failed")
    )
)]
#[get("/")]
pub async fn hello() -> impl Responder {
    match HelloResponse::now() {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => {
            error!("hostname lookup failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(hello);
}
