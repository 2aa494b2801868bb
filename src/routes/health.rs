use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
/// Used by load balancers and monitoring to verify the instance is alive.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `timestamp` in ISO 8601
///     format, `service` and `version`
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-01-01T00:00:00.123456",
///   "service": "hello-world-python",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health Check",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
