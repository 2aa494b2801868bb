use actix_web::web;

/// # Greeting Endpoint
///
/// Returns the hello-world greeting with a timestamp, the machine hostname,
/// and the service version.
pub mod hello;

/// # Health Check Endpoint
///
/// Liveness probe for load balancers and monitoring.
pub mod health;

/// # Readiness Check Endpoint
///
/// Readiness probe for orchestrators, distinct lifecycle signal from health.
pub mod ready;

/// # Route Configuration
///
/// Registers the three public endpoints at the root scope.
///
/// ## Example Endpoints
///
/// ```text
/// GET /       - Greeting payload
/// GET /health - Service health status
/// GET /ready  - Service readiness status
/// ```
///
/// Unknown paths and disallowed methods fall through to Actix-web's default
/// handling (404 and 405 respectively).
pub fn configure(cfg: &mut web::ServiceConfig) {
    hello::configure_routes(cfg);
    health::configure_routes(cfg);
    ready::configure_routes(cfg);
}
