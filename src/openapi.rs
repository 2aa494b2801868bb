use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros.
///
/// # Endpoints
/// - Greeting: `GET /`
/// - Health Check: `GET /health`
/// - Readiness Check: `GET /ready`
///
/// # Schemas
/// - `HelloResponse`: Greeting payload
/// - `HealthResponse`: Service status payload
/// - `ReadyResponse`: Readiness payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello::hello,
        crate::routes::health::health,
        crate::routes::ready::ready,
    ),
    components(
        schemas(
            crate::models::hello::HelloResponse,
            crate::models::health::HealthResponse,
            crate::models::ready::ReadyResponse
        )
    ),
    tags(
        (name = "Greeting", description = "Hello world greeting endpoint"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Readiness", description = "Service readiness endpoints for orchestrators")
    ),
    info(
        description = "Minimal hello-world microservice exposing greeting, health and readiness endpoints",
        title = "Hello World Microservice API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
