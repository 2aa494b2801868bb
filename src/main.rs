use actix_web::{App, HttpServer};
use hello_microservice::config::ServerConfig;
use hello_microservice::openapi::ApiDoc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Hello World Microservice Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Greeting, health and readiness endpoints
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Greeting: `/`
/// - Health check: `/health`
/// - Readiness check: `/ready`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `HOST:PORT`, defaulting to `0.0.0.0:8085`
/// - Environment variables loaded from `.env` file (if present)
///
/// A bind failure or invalid `PORT` terminates the process with a non-zero
/// exit code and a diagnostic on standard error.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        "Starting Hello World microservice on {}:{}",
        config.host, config.port
    );

    HttpServer::new(|| {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(hello_microservice::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
