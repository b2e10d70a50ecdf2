//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(&config).await;

    #[cfg(feature = "rate-limit")]
    let limiter: std::sync::Arc<dyn quill_core::ports::RateLimiter> =
        std::sync::Arc::new(quill_infra::InMemoryRateLimiter::from_env());

    let cors_origins = config.cors_allowed_origins.clone();
    let static_dir = config.static_dir.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let cors = build_cors(&cors_origins);

        let app = App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes);

        #[cfg(feature = "rate-limit")]
        let app = app.wrap(middleware::rate_limit::RateLimitMiddleware::new(
            limiter.clone(),
        ));

        // Serve the browser frontend last so /api routes win
        let dir = static_dir.as_deref().unwrap_or("./static");
        app.service(actix_files::Files::new("/", dir).index_file("index.html"))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Permissive CORS when no origins are configured (development), otherwise
/// only the configured origins.
fn build_cors(allowed_origins: &[String]) -> actix_cors::Cors {
    if allowed_origins.is_empty() {
        actix_cors::Cors::permissive()
    } else {
        let mut cors = actix_cors::Cors::default()
            .allow_any_header()
            .allow_any_method()
            .expose_any_header();
        for origin in allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        cors
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,quill_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
