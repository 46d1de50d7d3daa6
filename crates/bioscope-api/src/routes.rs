//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression,
//! and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::rate_limit::RateLimiter;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
///
/// # Arguments
/// * `state` - The shared application state.
///
/// # Returns
/// A fully configured axum Router ready to serve requests.
pub fn create_router(state: AppState) -> Router {
    // CORS middleware: allow the configured frontend origin.
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin(&state.config.server.allowed_origin))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let public_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/search", get(handlers::search))
        .route("/api/graph", get(handlers::graph));

    // Summarization calls out to a paid upstream; it alone is rate limited.
    let limiter = RateLimiter::new(state.config.summarize.prompt_limit);
    let summarize_routes = Router::new()
        .route("/api/summarize", post(handlers::summarize))
        .layer(axum::middleware::from_fn(
            crate::rate_limit::rate_limit_middleware,
        ))
        .layer(axum::Extension(limiter));

    public_routes
        .merge(summarize_routes)
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB global limit
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Parse the configured origin. `*` allows any origin; a value that is
/// not a valid header value also falls back to any, with a warning.
fn allowed_origin(origin: &str) -> AllowOrigin {
    if origin == "*" {
        return AllowOrigin::any();
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => AllowOrigin::list([value]),
        Err(_) => {
            tracing::warn!(origin, "Invalid allowed_origin in config, allowing any");
            AllowOrigin::any()
        }
    }
}

/// Start the HTTP server on the configured address.
///
/// Binds to 127.0.0.1 (localhost only) on the port from config.
pub async fn start_server(
    config: &bioscope_core::BioscopeConfig,
    state: AppState,
) -> Result<(), bioscope_core::BioscopeError> {
    let port = config.general.port;
    let addr = format!("127.0.0.1:{}", port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| bioscope_core::BioscopeError::Api(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| bioscope_core::BioscopeError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
