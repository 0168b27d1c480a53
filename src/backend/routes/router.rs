/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. `GET /up` health probe
 * 2. API routes nested under `/api`
 * 3. Static frontend (when `frontend_dir` exists), falling back to
 *    `index.html` for client-side routing
 *
 * # Middleware
 *
 * From the inside out: panic recovery, error envelope rendering, CORS and
 * request tracing.
 */

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::middleware::render_api_errors;
use crate::backend::response::ResponseBuilder;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing configuration, database
///   and token store
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let debug = app_state.config.debug;

    let mut router = Router::new()
        .route("/up", get(health_check))
        .nest("/api", configure_api_routes(app_state.clone()));

    if let Some(dir) = app_state.config.frontend_dir.as_ref().filter(|dir| dir.exists()) {
        let serve_dir = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %dir.display(), "Frontend static file serving enabled");
    }

    router
        .layer(CatchPanicLayer::custom(move |panic| panic_response(debug, panic)))
        .layer(middleware::from_fn_with_state(app_state.clone(), render_api_errors))
        .layer(cors_layer(&app_state.config.frontend_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /up - health probe
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// CORS for the configured frontend origins; unparseable origins are skipped
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Render a handler panic through generic failure handling
fn panic_response(debug: bool, panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    let error = ApiError::internal("panic", message, None);
    ResponseBuilder::new(debug).handle_exception(&error).into_response()
}
