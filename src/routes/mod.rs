//! HTTP route handlers.
//!
//! Two fixed routes: the greeting page at `/` and, unless disabled in config, the
//! liveness probe at `/health`. Everything else falls through to a 404 page.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request.

pub mod health;
pub mod home;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_HOME};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for unmatched paths.
///
/// Also installed as the method fallback on each route, so `POST /` or
/// `DELETE /health` answer 404 like any unknown path rather than 405.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new()
        .route("/", get(home::index).fallback(not_found))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ));

    let mut router = Router::new().merge(home_routes);

    if state.config.app.health_check {
        // Never cached, probes must see the live process
        let health_routes = Router::new()
            .route("/health", get(health::health).fallback(not_found))
            .layer(SetResponseHeaderLayer::overriding(
                CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL_HEALTH),
            ));
        router = router.merge(health_routes);
    }

    router
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
