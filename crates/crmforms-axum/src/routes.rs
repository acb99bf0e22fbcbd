//! Route definitions for the Axum server.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AppContext;
use crate::handlers::objects;
use crate::state::AppState;

/// Create the router.
///
/// With `static_dir`, unmatched paths are served from that directory.
pub fn create_router(ctx: AppContext, static_dir: Option<&Path>) -> Router {
    let state: AppState = Arc::new(ctx);

    let router = Router::new()
        .route("/", get(objects::list))
        .route("/update-cobj", get(objects::edit).post(objects::submit))
        .route("/health", get(health_check));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
