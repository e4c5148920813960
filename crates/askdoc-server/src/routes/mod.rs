//! HTTP route handlers.

pub mod diag;
pub mod query;
pub mod upload;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(diag::routes())
        .merge(upload::routes())
        .merge(query::routes())
}

/// GET / — liveness probe.
async fn root() -> &'static str {
    "askdoc server is running"
}
