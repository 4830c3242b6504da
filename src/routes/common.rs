//! Common routes: root greeting, health, readiness.

use crate::handlers::health::{health, ready, root};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /, GET /health, GET /ready. Readiness probes the store held in `state`.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
