//! Liveness, readiness, root greeting and the JSON 404 fallback.

use crate::response::error_body;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusBody {
    status: &'static str,
}

pub async fn health() -> Json<StatusBody> {
    Json(StatusBody { status: "ok" })
}

/// Probes the store with a trivial round trip. Failure is reported, never propagated.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusBody { status: "ready" })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusBody { status: "unready" }),
            )
        }
    }
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Book Club API" }))
}

pub async fn fallback(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(error_body(format!("Route {} {} not found", method, uri.path()))),
    )
}
