//! Author handlers.

use super::parse_id;
use crate::error::{AppError, StoreError};
use crate::extractors::JsonBody;
use crate::response::{created, ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

const NOT_FOUND: AppError = AppError::NotFound("Author not found");

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_authors().await?;
    Ok(ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str).ok_or(NOT_FOUND)?;
    let author = state.store.find_author(id).await?.ok_or(NOT_FOUND)?;
    Ok(ok(author))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::author(body)?;
    let author = state.store.create_author(&input).await?;
    tracing::info!(id = author.id, "author created");
    Ok(created(author))
}

/// Checks existence before writing; a row that disappears between the check and the write is still 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::author(body)?;
    let id = parse_id(&id_str).ok_or(NOT_FOUND)?;
    if state.store.find_author(id).await?.is_none() {
        return Err(NOT_FOUND);
    }
    let author = state
        .store
        .update_author(id, &input)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => NOT_FOUND,
            other => AppError::Store(other),
        })?;
    Ok(ok(author))
}

/// Every failure, whatever its cause, is reported as 404.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str).ok_or(NOT_FOUND)?;
    if let Err(e) = state.store.delete_author(id).await {
        tracing::debug!(id, error = %e, "author delete failed");
        return Err(NOT_FOUND);
    }
    tracing::info!(id, "author deleted");
    Ok(StatusCode::NO_CONTENT)
}
