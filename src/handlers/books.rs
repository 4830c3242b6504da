//! Book handlers.

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

const NOT_FOUND: AppError = AppError::NotFound("Book not found");

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_books().await?;
    Ok(ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str).ok_or(NOT_FOUND)?;
    let book = state.store.find_book(id).await?.ok_or(NOT_FOUND)?;
    Ok(ok(book))
}

/// `authorId` is not looked up here; a dangling reference fails at the store's foreign key (400).
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::book(body)?;
    let book = state.store.create_book(&input).await?;
    tracing::info!(id = book.id, author_id = book.author_id, "book created");
    Ok(created(book))
}

/// Writes without an existence check. Unlike authors, a missing row is 400, not 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::book(body)?;
    let id = parse_id(&id_str).ok_or(AppError::Store(StoreError::NotFound))?;
    let book = state.store.update_book(id, &input).await?;
    Ok(ok(book))
}

/// Every failure, whatever its cause, is reported as 404.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str).ok_or(NOT_FOUND)?;
    if let Err(e) = state.store.delete_book(id).await {
        tracing::debug!(id, error = %e, "book delete failed");
        return Err(NOT_FOUND);
    }
    tracing::info!(id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
