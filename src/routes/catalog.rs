//! Author and book CRUD routes.

use crate::handlers::{authors, books};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/authors", get(authors::list).post(authors::create))
        .route(
            "/authors/:id",
            get(authors::read).put(authors::update).delete(authors::delete),
        )
        .route("/books", get(books::list).post(books::create))
        .route(
            "/books/:id",
            get(books::read).put(books::update).delete(books::delete),
        )
        .with_state(state)
}
