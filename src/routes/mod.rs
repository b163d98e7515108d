//! HTTP route handlers for the bookstore API.
//!
//! - `books`: CRUD over the book resource
//! - `health`: liveness, readiness, version and metrics endpoints

pub mod books;
pub mod health;

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::middleware::security_headers::security_headers_middleware;
use crate::state::AppState;

/// Builds the application router. Both `/books` and `/books/` serve the
/// collection.
pub fn router(state: AppState) -> Router {
    let cfg_arc = state.config.clone();

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/version", get(health::version))
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/", get(books::list_books).post(books::create_book))
        .route(
            "/books/{isbn}",
            get(books::get_book).put(books::update_book).delete(books::delete_book),
        )
        .fallback(health::not_found)
        .with_state(state)
        .layer(from_fn_with_state(cfg_arc, security_headers_middleware))
}
