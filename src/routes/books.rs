use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    schema::Mode,
    state::AppState,
    types::{Book, BookFields, BookListResponse, BookResponse, MessageResponse},
    validator,
};

pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.books.list_all().await?;
    Ok(Json(BookListResponse { books }))
}

pub async fn get_book(State(state): State<AppState>, Path(isbn): Path<String>) -> AppResult<Json<BookResponse>> {
    let book = state.books.get(&isbn).await.inspect_err(|_| {
        tracing::debug!(%isbn, "book lookup missed");
    })?;
    Ok(Json(BookResponse { book }))
}

pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let mut payload = body(&state, payload)?;
    check(&state, Mode::Create, &payload)?;
    Mode::Create.schema().normalize(&mut payload);
    let book: Book = decode(payload)?;

    let book = state.books.create(&book).await?;
    state.metrics.inc_books_created();
    tracing::info!(isbn = %book.isbn, title = %book.title, "book created");
    Ok((StatusCode::CREATED, Json(BookResponse { book })))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<BookResponse>> {
    let mut payload = body(&state, payload)?;
    check(&state, Mode::Update, &payload)?;
    Mode::Update.schema().normalize(&mut payload);
    let fields: BookFields = decode(payload)?;

    let book = state.books.update(&isbn, &fields).await?;
    state.metrics.inc_books_updated();
    tracing::info!(%isbn, "book updated");
    Ok(Json(BookResponse { book }))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.books.remove(&isbn).await?;
    state.metrics.inc_books_deleted();
    tracing::info!(%isbn, "book deleted");
    Ok(Json(MessageResponse { message: "Book deleted".to_string() }))
}

// Unparseable bodies count as validation failures.
fn body(state: &AppState, payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    payload.map(|Json(v)| v).map_err(|rejection| {
        state.metrics.inc_validation_failures();
        tracing::debug!(error = %rejection.body_text(), "unparseable book payload");
        AppError::from(rejection)
    })
}

fn check(state: &AppState, mode: Mode, payload: &Value) -> AppResult<()> {
    validator::validate(mode, payload).map_err(|e| {
        state.metrics.inc_validation_failures();
        tracing::debug!(?mode, error = %e, "rejected book payload");
        AppError::Validation(e)
    })
}

// Only called on payloads that already passed validation.
fn decode<T: DeserializeOwned>(payload: Value) -> AppResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("validated book payload failed to decode: {}", e)))
}
