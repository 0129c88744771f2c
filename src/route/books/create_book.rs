use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    error::{ApiError, DatabaseError, ErrorVerbosityProvider},
    extractor::json::ApiJson,
    state::ApiState,
};

use super::Book;

#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.book)).into_response()
    }
}

/// Stores one book inside its own transaction and echoes it back.
///
/// A malformed body is rejected by [`ApiJson`] before any database work
/// happens, and a failed insert rolls back, so the table is never left
/// with a partial record.
#[tracing::instrument(name = "create_book", skip_all)]
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<Book>,
) -> Result<CreateBookResponse, ApiError> {
    state
        .repository()
        .insert(&book)
        .await
        .map_err(|err| DatabaseError::new(state.error_verbosity(), err))?;

    tracing::trace!(id = %book.id, "Created");

    Ok(CreateBookResponse { book })
}
