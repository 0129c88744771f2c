use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    error::{ApiError, DatabaseError, ErrorVerbosityProvider},
    state::ApiState,
};

use super::Book;

#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<Book>,
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.books)).into_response()
    }
}

/// Returns every book in the table as a JSON array.
///
/// An empty table yields `[]`.
#[tracing::instrument(name = "list_books", skip_all)]
pub async fn list_books(State(state): State<ApiState>) -> Result<ListBooksResponse, ApiError> {
    let books = state
        .repository()
        .list_all()
        .await
        .map_err(|err| DatabaseError::new(state.error_verbosity(), err))?;

    tracing::trace!(count = books.len(), "Listed");

    Ok(ListBooksResponse { books })
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use http_body_util::BodyExt;

    use super::ListBooksResponse;

    #[tokio::test]
    async fn empty_list_serializes_to_empty_array() {
        let response = ListBooksResponse { books: vec![] }.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Body is not collectable")
            .to_bytes();

        assert_eq!(&bytes[..], b"[]");
    }
}
