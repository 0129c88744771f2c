use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clap::ValueEnum;
use derive_more::From;
use serde::Serialize;

use crate::repo::RepoError;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ErrorVerbosity {
    /// Server returns an empty response with [`StatusCode::NO_CONTENT`] for all errors.
    None,
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with cleared error content and the appropriate status code.
    Type,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

/// Implemented by states that know the configured error verbosity.
pub trait ErrorVerbosityProvider {
    fn error_verbosity(&self) -> ErrorVerbosity;
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    #[serde(flatten)]
    error: ApiError,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ApiErrorMessage {
    message: &'static str,
}

impl From<ApiErrorResponse> for ApiErrorMessage {
    fn from(response: ApiErrorResponse) -> Self {
        ApiErrorMessage {
            message: response.message,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        match self.error.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => self.error.status_code().into_response(),
            ErrorVerbosity::Message => {
                let status_code = self.error.status_code();

                (status_code, Json(ApiErrorMessage::from(self))).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                let status_code = self.error.status_code();

                (status_code, Json(self)).into_response()
            }
        }
    }
}

#[derive(Debug, From, Serialize)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs.
    InternalServerError(InternalServerError),
    /// Database error
    ///
    /// This error is returned when a database operation fails.
    Database(DatabaseError),
    /// Body error
    ///
    /// This error is returned when the body is not as expected.
    Body(BodyError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested resource is not found.
    NotFound(NotFoundError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Database(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "An internal server error has occurred",
            ApiError::Database(_) => "Database operation failed",
            ApiError::Body(_) => "Failed to parse request body",
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::NotFound(_) => "The requested resource was not found",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(err) => err.status_code(),
            ApiError::Database(err) => err.status_code(),
            ApiError::Body(err) => err.status_code(),
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::NotFound(err) => err.status_code(),
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = match error.verbosity() {
            ErrorVerbosity::None => "",
            _ => error.message(),
        };

        ApiErrorResponse { error, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct InternalServerError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then(|| err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug, Serialize)]
pub enum DatabaseErrorType {
    /// A connection could not be established or acquired from the pool.
    Connection,
    /// The written book collides with an existing row key.
    DuplicateKey,
    /// Statement preparation, execution, commit or row scanning failed.
    Query,
}

#[derive(Debug, Serialize)]
pub struct DatabaseError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    database_error_type: DatabaseErrorType,
    database_error_reason: Option<String>,
}

impl DatabaseError {
    pub fn new(verbosity: ErrorVerbosity, err: RepoError) -> Self {
        tracing::error!(%err, "Database error");

        let database_error_type = match &err {
            RepoError::Connection(_) => DatabaseErrorType::Connection,
            RepoError::DuplicateKey(_) => DatabaseErrorType::DuplicateKey,
            RepoError::Query(_) => DatabaseErrorType::Query,
        };

        let database_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| err.to_string());

        DatabaseError {
            verbosity,
            database_error_type,
            database_error_reason,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self.database_error_type {
            DatabaseErrorType::Connection => StatusCode::SERVICE_UNAVAILABLE,
            DatabaseErrorType::DuplicateKey => StatusCode::CONFLICT,
            DatabaseErrorType::Query => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BodyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn new(
        verbosity: ErrorVerbosity,
        body_error_reason: String,
        body_expected_schema: String,
    ) -> Self {
        let (body_error_reason, body_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(body_error_reason), Some(body_expected_schema)),
                false => (None, None),
            };

        BodyError {
            verbosity,
            body_error_reason,
            body_expected_schema,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Serialize)]
pub struct MethodNotAllowedError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError { verbosity }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        NotFoundError { verbosity }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn duplicate_key_maps_to_conflict() {
        let err = DatabaseError::new(
            ErrorVerbosity::Full,
            RepoError::DuplicateKey(sqlx::Error::RowNotFound),
        );

        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn connection_failure_maps_to_service_unavailable() {
        let err = DatabaseError::new(
            ErrorVerbosity::Full,
            RepoError::Connection(sqlx::Error::PoolTimedOut),
        );

        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn none_verbosity_responds_with_no_content() {
        let err = ApiError::NotFound(NotFoundError::new(ErrorVerbosity::None));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn full_verbosity_keeps_the_status_code() {
        let err = ApiError::NotFound(NotFoundError::new(ErrorVerbosity::Full));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
