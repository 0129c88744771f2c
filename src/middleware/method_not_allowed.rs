use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
};

use crate::error::{ApiError, ErrorVerbosityProvider, MethodNotAllowedError};

/// Maps axum's bare 405 response into the [`ApiError`] pipeline, so a
/// wrong method on the books path answers with the same body shape as
/// every other error.
pub async fn method_not_allowed<S: ErrorVerbosityProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let resp = next.run(req).await;

    if resp.status() == StatusCode::METHOD_NOT_ALLOWED {
        return Err(MethodNotAllowedError::new(state.error_verbosity()).into());
    }

    Ok(resp)
}
