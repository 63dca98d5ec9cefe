use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const NOT_FOUND_MESSAGE: &str = "Page not found";

/// `{ "success": false, "message": "Page not found", "data": null }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundBody {
    pub success: bool,
    pub message: &'static str,
    pub data: Option<()>,
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self {
            success: false,
            message: NOT_FOUND_MESSAGE,
            data: None,
        }
    }
}

/// Router fallback for unmatched routes.
///
/// Unlike [`ApiError::NotFound`](crate::error::ApiError::NotFound) this is a
/// fixed envelope and never carries a stack.
pub async fn handle_404(uri: Uri) -> Response {
    tracing::debug!(%uri, "no route matched");
    (StatusCode::NOT_FOUND, Json(NotFoundBody::default())).into_response()
}
