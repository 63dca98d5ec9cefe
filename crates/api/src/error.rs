//! Error envelopes.
//!
//! Every failure leaves the server as
//!
//! ```json
//! { "success": false, "error": { "code": 500, "message": "Internal server error" } }
//! ```
//!
//! with `error.stack` added only when the server runs in development mode.
//! [`ApiError`] renders the envelope without a stack; the [`error_handler`]
//! middleware attaches it once it knows the environment.

use std::any::Any;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An explicit status with an optional public message.
    #[error("HTTP {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// Anything unexpected. Details are logged, never sent outside development.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Status { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message clients see.
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound(_) | Self::BadRequest(_) => self.to_string(),
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { message: None, .. } | Self::Internal(_) => INTERNAL_MESSAGE.to_owned(),
        }
    }

    fn trace(&self) -> String {
        match self {
            Self::Internal(err) => format!("{err:?}"),
            other => format!("{other:?}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, %status, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        ErrorEnvelope::new(status, self.public_message()).into_response_with_trace(self.trace())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// The HTTP status code.
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// `{ "success": false, "error": { .. } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: status.as_u16(),
                message: message.into(),
                stack: None,
            },
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.error.stack = Some(stack.into());
        self
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Renders the envelope and stashes it, plus `trace`, in the response
    /// extensions for [`error_handler`].
    fn into_response_with_trace(self, trace: String) -> Response {
        let mut response = (self.status(), Json(&self)).into_response();
        let extensions = response.extensions_mut();
        extensions.insert(ErrorTrace(trace));
        extensions.insert(self);
        response
    }
}

/// Diagnostic detail for an error response, exposed only in development.
#[derive(Debug, Clone)]
struct ErrorTrace(String);

/// Middleware that attaches `error.stack` to error envelopes in development.
///
/// Install with `axum::middleware::from_fn_with_state` outside every layer
/// that can produce an envelope.
pub async fn error_handler(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    if !state.config.environment.is_development() {
        return response;
    }

    let extensions = response.extensions_mut();
    let (Some(ErrorTrace(stack)), Some(envelope)) = (
        extensions.remove::<ErrorTrace>(),
        extensions.remove::<ErrorEnvelope>(),
    ) else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    (parts, Json(envelope.with_stack(stack))).into_response()
}

/// Turns a handler panic into a 500 envelope. Used with
/// `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("handler panicked");
    ApiError::Internal(anyhow::anyhow!("panic: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn error_to_response(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, json) = error_to_response(ApiError::NotFound("form `signup`".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json,
            json!({
                "success": false,
                "error": { "code": 404, "message": "form `signup` not found" }
            })
        );
    }

    #[tokio::test]
    async fn test_explicit_status_and_message() {
        let err = ApiError::Status {
            status: StatusCode::CONFLICT,
            message: Some("Event is full".into()),
        };
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"]["code"], 409);
        assert_eq!(json["error"]["message"], "Event is full");
    }

    #[tokio::test]
    async fn test_status_without_message_uses_generic() {
        let err = ApiError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: None,
        };
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"]["message"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_internal_is_sanitized() {
        let err = ApiError::Internal(anyhow::anyhow!("database password is hunter2"));
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], 500);
        assert_eq!(json["error"]["message"], "Internal server error");
        assert!(json["error"].get("stack").is_none());
        assert!(!json.to_string().contains("hunter2"));
    }

    #[test]
    fn test_response_carries_trace_for_middleware() {
        let response = ApiError::BadRequest("no".into()).into_response();
        assert!(response.extensions().get::<ErrorTrace>().is_some());
        assert_eq!(
            response.extensions().get::<ErrorEnvelope>().map(|e| e.error.code),
            Some(400)
        );
    }

    #[test]
    fn test_panic_response_extracts_message() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let ErrorTrace(trace) = response.extensions().get::<ErrorTrace>().unwrap().clone();
        assert!(trace.contains("boom"));
    }
}
