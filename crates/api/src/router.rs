//! Shared application router builder.
//!
//! [`build_app_router`] is used by both the server binary and the
//! integration tests, so both exercise the same middleware stack.

use axum::Router;
use axum::middleware::from_fn_with_state;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::{error_handler, panic_response};
use crate::not_found::handle_404;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`].
///
/// Layers, innermost first:
///
/// 1. Panic recovery into a 500 envelope
/// 2. Development stack traces on error envelopes
/// 3. Request/response tracing
pub fn build_app_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .fallback(handle_404)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn_with_state(state.clone(), error_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
