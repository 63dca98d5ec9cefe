//! Route handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use eventdesk_validator::{FormCatalog, FormSpec};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Standard `{ "success": true, "message": .., "data": .. }` envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: "ok",
            data,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    ApiResponse::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn list_forms(State(state): State<AppState>) -> Json<ApiResponse<Arc<FormCatalog>>> {
    ApiResponse::ok(state.catalog)
}

async fn get_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ApiResponse<FormSpec>>> {
    state
        .catalog
        .get(&name)
        .cloned()
        .map(ApiResponse::ok)
        .ok_or_else(|| ApiError::NotFound(format!("form `{name}`")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/forms", get(list_forms))
        .route("/api/forms/{name}", get(get_form))
}
