//! Integration tests for the HTTP surface.

mod common;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::get as route_get;
use common::{body_json, build_test_app, get, test_state};
use eventdesk_api::error::panic_response;
use eventdesk_api::{ApiError, Environment, error_handler};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

// ---------------------------------------------------------------------------
// Health and 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok() {
    let response = get(build_test_app(Environment::Production), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
}

#[rstest]
#[case(Environment::Production)]
#[case(Environment::Development)]
#[tokio::test]
async fn unknown_route_gets_fixed_envelope(#[case] environment: Environment) {
    let response = get(build_test_app(environment), "/events/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "message": "Page not found", "data": null })
    );
}

// ---------------------------------------------------------------------------
// Form catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_builtin_forms() {
    let response = get(build_test_app(Environment::Production), "/api/forms").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|form| form["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["contact", "login", "host_registration", "admin_search"]);
}

#[tokio::test]
async fn describes_one_form() {
    let response = get(build_test_app(Environment::Production), "/api/forms/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let password = &json["data"]["fields"][1];
    assert_eq!(password["id"], "password");
    assert_eq!(password["trigger"], "blur");
    assert_eq!(
        password["rules"],
        json!([
            { "name": "required", "message": "Password is required", "type": "required" },
            {
                "name": "min_length",
                "message": "Password must be at least 8 characters",
                "type": "min_length",
                "min": 8
            }
        ])
    );
}

// ---------------------------------------------------------------------------
// Error envelopes and the development stack
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_form_in_production_has_no_stack() {
    let response = get(build_test_app(Environment::Production), "/api/forms/signup").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({
            "success": false,
            "error": { "code": 404, "message": "form `signup` not found" }
        })
    );
}

#[tokio::test]
async fn unknown_form_in_development_has_stack() {
    let response = get(build_test_app(Environment::Development), "/api/forms/signup").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], 404);
    assert_eq!(json["error"]["message"], "form `signup` not found");
    assert!(json["error"]["stack"].as_str().unwrap().contains("NotFound"));
}

async fn corrupt_seat_map() {
    panic!("seat map corrupted");
}

fn failing_app(environment: Environment) -> Router {
    let state = test_state(environment);
    Router::new()
        .route(
            "/internal",
            route_get(|| async {
                Err::<(), _>(ApiError::Internal(anyhow::anyhow!("ticket store offline")))
            }),
        )
        .route(
            "/panic",
            route_get(corrupt_seat_map),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn_with_state(state.clone(), error_handler))
        .with_state(state)
}

#[rstest]
#[case("/internal", "ticket store offline")]
#[case("/panic", "seat map corrupted")]
#[tokio::test]
async fn internal_errors_are_generic_in_production(#[case] uri: &str, #[case] detail: &str) {
    let response = get(failing_app(Environment::Production), uri).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "success": false,
            "error": { "code": 500, "message": "Internal server error" }
        })
    );
    assert!(!json.to_string().contains(detail));
}

#[rstest]
#[case("/internal", "ticket store offline")]
#[case("/panic", "seat map corrupted")]
#[tokio::test]
async fn internal_errors_carry_stack_in_development(#[case] uri: &str, #[case] detail: &str) {
    let response = get(failing_app(Environment::Development), uri).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Internal server error");
    assert!(json["error"]["stack"].as_str().unwrap().contains(detail));
}
