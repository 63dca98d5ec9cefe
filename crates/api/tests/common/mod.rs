use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use eventdesk_api::{ApiConfig, AppState, Environment, build_app_router};
use eventdesk_validator::FormCatalog;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ApiConfig` for the given environment.
pub fn test_config(environment: Environment) -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment,
    }
}

pub fn test_state(environment: Environment) -> AppState {
    AppState::new(test_config(environment), FormCatalog::builtin())
}

/// The production router over the built-in catalog.
pub fn build_test_app(environment: Environment) -> Router {
    build_app_router(test_state(environment))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
