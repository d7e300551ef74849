/**
 * Routes Module
 * API route handlers
 */
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

pub mod admin;
pub mod contact;
pub mod health;
pub mod home;
pub mod project;
pub mod seed;

/// Error response shared by the route handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Success acknowledgment (contact submit, seed, admin mutations).
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Log a store fault and surface it as a generic 500. Connectivity failures
/// are not retried anywhere.
pub(crate) fn internal_error(context: &str, e: sqlx::Error) -> axum::response::Response {
    tracing::error!("Database error {}: {}", context, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Database error".to_string(),
            message: None,
        }),
    )
        .into_response()
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::{create_app, AppState};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

    pub async fn test_state() -> AppState {
        AppState {
            pool: crate::db::test_pool().await,
            admin_token: Some(TEST_ADMIN_TOKEN.to_string()),
        }
    }

    pub async fn test_app() -> (Router, AppState) {
        let state = test_state().await;
        (create_app(state.clone()), state)
    }

    pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::get(uri).body(Body::empty()).unwrap();
        send(app, req).await
    }

    pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, value)
    }
}
