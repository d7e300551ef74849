/**
 * Admin Routes
 * Token-guarded management surface: settings edit, inquiry triage.
 * Settings deletion is deliberately absent; the singleton row only ever
 * gets overwritten.
 */
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::db::models::{ContactInquiry, SiteSettings};
use crate::routes::{internal_error, ErrorResponse, SuccessResponse};
use crate::AppState;

/// Check the bearer token against the configured admin token. Digests are
/// compared instead of the raw strings so the comparison is fixed-length.
pub fn verify_admin(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    let expected = match &state.admin_token {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "Admin access not configured".to_string(),
                    message: Some("Set the ADMIN_TOKEN environment variable".to_string()),
                }),
            ));
        }
    };

    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(t) if Sha256::digest(t.as_bytes()) == Sha256::digest(expected.as_bytes()) => Ok(()),
        Some(_) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Invalid token".to_string(),
                message: None,
            }),
        )),
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Authorization required".to_string(),
                message: None,
            }),
        )),
    }
}

/// Partial settings update; unset fields keep their current values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInquiryRequest {
    pub is_read: bool,
}

/// PATCH /api/admin/settings - Update the singleton settings row.
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateSettingsRequest>,
) -> impl IntoResponse {
    if let Err(err) = verify_admin(&state, &headers) {
        return err.into_response();
    }

    let mut settings = match SiteSettings::get_or_create(&state.pool).await {
        Ok(s) => s,
        Err(e) => return internal_error("loading settings", e),
    };

    if let Some(name) = payload.name {
        settings.name = name;
    }
    if let Some(title) = payload.title {
        settings.title = title;
    }
    if let Some(bio) = payload.bio {
        settings.bio = bio;
    }
    if let Some(photo_url) = payload.photo_url {
        settings.photo_url = photo_url;
    }
    if let Some(email) = payload.email {
        settings.email = email;
    }
    if let Some(github_url) = payload.github_url {
        settings.github_url = github_url;
    }
    if let Some(linkedin_url) = payload.linkedin_url {
        settings.linkedin_url = linkedin_url;
    }
    if let Some(resume_url) = payload.resume_url {
        settings.resume_url = resume_url;
    }

    match settings.save(&state.pool).await {
        Ok(()) => (StatusCode::OK, Json(settings)).into_response(),
        Err(e) => internal_error("saving settings", e),
    }
}

/// GET /api/admin/inquiries - All inquiries, newest first.
pub async fn list_inquiries(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Err(err) = verify_admin(&state, &headers) {
        return err.into_response();
    }

    match ContactInquiry::list_all(&state.pool).await {
        Ok(inquiries) => (StatusCode::OK, Json(inquiries)).into_response(),
        Err(e) => internal_error("listing inquiries", e),
    }
}

/// PATCH /api/admin/inquiries/{id} - Mark an inquiry read or unread.
pub async fn update_inquiry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateInquiryRequest>,
) -> impl IntoResponse {
    if let Err(err) = verify_admin(&state, &headers) {
        return err.into_response();
    }

    match ContactInquiry::set_read(&state.pool, id, payload.is_read).await {
        Ok(true) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success: true,
                message: None,
            }),
        )
            .into_response(),
        Ok(false) => not_found(),
        Err(e) => internal_error("updating inquiry", e),
    }
}

/// DELETE /api/admin/inquiries/{id}
pub async fn delete_inquiry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if let Err(err) = verify_admin(&state, &headers) {
        return err.into_response();
    }

    match ContactInquiry::delete(&state.pool, id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success: true,
                message: None,
            }),
        )
            .into_response(),
        Ok(false) => not_found(),
        Err(e) => internal_error("deleting inquiry", e),
    }
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            message: None,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use crate::db::models::{ContactInquiry, NewContactInquiry, SiteSettings};
    use crate::routes::testing::{send, test_app, TEST_ADMIN_TOKEN};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    async fn insert_inquiry(pool: &sqlx::SqlitePool) -> ContactInquiry {
        ContactInquiry::insert(
            pool,
            &NewContactInquiry {
                inquiry_type: "general".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
                budget: String::new(),
                timeline: String::new(),
                project_description: String::new(),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_admin_requires_token() {
        let (app, _state) = test_app().await;
        let req = Request::get("/api/admin/inquiries")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Authorization required");
    }

    #[tokio::test]
    async fn test_admin_rejects_wrong_token() {
        let (app, _state) = test_app().await;
        let req = Request::get("/api/admin/inquiries")
            .header("authorization", "Bearer wrong-token")
            .body(Body::empty())
            .unwrap();
        let (status, _body) = send(app, req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_unconfigured_is_unavailable() {
        let (_, mut state) = test_app().await;
        state.admin_token = None;
        let app = crate::create_app(state);

        let req = Request::get("/api/admin/inquiries")
            .header("authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
            .body(Body::empty())
            .unwrap();
        let (status, _body) = send(app, req).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_mark_inquiry_read() {
        let (app, state) = test_app().await;
        let inquiry = insert_inquiry(&state.pool).await;

        let req = Request::patch(format!("/api/admin/inquiries/{}", inquiry.id))
            .header("authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"isRead":true}"#))
            .unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let rows = ContactInquiry::list_all(&state.pool).await.unwrap();
        assert!(rows[0].is_read);
    }

    #[tokio::test]
    async fn test_delete_unknown_inquiry_is_not_found() {
        let (app, _state) = test_app().await;
        let req = Request::delete("/api/admin/inquiries/999")
            .header("authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
            .body(Body::empty())
            .unwrap();
        let (status, _body) = send(app, req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_settings_overwrites_singleton() {
        let (app, state) = test_app().await;

        let req = Request::patch("/api/admin/settings")
            .header("authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"New Name","githubUrl":"https://github.com/new"}"#))
            .unwrap();
        let (status, body) = send(app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "New Name");

        let settings = SiteSettings::get_or_create(&state.pool).await.unwrap();
        assert_eq!(settings.name, "New Name");
        assert_eq!(settings.github_url, "https://github.com/new");
        // Untouched fields keep their defaults.
        assert_eq!(settings.title, "Full Stack Developer");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM site_settings")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }
}
