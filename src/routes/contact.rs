/**
 * Contact Route
 * Accepts contact form submissions and persists them as inquiries.
 */
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use serde::Serialize;

use crate::db::models::ContactInquiry;
use crate::forms::{ContactForm, ContactSubmission, FormErrors, ProjectInquiryForm};
use crate::routes::internal_error;
use crate::AppState;

const CONFIRMATION_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FormErrors>,
}

/// POST /contact - Validate and persist a contact submission. The client's
/// form_type field selects the form; "project" gets the project inquiry
/// form, anything else the general one. The selected form stamps the
/// inquiry_type regardless of what the client sent.
pub async fn contact_submit(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> impl IntoResponse {
    let validated = if submission.form_type == "project" {
        ProjectInquiryForm::validate(&submission)
    } else {
        ContactForm::validate(&submission)
    };

    let inquiry = match validated {
        Ok(inquiry) => inquiry,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse {
                    success: false,
                    message: None,
                    errors: Some(errors),
                }),
            )
                .into_response();
        }
    };

    match ContactInquiry::insert(&state.pool, &inquiry).await {
        Ok(saved) => {
            tracing::info!(
                inquiry_id = saved.id,
                inquiry_type = %saved.inquiry_type,
                "contact inquiry received"
            );
            (
                StatusCode::OK,
                Json(ContactResponse {
                    success: true,
                    message: Some(CONFIRMATION_MESSAGE.to_string()),
                    errors: None,
                }),
            )
                .into_response()
        }
        Err(e) => internal_error("saving contact inquiry", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::db::models::ContactInquiry;
    use crate::routes::testing::{send, test_app};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    fn form_post(body: &str) -> Request<Body> {
        Request::post("/contact")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_general_submission_persists_one_row() {
        let (app, state) = test_app().await;

        let (status, body) = send(
            app,
            form_post("form_type=general&name=Ada&email=ada%40example.com&message=Hello"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["message"].as_str().unwrap().contains("Thank you"));

        assert_eq!(ContactInquiry::count(&state.pool).await.unwrap(), 1);
        let rows = ContactInquiry::list_all(&state.pool).await.unwrap();
        assert_eq!(rows[0].inquiry_type, "general");
    }

    #[tokio::test]
    async fn test_missing_email_yields_field_error_and_no_row() {
        let (app, state) = test_app().await;

        let (status, body) = send(app, form_post("form_type=general&name=Ada&message=Hello")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"]["email"], "This field is required.");
        assert_eq!(ContactInquiry::count(&state.pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_project_form_type_stamps_project() {
        let (app, state) = test_app().await;

        let (status, body) = send(
            app,
            form_post(
                "form_type=project&name=Ada&email=ada%40example.com&message=Hi\
                 &project_description=Build+me+a+site&budget=1k_5k&timeline=asap",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let rows = ContactInquiry::list_all(&state.pool).await.unwrap();
        assert_eq!(rows[0].inquiry_type, "project");
        assert_eq!(rows[0].budget, "1k_5k");
        assert_eq!(rows[0].project_description, "Build me a site");
    }

    #[tokio::test]
    async fn test_unknown_form_type_falls_back_to_general() {
        let (app, state) = test_app().await;

        // Project-only fields are dropped by the general form.
        let (status, _body) = send(
            app,
            form_post(
                "form_type=whatever&name=Ada&email=ada%40example.com&message=Hi&budget=1k_5k",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let rows = ContactInquiry::list_all(&state.pool).await.unwrap();
        assert_eq!(rows[0].inquiry_type, "general");
        assert_eq!(rows[0].budget, "");
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let (app, _state) = test_app().await;
        let req = Request::get("/contact").body(Body::empty()).unwrap();
        let (status, _body) = send(app, req).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
