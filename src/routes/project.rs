/**
 * Project Detail Route
 * One project looked up by slug, plus settings and up to 3 related projects.
 */
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::db::models::{Project, SiteSettings};
use crate::routes::{internal_error, ErrorResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub settings: SiteSettings,
    /// Same category, current project excluded, default ordering. A crude
    /// proxy for relevance, nothing more.
    pub related_projects: Vec<Project>,
}

/// GET /project/{slug} - Project detail page context, 404 on unknown slug.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let project = match Project::find_by_slug(&state.pool, &slug).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Not found".to_string(),
                    message: None,
                }),
            )
                .into_response();
        }
        Err(e) => return internal_error("fetching project", e),
    };

    let settings = match SiteSettings::get_or_create(&state.pool).await {
        Ok(s) => s,
        Err(e) => return internal_error("loading settings", e),
    };

    let related_projects = match project.related(&state.pool).await {
        Ok(r) => r,
        Err(e) => return internal_error("fetching related projects", e),
    };

    let response = ProjectDetailResponse {
        project,
        settings,
        related_projects,
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use crate::db::models::{NewProject, Project};
    use crate::routes::testing::{get_json, test_app};
    use axum::http::StatusCode;

    fn project(title: &str, category: &str, featured: bool) -> NewProject {
        NewProject {
            title: title.to_string(),
            slug: String::new(),
            tagline: "tagline".to_string(),
            description: "description".to_string(),
            thumbnail: "https://example.com/t.png".to_string(),
            screenshots: vec![],
            live_url: "https://example.com".to_string(),
            github_url: String::new(),
            tech_stack: vec!["Rust".to_string()],
            features: vec![],
            category: category.to_string(),
            is_featured: featured,
            display_order: 0,
        }
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let (app, _state) = test_app().await;
        let (status, body) = get_json(app, "/project/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn test_detail_includes_related_without_self() {
        let (app, state) = test_app().await;

        for i in 0..5 {
            Project::insert(&state.pool, &project(&format!("Website {i}"), "website", false))
                .await
                .unwrap();
        }
        Project::insert(&state.pool, &project("Other Thing", "other", false))
            .await
            .unwrap();

        let (status, body) = get_json(app, "/project/website-0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"]["slug"], "website-0");
        assert_eq!(body["settings"]["title"], "Full Stack Developer");

        let related = body["relatedProjects"].as_array().unwrap();
        assert_eq!(related.len(), 3);
        for p in related {
            assert_ne!(p["slug"], "website-0");
            assert_eq!(p["category"], "website");
        }
    }
}
