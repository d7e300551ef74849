/**
 * Home Route
 * Page context for the portfolio landing page: settings, projects, skills
 * grouped by category, and the two empty contact form payloads.
 */
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;

use crate::db::models::{
    skill_category_label, Project, SiteSettings, Skill, BUDGET_CHOICES, TIMELINE_CHOICES,
};
use crate::routes::internal_error;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub settings: SiteSettings,
    pub projects: Vec<Project>,
    pub featured_projects: Vec<Project>,
    pub skills: Vec<Skill>,
    /// Category label -> ordered list of skills. Group order follows the
    /// skill query's own ordering, not the category enum order.
    pub skills_by_category: serde_json::Map<String, Value>,
    pub contact_form: ContactFormPayload,
    pub project_form: ProjectFormPayload,
}

/// Empty general form payload for client-side rendering.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormPayload {
    pub form_type: &'static str,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for ContactFormPayload {
    fn default() -> Self {
        Self {
            form_type: "general",
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }
}

/// Empty project inquiry form payload, including the budget/timeline
/// choices the client needs to render its selects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFormPayload {
    pub form_type: &'static str,
    pub name: String,
    pub email: String,
    pub project_description: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub budget_choices: Vec<Choice>,
    pub timeline_choices: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Default for ProjectFormPayload {
    fn default() -> Self {
        Self {
            form_type: "project",
            name: String::new(),
            email: String::new(),
            project_description: String::new(),
            budget: String::new(),
            timeline: String::new(),
            message: String::new(),
            budget_choices: choices(BUDGET_CHOICES),
            timeline_choices: choices(TIMELINE_CHOICES),
        }
    }
}

fn choices(table: &'static [(&'static str, &'static str)]) -> Vec<Choice> {
    table
        .iter()
        .map(|(value, label)| Choice { value, label })
        .collect()
}

/// GET / - Full page context for the home page.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let settings = match SiteSettings::get_or_create(&state.pool).await {
        Ok(s) => s,
        Err(e) => return internal_error("loading settings", e),
    };

    let projects = match Project::list_all(&state.pool).await {
        Ok(p) => p,
        Err(e) => return internal_error("listing projects", e),
    };
    let featured_projects: Vec<Project> =
        projects.iter().filter(|p| p.is_featured).cloned().collect();

    let skills = match Skill::list_all(&state.pool).await {
        Ok(s) => s,
        Err(e) => return internal_error("listing skills", e),
    };

    let mut skills_by_category = serde_json::Map::new();
    for skill in &skills {
        let label = skill_category_label(&skill.category);
        let entry = skills_by_category
            .entry(label)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let (Value::Array(list), Ok(value)) = (entry, serde_json::to_value(skill)) {
            list.push(value);
        }
    }

    let response = HomeResponse {
        settings,
        projects,
        featured_projects,
        skills,
        skills_by_category,
        contact_form: ContactFormPayload::default(),
        project_form: ProjectFormPayload::default(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use crate::db::models::Skill;
    use crate::routes::testing::{get_json, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_home_returns_context_with_defaults() {
        let (app, _state) = test_app().await;
        let (status, body) = get_json(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["settings"]["name"], "Mohamed Ali Hussien");
        assert!(body["projects"].as_array().unwrap().is_empty());
        assert!(body["featuredProjects"].as_array().unwrap().is_empty());
        assert_eq!(body["contactForm"]["formType"], "general");
        assert_eq!(body["projectForm"]["formType"], "project");
        assert_eq!(
            body["projectForm"]["budgetChoices"][0]["value"],
            "under_1k"
        );
    }

    #[tokio::test]
    async fn test_home_groups_skills_in_query_order() {
        let (app, state) = test_app().await;

        // Query order is (display_order, name): Git first, then Python.
        Skill::upsert_by_name(&state.pool, "Python", "fab fa-python", "backend", 95, 5)
            .await
            .unwrap();
        Skill::upsert_by_name(&state.pool, "Git", "fab fa-git-alt", "tools", 90, 1)
            .await
            .unwrap();

        let (status, body) = get_json(app, "/").await;
        assert_eq!(status, StatusCode::OK);

        let groups = body["skillsByCategory"].as_object().unwrap();
        let labels: Vec<String> = groups.keys().cloned().collect();
        assert_eq!(labels, vec!["Tools & DevOps", "Backend"]);
        assert_eq!(groups["Backend"][0]["name"], "Python");
    }
}
