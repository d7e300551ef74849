/**
 * Seed Route
 * Idempotent bootstrap of the fixed settings record, the skill list, and
 * the flagship project. Guarded by the admin token; bootstrap is an
 * administrative operation, not a public page.
 */
use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::db::models::{NewProject, Project, SiteSettings, Skill};
use crate::routes::{admin::verify_admin, internal_error, SuccessResponse};
use crate::AppState;

struct SeedSkill {
    name: &'static str,
    icon: &'static str,
    category: &'static str,
    proficiency: i64,
}

/// Seed skills, display order assigned by list position.
const SEED_SKILLS: &[SeedSkill] = &[
    SeedSkill { name: "Python", icon: "fab fa-python", category: "backend", proficiency: 95 },
    SeedSkill { name: "Django", icon: "fas fa-cube", category: "backend", proficiency: 90 },
    SeedSkill { name: "JavaScript", icon: "fab fa-js", category: "frontend", proficiency: 85 },
    SeedSkill { name: "HTML/CSS", icon: "fab fa-html5", category: "frontend", proficiency: 90 },
    SeedSkill { name: "PostgreSQL", icon: "fas fa-database", category: "database", proficiency: 85 },
    SeedSkill { name: "SQLite", icon: "fas fa-database", category: "database", proficiency: 90 },
    SeedSkill { name: "Git", icon: "fab fa-git-alt", category: "tools", proficiency: 90 },
    SeedSkill { name: "Docker", icon: "fab fa-docker", category: "tools", proficiency: 75 },
    SeedSkill { name: "REST APIs", icon: "fas fa-plug", category: "backend", proficiency: 90 },
    SeedSkill { name: "Tailwind CSS", icon: "fas fa-wind", category: "frontend", proficiency: 85 },
];

fn seed_project() -> NewProject {
    NewProject {
        title: "Egy360".to_string(),
        slug: "egy360".to_string(),
        tagline: "Discover Egypt - A comprehensive tourism and travel platform".to_string(),
        description: "Egy360 is a full-featured tourism platform showcasing Egypt's rich \
                      heritage, from ancient pyramids to modern attractions. It features an \
                      elegant UI, comprehensive destination guides, tour booking capabilities, \
                      and a dynamic content management system.\n\nThe platform includes \
                      interactive maps, curated travel itineraries, hotel recommendations, and \
                      detailed articles about Egyptian history and culture. Designed with both \
                      tourists and travel agencies in mind, Egy360 provides a seamless \
                      experience for planning the perfect Egyptian adventure."
            .to_string(),
        thumbnail: "https://images.unsplash.com/photo-1539768942893-daf53e448371?w=800".to_string(),
        screenshots: vec![
            "https://images.unsplash.com/photo-1539768942893-daf53e448371?w=1200".to_string(),
            "https://images.unsplash.com/photo-1553913861-c0fddf2619ee?w=1200".to_string(),
            "https://images.unsplash.com/photo-1568322445389-f64ac2515020?w=1200".to_string(),
        ],
        live_url: "https://egy360.up.railway.app".to_string(),
        github_url: "https://github.com/mohammadhussienzo90-collab/Egy360".to_string(),
        tech_stack: vec![
            "Django".to_string(),
            "Python".to_string(),
            "SQLite".to_string(),
            "Tailwind CSS".to_string(),
            "Alpine.js".to_string(),
            "Railway".to_string(),
        ],
        features: vec![
            "Dynamic destination guides with rich media".to_string(),
            "Interactive tour booking system".to_string(),
            "Curated hotel recommendations".to_string(),
            "Comprehensive article management".to_string(),
            "Responsive, mobile-first design".to_string(),
            "SEO optimized content".to_string(),
            "Admin dashboard for content management".to_string(),
        ],
        category: "website".to_string(),
        is_featured: true,
        display_order: 1,
    }
}

/// GET /seed-data - Upsert the fixed seed records. Settings are overwritten
/// in place, skills are matched by name, the project by slug; running it
/// twice leaves the same rows as running it once.
pub async fn seed_data(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Err(err) = verify_admin(&state, &headers) {
        return err.into_response();
    }

    let mut settings = match SiteSettings::get_or_create(&state.pool).await {
        Ok(s) => s,
        Err(e) => return internal_error("loading settings", e),
    };
    settings.name = "Mohamed Ali Hussien".to_string();
    settings.title = "Full Stack Developer".to_string();
    settings.bio = "Passionate Full Stack Developer with expertise in Django, Python, and \
                    modern web technologies. I build scalable web applications that solve \
                    real-world problems. Currently focused on creating exceptional digital \
                    experiences that combine clean code with beautiful design."
        .to_string();
    settings.email = "mohammadhussienzo90@gmail.com".to_string();
    settings.github_url = "https://github.com/mohammadhussienzo90-collab".to_string();
    if let Err(e) = settings.save(&state.pool).await {
        return internal_error("seeding settings", e);
    }

    for (i, skill) in SEED_SKILLS.iter().enumerate() {
        if let Err(e) = Skill::upsert_by_name(
            &state.pool,
            skill.name,
            skill.icon,
            skill.category,
            skill.proficiency,
            i as i64,
        )
        .await
        {
            return internal_error("seeding skills", e);
        }
    }

    let project = seed_project();
    if let Err(e) = Project::upsert_by_slug(&state.pool, "egy360", &project).await {
        return internal_error("seeding project", e);
    }

    tracing::info!("Seed data applied");

    Json(SuccessResponse {
        success: true,
        message: Some("Data seeded successfully!".to_string()),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use crate::db::models::{Project, SiteSettings, Skill};
    use crate::routes::testing::{send, test_app, TEST_ADMIN_TOKEN};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    fn seed_request() -> Request<Body> {
        Request::get("/seed-data")
            .header("authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_seed_requires_admin_token() {
        let (app, _state) = test_app().await;
        let req = Request::get("/seed-data").body(Body::empty()).unwrap();
        let (status, _body) = send(app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_seed_populates_fixed_records() {
        let (app, state) = test_app().await;

        let (status, body) = send(app, seed_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Data seeded successfully!");

        let settings = SiteSettings::get_or_create(&state.pool).await.unwrap();
        assert_eq!(settings.email, "mohammadhussienzo90@gmail.com");

        let skills = Skill::list_all(&state.pool).await.unwrap();
        assert_eq!(skills.len(), 10);
        // Display order follows seed list position.
        assert_eq!(skills[0].name, "Python");
        assert_eq!(skills[1].name, "Django");

        let project = Project::find_by_slug(&state.pool, "egy360")
            .await
            .unwrap()
            .unwrap();
        assert!(project.is_featured);
        assert_eq!(project.screenshots.0.len(), 3);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (app, state) = test_app().await;

        let (first, _) = send(app.clone(), seed_request()).await;
        assert_eq!(first, StatusCode::OK);
        let (second, _) = send(app, seed_request()).await;
        assert_eq!(second, StatusCode::OK);

        let settings_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM site_settings")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(settings_count.0, 1);

        let skills = Skill::list_all(&state.pool).await.unwrap();
        assert_eq!(skills.len(), 10);

        let project_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(project_count.0, 1);
    }
}
