//! Database Models - structs representing database tables (used by sqlx/serde),
//! the category/budget/timeline choice tables, and the query helpers shared by
//! the public routes, the admin surface, and the seed routine.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};

// ============================================================================
// Choice tables (value, human-readable label)
// ============================================================================

pub const SKILL_CATEGORIES: &[(&str, &str)] = &[
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("tools", "Tools & DevOps"),
    ("database", "Database"),
];

pub const PROJECT_CATEGORIES: &[(&str, &str)] = &[
    ("website", "Website"),
    ("framework_app", "Framework Application"),
    ("api", "API / Backend"),
    ("other", "Other"),
];

pub const INQUIRY_TYPES: &[(&str, &str)] =
    &[("general", "General Inquiry"), ("project", "Project Inquiry")];

pub const BUDGET_CHOICES: &[(&str, &str)] = &[
    ("under_1k", "Under $1,000"),
    ("1k_5k", "$1,000 - $5,000"),
    ("5k_10k", "$5,000 - $10,000"),
    ("over_10k", "Over $10,000"),
    ("discuss", "Let's Discuss"),
];

pub const TIMELINE_CHOICES: &[(&str, &str)] = &[
    ("asap", "ASAP"),
    ("1_month", "Within 1 month"),
    ("1_3_months", "1-3 months"),
    ("3_plus_months", "3+ months"),
    ("flexible", "Flexible"),
];

pub fn choice_label(choices: &[(&'static str, &'static str)], value: &str) -> Option<&'static str> {
    choices
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

pub fn is_valid_choice(choices: &[(&str, &str)], value: &str) -> bool {
    choices.iter().any(|(v, _)| *v == value)
}

/// Human-readable label for a skill category, falling back to the raw value
/// for rows whose category predates the choice table.
pub fn skill_category_label(value: &str) -> String {
    choice_label(SKILL_CATEGORIES, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

// ============================================================================
// Slug derivation
// ============================================================================

/// Derive a URL-safe slug from a title: lowercase ASCII alphanumerics and
/// underscores kept, runs of spaces/hyphens collapsed into single hyphens,
/// leading and trailing separators trimmed.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == ' ' || c == '-' {
            pending_dash = true;
        }
    }
    slug
}

// ============================================================================
// SiteSettings (singleton)
// ============================================================================

/// Site-wide settings. The table carries a CHECK (id = 1) constraint, so at
/// most one row can ever exist.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub photo_url: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub resume_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Mohamed Ali Hussien".to_string(),
            title: "Full Stack Developer".to_string(),
            bio: "Passionate developer creating modern web applications.".to_string(),
            photo_url: String::new(),
            email: "contact@example.com".to_string(),
            github_url: String::new(),
            linkedin_url: String::new(),
            resume_url: String::new(),
        }
    }
}

impl SiteSettings {
    /// Fetch the singleton row, inserting the defaults when absent. The
    /// INSERT OR IGNORE is a single atomic statement, so two concurrent
    /// first reads cannot produce a duplicate.
    pub async fn get_or_create(pool: &SqlitePool) -> Result<SiteSettings, sqlx::Error> {
        let defaults = SiteSettings::default();
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO site_settings
                (id, name, title, bio, photo_url, email, github_url, linkedin_url, resume_url)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&defaults.name)
        .bind(&defaults.title)
        .bind(&defaults.bio)
        .bind(&defaults.photo_url)
        .bind(&defaults.email)
        .bind(&defaults.github_url)
        .bind(&defaults.linkedin_url)
        .bind(&defaults.resume_url)
        .execute(pool)
        .await?;

        sqlx::query_as::<_, SiteSettings>("SELECT * FROM site_settings WHERE id = 1")
            .fetch_one(pool)
            .await
    }

    /// Persist this instance as the sole settings row. Always targets id 1,
    /// so saving a "second" instance overwrites the existing row.
    pub async fn save(&self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO site_settings
                (id, name, title, bio, photo_url, email, github_url, linkedin_url, resume_url)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                title = excluded.title,
                bio = excluded.bio,
                photo_url = excluded.photo_url,
                email = excluded.email,
                github_url = excluded.github_url,
                linkedin_url = excluded.linkedin_url,
                resume_url = excluded.resume_url
            "#,
        )
        .bind(&self.name)
        .bind(&self.title)
        .bind(&self.bio)
        .bind(&self.photo_url)
        .bind(&self.email)
        .bind(&self.github_url)
        .bind(&self.linkedin_url)
        .bind(&self.resume_url)
        .execute(pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Skill
// ============================================================================

/// Skill or technology shown on the home page.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub category: String,
    pub proficiency: i64,
    pub display_order: i64,
}

impl Skill {
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Skill>, sqlx::Error> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY display_order, name")
            .fetch_all(pool)
            .await
    }

    /// Upsert keyed by name. There is no uniqueness constraint on name; the
    /// seed routine treats it as a de-facto key, so this updates in place
    /// when a row with the name exists and inserts otherwise.
    pub async fn upsert_by_name(
        pool: &SqlitePool,
        name: &str,
        icon: &str,
        category: &str,
        proficiency: i64,
        display_order: i64,
    ) -> Result<(), sqlx::Error> {
        let updated = sqlx::query(
            r#"
            UPDATE skills
            SET icon = $1, category = $2, proficiency = $3, display_order = $4
            WHERE name = $5
            "#,
        )
        .bind(icon)
        .bind(category)
        .bind(proficiency)
        .bind(display_order)
        .bind(name)
        .execute(pool)
        .await?;

        if updated.rows_affected() == 0 {
            sqlx::query(
                r#"
                INSERT INTO skills (name, icon, category, proficiency, display_order)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(name)
            .bind(icon)
            .bind(category)
            .bind(proficiency)
            .bind(display_order)
            .execute(pool)
            .await?;
        }

        Ok(())
    }
}

// ============================================================================
// Project
// ============================================================================

/// Portfolio project. The ordered URL/string lists are stored as JSON text.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub thumbnail: String,
    pub screenshots: Json<Vec<String>>,
    pub live_url: String,
    pub github_url: String,
    pub tech_stack: Json<Vec<String>>,
    pub features: Json<Vec<String>>,
    pub category: String,
    pub is_featured: bool,
    pub display_order: i64,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

/// Project fields for insertion/upsert (seed routine and admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub thumbnail: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i64,
}

impl Project {
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY display_order, created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_slug(
        pool: &SqlitePool,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Up to 3 other projects in the same category, default ordering.
    pub async fn related(&self, pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE category = $1 AND id != $2
            ORDER BY display_order, created_at DESC
            LIMIT 3
            "#,
        )
        .bind(&self.category)
        .bind(self.id)
        .fetch_all(pool)
        .await
    }

    /// Insert a new project. A blank slug is derived from the title at save
    /// time; a non-blank slug is stored untouched. The derivation happens
    /// once - later title edits never resync the slug.
    pub async fn insert(pool: &SqlitePool, new: &NewProject) -> Result<Project, sqlx::Error> {
        let slug = if new.slug.is_empty() {
            slugify(&new.title)
        } else {
            new.slug.clone()
        };
        let now = Utc::now();

        sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (title, slug, tagline, description, thumbnail, screenshots, live_url,
                 github_url, tech_stack, features, category, is_featured, display_order,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&slug)
        .bind(&new.tagline)
        .bind(&new.description)
        .bind(&new.thumbnail)
        .bind(Json(&new.screenshots))
        .bind(&new.live_url)
        .bind(&new.github_url)
        .bind(Json(&new.tech_stack))
        .bind(Json(&new.features))
        .bind(&new.category)
        .bind(new.is_featured)
        .bind(new.display_order)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Upsert keyed by slug (seed routine). On conflict everything except
    /// the slug and created_at is replaced and updated_at is refreshed.
    pub async fn upsert_by_slug(
        pool: &SqlitePool,
        slug: &str,
        new: &NewProject,
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO projects
                (title, slug, tagline, description, thumbnail, screenshots, live_url,
                 github_url, tech_stack, features, category, is_featured, display_order,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT(slug) DO UPDATE SET
                title = excluded.title,
                tagline = excluded.tagline,
                description = excluded.description,
                thumbnail = excluded.thumbnail,
                screenshots = excluded.screenshots,
                live_url = excluded.live_url,
                github_url = excluded.github_url,
                tech_stack = excluded.tech_stack,
                features = excluded.features,
                category = excluded.category,
                is_featured = excluded.is_featured,
                display_order = excluded.display_order,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&new.title)
        .bind(slug)
        .bind(&new.tagline)
        .bind(&new.description)
        .bind(&new.thumbnail)
        .bind(Json(&new.screenshots))
        .bind(&new.live_url)
        .bind(&new.github_url)
        .bind(Json(&new.tech_stack))
        .bind(Json(&new.features))
        .bind(&new.category)
        .bind(new.is_featured)
        .bind(new.display_order)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// ContactInquiry
// ============================================================================

/// A contact form submission. No relation to Project or Skill.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: i64,
    pub inquiry_type: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub budget: String,
    pub timeline: String,
    pub project_description: String,
    pub created_at: chrono::DateTime<Utc>,
    pub is_read: bool,
}

/// A validated inquiry ready for insertion. The inquiry_type is stamped by
/// the form that produced it, never taken from client input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactInquiry {
    pub inquiry_type: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub budget: String,
    pub timeline: String,
    pub project_description: String,
}

impl ContactInquiry {
    pub async fn insert(
        pool: &SqlitePool,
        new: &NewContactInquiry,
    ) -> Result<ContactInquiry, sqlx::Error> {
        sqlx::query_as::<_, ContactInquiry>(
            r#"
            INSERT INTO contact_inquiries
                (inquiry_type, name, email, message, budget, timeline,
                 project_description, created_at, is_read)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE)
            RETURNING *
            "#,
        )
        .bind(&new.inquiry_type)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.message)
        .bind(&new.budget)
        .bind(&new.timeline)
        .bind(&new.project_description)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ContactInquiry>, sqlx::Error> {
        sqlx::query_as::<_, ContactInquiry>(
            "SELECT * FROM contact_inquiries ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn set_read(
        pool: &SqlitePool,
        id: i64,
        is_read: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE contact_inquiries SET is_read = $1 WHERE id = $2")
            .bind(is_read)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_inquiries")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
