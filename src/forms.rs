//! Contact Forms
//! Two validators over the same inbound payload. They differ only in the
//! field subset they accept and in the inquiry_type they stamp at save time;
//! the stamp always overrides anything the client sent for that field.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::db::models::{is_valid_choice, NewContactInquiry, BUDGET_CHOICES, TIMELINE_CHOICES};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

const NAME_MAX_LEN: usize = 100;
const EMAIL_MAX_LEN: usize = 254;

/// Field-level validation errors, keyed by field name.
pub type FormErrors = BTreeMap<String, String>;

/// Raw contact submission as posted by the browser. Every field is optional
/// at the wire level; the validators decide what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub form_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub timeline: String,
}

fn require(errors: &mut FormErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.insert(field.to_string(), "This field is required.".to_string());
    }
}

fn validate_name_and_email(errors: &mut FormErrors, name: &str, email: &str) {
    require(errors, "name", name);
    if name.len() > NAME_MAX_LEN {
        errors.insert(
            "name".to_string(),
            format!("Ensure this value has at most {NAME_MAX_LEN} characters."),
        );
    }

    require(errors, "email", email);
    if !email.is_empty() {
        if email.len() > EMAIL_MAX_LEN {
            errors.insert(
                "email".to_string(),
                format!("Ensure this value has at most {EMAIL_MAX_LEN} characters."),
            );
        } else if !EMAIL_REGEX.is_match(email) {
            errors.insert(
                "email".to_string(),
                "Enter a valid email address.".to_string(),
            );
        }
    }
}

/// General contact form: name, email, message. Project-only fields are
/// dropped even when the client supplies them.
pub struct ContactForm;

impl ContactForm {
    pub fn validate(submission: &ContactSubmission) -> Result<NewContactInquiry, FormErrors> {
        let name = submission.name.trim();
        let email = submission.email.trim();
        let message = submission.message.trim();

        let mut errors = FormErrors::new();
        validate_name_and_email(&mut errors, name, email);
        require(&mut errors, "message", message);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewContactInquiry {
            inquiry_type: "general".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            budget: String::new(),
            timeline: String::new(),
            project_description: String::new(),
        })
    }
}

/// Project inquiry form: the general trio plus optional project description,
/// budget bucket, and timeline bucket. Budget and timeline are validated by
/// choice membership when non-blank; there is no cross-field rule, so a
/// budget without a timeline is fine.
pub struct ProjectInquiryForm;

impl ProjectInquiryForm {
    pub fn validate(submission: &ContactSubmission) -> Result<NewContactInquiry, FormErrors> {
        let name = submission.name.trim();
        let email = submission.email.trim();
        let message = submission.message.trim();
        let project_description = submission.project_description.trim();
        let budget = submission.budget.trim();
        let timeline = submission.timeline.trim();

        let mut errors = FormErrors::new();
        validate_name_and_email(&mut errors, name, email);
        require(&mut errors, "message", message);

        if !budget.is_empty() && !is_valid_choice(BUDGET_CHOICES, budget) {
            errors.insert(
                "budget".to_string(),
                format!("Select a valid choice. {budget} is not one of the available choices."),
            );
        }
        if !timeline.is_empty() && !is_valid_choice(TIMELINE_CHOICES, timeline) {
            errors.insert(
                "timeline".to_string(),
                format!("Select a valid choice. {timeline} is not one of the available choices."),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewContactInquiry {
            inquiry_type: "project".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            budget: budget.to_string(),
            timeline: timeline.to_string(),
            project_description: project_description.to_string(),
        })
    }
}
