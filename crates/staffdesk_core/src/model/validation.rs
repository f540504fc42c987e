//! Form validation for employee candidates.
//!
//! # Responsibility
//! - Evaluate every rule in one pass and collect per-field messages.
//! - Pre-check image uploads (size, declared type) before a draft exists.
//! - Materialize an accepted draft into a canonical record.
//!
//! # Invariants
//! - Rules never short-circuit; all applicable errors are reported together.
//! - The age rule subtracts years only. A full date comparison would move
//!   the boundary near birthdays; callers rely on the year-based behavior.

use crate::model::employee::{Employee, EmployeeDraft, MAX_IMAGE_SIZE, MIN_AGE};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_CONTENT_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^image/[a-z0-9.+-]+$").expect("valid image content-type regex"));

/// Per-field validation messages. An empty set means the draft is valid.
///
/// Field slots mirror the form: `gender` is a closed enum and therefore
/// has no slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub state: Option<String>,
    pub profile_image: Option<String>,
}

impl FormErrors {
    /// Returns whether no rule produced a message.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.date_of_birth.is_none()
            && self.state.is_none()
            && self.profile_image.is_none()
    }

    /// (field name, message) pairs for display or logging.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::new();
        if let Some(message) = self.full_name.as_deref() {
            entries.push(("fullName", message));
        }
        if let Some(message) = self.date_of_birth.as_deref() {
            entries.push(("dateOfBirth", message));
        }
        if let Some(message) = self.state.as_deref() {
            entries.push(("state", message));
        }
        if let Some(message) = self.profile_image.as_deref() {
            entries.push(("profileImage", message));
        }
        entries
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .entries()
            .into_iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{rendered}")
    }
}

/// Validates a draft against every form rule.
///
/// `today` is the evaluation date; passing it explicitly keeps the age and
/// future-date rules deterministic under test.
pub fn validate_draft(draft: &EmployeeDraft, today: NaiveDate) -> FormErrors {
    let mut errors = FormErrors::default();

    let trimmed_name = draft.full_name.trim();
    if trimmed_name.is_empty() {
        errors.full_name = Some("Full Name is required".to_string());
    } else if trimmed_name.chars().count() < 3 {
        errors.full_name = Some("Full Name must be at least 3 characters".to_string());
    }

    match draft.date_of_birth {
        None => {
            errors.date_of_birth = Some("Date of Birth is required".to_string());
        }
        Some(dob) => {
            // Year subtraction only; day and month are not considered.
            let age = today.year() - dob.year();
            if age < MIN_AGE {
                errors.date_of_birth =
                    Some(format!("Employee must be at least {MIN_AGE} years old"));
            }
            // A future date overwrites the age message, same field.
            if dob > today {
                errors.date_of_birth =
                    Some("Date of Birth cannot be in the future".to_string());
            }
        }
    }

    if draft.state.trim().is_empty() {
        errors.state = Some("State is required".to_string());
    }

    if draft.profile_image.is_empty() {
        errors.profile_image = Some("Profile Image is required".to_string());
    }

    errors
}

/// Pre-check for a picked image file, before it is encoded into a draft.
///
/// Returns the `profileImage` field message on rejection.
pub fn check_image_upload(size_bytes: u64, content_type: &str) -> Result<(), String> {
    if size_bytes > MAX_IMAGE_SIZE {
        return Err("Image size must be less than 5MB".to_string());
    }
    if !IMAGE_CONTENT_TYPE_RE.is_match(content_type) {
        return Err("Please select a valid image file".to_string());
    }
    Ok(())
}

/// Runs validation and, on success, materializes the draft under `id`.
///
/// The trimmed name is what gets stored, matching form submission.
pub fn accept_draft(
    id: String,
    draft: &EmployeeDraft,
    today: NaiveDate,
) -> Result<Employee, FormErrors> {
    let errors = validate_draft(draft, today);
    match draft.date_of_birth {
        Some(date_of_birth) if errors.is_empty() => Ok(Employee {
            id,
            profile_image: draft.profile_image.clone(),
            full_name: draft.full_name.trim().to_string(),
            gender: draft.gender,
            date_of_birth,
            state: draft.state.clone(),
            is_active: draft.is_active,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::{check_image_upload, validate_draft};
    use crate::model::employee::{EmployeeDraft, Gender};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            full_name: "Asha Rao".to_string(),
            gender: Gender::Female,
            date_of_birth: Some(date(1990, 5, 14)),
            state: "Goa".to_string(),
            is_active: true,
            profile_image: "data:image/png;base64,QQ==".to_string(),
        }
    }

    #[test]
    fn valid_draft_produces_no_errors() {
        let errors = validate_draft(&valid_draft(), date(2024, 6, 1));
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn all_rules_are_collected_in_one_pass() {
        let errors = validate_draft(&EmployeeDraft::empty(), date(2024, 6, 1));
        assert_eq!(errors.entries().len(), 4);
    }

    #[test]
    fn upload_precheck_rejects_oversize_and_non_image() {
        assert!(check_image_upload(1024, "image/png").is_ok());
        assert_eq!(
            check_image_upload(6 * 1024 * 1024, "image/png").unwrap_err(),
            "Image size must be less than 5MB"
        );
        assert_eq!(
            check_image_upload(1024, "application/pdf").unwrap_err(),
            "Please select a valid image file"
        );
    }
}
