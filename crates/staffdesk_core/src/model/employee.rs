//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and the draft (candidate) shape.
//! - Carry the fixed vocabulary: gender values, state list, storage keys.
//!
//! # Invariants
//! - `id` is immutable after creation and never reused after deletion.
//! - The persisted JSON field names match the external schema exactly
//!   (`fullName`, `dateOfBirth`, `isActive`, `profileImage`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store key holding the serialized employee collection.
pub const EMPLOYEES_KEY: &str = "employees";

/// Store key holding the login-gate flag (`"true"` when logged in).
pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";

/// Minimum accepted age in whole years.
pub const MIN_AGE: i32 = 18;

/// Upper bound for profile image uploads, in bytes (5 MB).
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// The 28 Indian states and union territories accepted for `state`.
pub const INDIAN_STATES: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// Gender vocabulary, serialized as the external literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// External display/serialization label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Canonical employee record.
///
/// The collection is an ordered sequence: creation appends, deletion
/// removes without reordering the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable id, `EMP` followed by six digits derived from creation time.
    pub id: String,
    /// Data-URI encoded avatar, size-bounded at the upload boundary.
    pub profile_image: String,
    pub full_name: String,
    pub gender: Gender,
    /// Calendar date, serialized `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
    /// One of [`INDIAN_STATES`].
    pub state: String,
    pub is_active: bool,
}

/// Candidate employee payload: every field except the id, which is
/// assigned by the repository on acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub full_name: String,
    pub gender: Gender,
    /// `None` models a form submitted without a date.
    pub date_of_birth: Option<NaiveDate>,
    pub state: String,
    pub is_active: bool,
    pub profile_image: String,
}

impl EmployeeDraft {
    /// Draft pre-filled the way a fresh form is: active, male, empty rest.
    pub fn empty() -> Self {
        Self {
            full_name: String::new(),
            gender: Gender::Male,
            date_of_birth: None,
            state: String::new(),
            is_active: true,
            profile_image: String::new(),
        }
    }

    /// Copies an existing record back into editable draft form.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            full_name: employee.full_name.clone(),
            gender: employee.gender,
            date_of_birth: Some(employee.date_of_birth),
            state: employee.state.clone(),
            is_active: employee.is_active,
            profile_image: employee.profile_image.clone(),
        }
    }
}

/// Returns whether `state` is one of the accepted region names.
pub fn is_known_state(state: &str) -> bool {
    INDIAN_STATES.contains(&state)
}
