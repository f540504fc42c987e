//! Bootstrap dataset persisted on first load of an empty store.

use crate::model::employee::{Employee, Gender};
use chrono::NaiveDate;

// 1x1 transparent PNG; keeps seeded records within the real record shape
// without carrying binary fixtures.
const SEED_AVATAR: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Returns the fixed dataset seeded into an empty store.
///
/// Order is significant: `load()` must hand these back exactly as listed.
pub fn bootstrap_employees() -> Vec<Employee> {
    [
        ("EMP304211", "Ananya Sharma", Gender::Female, (1992, 3, 18), "Karnataka", true),
        ("EMP304587", "Rohan Mehta", Gender::Male, (1988, 11, 2), "Maharashtra", true),
        ("EMP305102", "Priya Nair", Gender::Female, (1995, 7, 23), "Kerala", true),
        ("EMP305778", "Arjun Reddy", Gender::Male, (1990, 1, 9), "Telangana", false),
        ("EMP306340", "Ishita Banerjee", Gender::Female, (1998, 9, 30), "West Bengal", true),
        ("EMP306915", "Karan Singh", Gender::Male, (1985, 5, 6), "Punjab", false),
    ]
    .into_iter()
    .map(|(id, full_name, gender, (year, month, day), state, is_active)| Employee {
        id: id.to_string(),
        profile_image: SEED_AVATAR.to_string(),
        full_name: full_name.to_string(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
        state: state.to_string(),
        is_active,
    })
    .collect()
}
