//! Core data layer for StaffDesk employee records.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod report;
pub mod service;
pub mod store;

pub use auth::{is_authenticated, login, logout, AuthError, AuthResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{
    Employee, EmployeeDraft, Gender, EMPLOYEES_KEY, INDIAN_STATES, IS_AUTHENTICATED_KEY,
    MAX_IMAGE_SIZE, MIN_AGE,
};
pub use model::validation::{check_image_upload, validate_draft, FormErrors};
pub use query::pipeline::{
    apply_filters, run_query, stats, EmployeeQuery, EmployeeStats, GenderFilter, PageView,
    StatusFilter, DEFAULT_PAGE_SIZE,
};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, StoreEmployeeRepository,
};
pub use report::{render_employee_list, ReportFilters};
pub use service::employee_service::{DashboardView, EmployeeService};
pub use store::{MemoryStore, SqliteStore, StoreAdapter, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
