//! Employee use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for dashboard, form and report flows.
//! - Delegate persistence to the repository; derive views through the
//!   pure query pipeline.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence
//!   contracts.
//! - Derived views are recomputed from a fresh load after every mutation;
//!   the service holds no collection cache.

use crate::model::employee::{Employee, EmployeeDraft};
use crate::query::pipeline::{
    apply_filters, run_query, stats, EmployeeQuery, EmployeeStats, GenderFilter, PageView,
    StatusFilter,
};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};
use crate::report::{render_employee_list, ReportFilters};
use chrono::Local;

/// Everything the dashboard renders in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub page: PageView,
    pub stats: EmployeeStats,
}

/// Use-case service wrapper over an employee repository.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Releases the wrapped repository.
    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Loads the collection (seeding an empty store) and derives the
    /// requested page plus summary counters.
    pub fn dashboard(&mut self, query: &EmployeeQuery) -> RepoResult<DashboardView> {
        let employees = self.repo.load()?;
        Ok(DashboardView {
            page: run_query(&employees, query),
            stats: stats(&employees),
        })
    }

    /// Renders the printable report over the unpaginated filtered set,
    /// echoing active filter labels the way the dashboard shows them.
    pub fn render_report(&mut self, query: &EmployeeQuery) -> RepoResult<String> {
        let employees = self.repo.load()?;
        let filtered = apply_filters(&employees, query);

        let filters = ReportFilters {
            gender: match query.gender {
                GenderFilter::All => None,
                GenderFilter::Only(gender) => Some(gender.label().to_string()),
            },
            status: match query.status {
                StatusFilter::All => None,
                StatusFilter::Active => Some("Active".to_string()),
                StatusFilter::Inactive => Some("Inactive".to_string()),
            },
        };

        Ok(render_employee_list(
            &filtered,
            &filters,
            Local::now().date_naive(),
        ))
    }

    /// Creates a new record through repository persistence.
    pub fn create(&mut self, draft: &EmployeeDraft) -> RepoResult<Employee> {
        self.repo.create(draft)
    }

    /// Replaces all fields except the id of an existing record.
    pub fn update(&mut self, id: &str, draft: &EmployeeDraft) -> RepoResult<Employee> {
        self.repo.update(id, draft)
    }

    /// Removes a record. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Toggles only the active flag of an existing record.
    pub fn set_active(&mut self, id: &str, active: bool) -> RepoResult<Employee> {
        self.repo.set_active(id, active)
    }
}
