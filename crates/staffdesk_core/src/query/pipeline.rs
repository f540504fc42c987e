//! Filter, search and pagination pipeline.
//!
//! # Responsibility
//! - Derive a visible page from the full collection as a pure function.
//! - Report total page count and the clamped page actually shown.
//!
//! # Invariants
//! - Stages intersect: search, then gender, then status, then pagination.
//! - The returned page never points past the end of the filtered set.

use crate::model::employee::{Employee, Gender};

/// Page size used by the dashboard table.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Gender stage: exact match or pass-through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenderFilter {
    #[default]
    All,
    Only(Gender),
}

/// Status stage: `isActive` equality or pass-through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn accepts(self, is_active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => is_active,
            Self::Inactive => !is_active,
        }
    }
}

/// Query options for deriving a dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQuery {
    /// Case-insensitive substring matched against name or id. Empty
    /// matches all.
    pub search_term: String,
    pub gender: GenderFilter,
    pub status: StatusFilter,
    /// 1-based requested page. Clamped into the valid range.
    pub page: usize,
    pub page_size: usize,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            gender: GenderFilter::default(),
            status: StatusFilter::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EmployeeQuery {
    /// Returns the query with a new search term and the page reset to 1.
    ///
    /// Any filter change restarts from the first page; the same applies
    /// to [`with_gender`](Self::with_gender) and
    /// [`with_status`](Self::with_status).
    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self.page = 1;
        self
    }

    pub fn with_gender(mut self, gender: GenderFilter) -> Self {
        self.gender = gender;
        self.page = 1;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self.page = 1;
        self
    }
}

/// One derived page plus the pagination facts the table needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub employees: Vec<Employee>,
    /// The page actually shown after clamping.
    pub page: usize,
    /// `ceil(filtered_count / page_size)`.
    pub total_pages: usize,
    pub filtered_count: usize,
}

/// Dashboard summary counters over the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    employee.full_name.to_lowercase().contains(needle)
        || employee.id.to_lowercase().contains(needle)
}

/// Applies the search and filter stages, preserving collection order.
///
/// This is the unpaginated set consumed by the printable report.
pub fn apply_filters(employees: &[Employee], query: &EmployeeQuery) -> Vec<Employee> {
    let needle = query.search_term.to_lowercase();
    employees
        .iter()
        .filter(|employee| matches_search(employee, &needle))
        .filter(|employee| match query.gender {
            GenderFilter::All => true,
            GenderFilter::Only(gender) => employee.gender == gender,
        })
        .filter(|employee| query.status.accepts(employee.is_active))
        .cloned()
        .collect()
}

/// Runs the full pipeline and slices out the requested page.
pub fn run_query(employees: &[Employee], query: &EmployeeQuery) -> PageView {
    let filtered = apply_filters(employees, query);
    let filtered_count = filtered.len();

    let page_size = query.page_size.max(1);
    let total_pages = filtered_count.div_ceil(page_size);
    let page = query.page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let employees = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    PageView {
        employees,
        page,
        total_pages,
        filtered_count,
    }
}

/// Counts total/active/inactive records for the dashboard summary cards.
pub fn stats(employees: &[Employee]) -> EmployeeStats {
    let active = employees.iter().filter(|employee| employee.is_active).count();
    EmployeeStats {
        total: employees.len(),
        active,
        inactive: employees.len() - active,
    }
}
