//! Employee repository contract and store-backed implementation.
//!
//! # Responsibility
//! - Own the canonical employee collection under the `employees` key.
//! - Keep the persisted representation identical to the in-memory one
//!   after every mutating operation (write-through, full overwrite).
//!
//! # Invariants
//! - Candidates are validated before anything is persisted.
//! - Assigned ids are unique against the current collection.
//! - Insertion order is preserved; deletion never reorders the remainder.

use crate::model::employee::{Employee, EmployeeDraft, EMPLOYEES_KEY};
use crate::model::validation::{accept_draft, FormErrors};
use crate::repo::seed::bootstrap_employees;
use crate::store::{StoreAdapter, StoreError};
use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    /// Candidate failed form validation; field messages go back to the
    /// form layer, never surfaced as a generic failure.
    Validation(FormErrors),
    /// Operation referenced a nonexistent employee id.
    NotFound(String),
    /// Persistence adapter failed to read or write.
    Store(StoreError),
    /// Persisted collection cannot be decoded.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "invalid employee candidate: {errors}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Validation(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for employee CRUD operations.
///
/// Synchronous today; the contract is deliberately small enough that a
/// network-backed implementation is a legitimate substitution, so callers
/// must not assume completion before a result is observed.
pub trait EmployeeRepository {
    /// Reads the collection, seeding the bootstrap dataset into an empty
    /// store first. Idempotent absent interleaved mutation.
    fn load(&mut self) -> RepoResult<Vec<Employee>>;
    /// Reads the collection without seeding. Absent key reads as empty.
    fn list(&self) -> RepoResult<Vec<Employee>>;
    /// Validates, assigns a fresh unique id, appends and persists.
    fn create(&mut self, draft: &EmployeeDraft) -> RepoResult<Employee>;
    /// Validates and replaces every field except `id`.
    fn update(&mut self, id: &str, draft: &EmployeeDraft) -> RepoResult<Employee>;
    /// Removes the matching record. Absent ids are a no-op, not an error.
    fn delete(&mut self, id: &str) -> RepoResult<()>;
    /// Replaces only the `isActive` flag.
    fn set_active(&mut self, id: &str, active: bool) -> RepoResult<Employee>;
}

/// Store-backed employee repository.
pub struct StoreEmployeeRepository<S: StoreAdapter> {
    store: S,
}

impl<S: StoreAdapter> StoreEmployeeRepository<S> {
    /// Creates a repository over the injected store adapter.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Releases the underlying store adapter.
    pub fn into_store(self) -> S {
        self.store
    }

    fn read_collection(&self) -> RepoResult<Option<Vec<Employee>>> {
        match self.store.get(EMPLOYEES_KEY)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|err| {
                RepoError::InvalidData(format!("employee collection is not valid JSON: {err}"))
            }),
        }
    }

    fn write_collection(&mut self, employees: &[Employee]) -> RepoResult<()> {
        let raw = serde_json::to_string(employees)
            .map_err(|err| RepoError::InvalidData(format!("cannot encode collection: {err}")))?;
        self.store.set(EMPLOYEES_KEY, &raw)?;
        Ok(())
    }

    fn accept(&self, id: String, draft: &EmployeeDraft, today: NaiveDate) -> RepoResult<Employee> {
        accept_draft(id, draft, today).map_err(|errors| {
            warn!(
                "event=employee_validate module=repo status=rejected fields={}",
                errors
                    .entries()
                    .iter()
                    .map(|(field, _)| *field)
                    .collect::<Vec<_>>()
                    .join(",")
            );
            RepoError::Validation(errors)
        })
    }
}

impl<S: StoreAdapter> EmployeeRepository for StoreEmployeeRepository<S> {
    fn load(&mut self) -> RepoResult<Vec<Employee>> {
        if let Some(employees) = self.read_collection()? {
            return Ok(employees);
        }

        let seeded = bootstrap_employees();
        self.write_collection(&seeded)?;
        info!(
            "event=employee_seed module=repo status=ok count={}",
            seeded.len()
        );
        Ok(seeded)
    }

    fn list(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.read_collection()?.unwrap_or_default())
    }

    fn create(&mut self, draft: &EmployeeDraft) -> RepoResult<Employee> {
        let mut employees = self.list()?;
        let id = next_employee_id(&employees, Utc::now().timestamp_millis());
        let employee = self.accept(id, draft, Local::now().date_naive())?;

        employees.push(employee.clone());
        self.write_collection(&employees)?;
        info!(
            "event=employee_create module=repo status=ok id={} total={}",
            employee.id,
            employees.len()
        );
        Ok(employee)
    }

    fn update(&mut self, id: &str, draft: &EmployeeDraft) -> RepoResult<Employee> {
        let mut employees = self.list()?;
        let position = employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        let employee = self.accept(id.to_string(), draft, Local::now().date_naive())?;
        employees[position] = employee.clone();
        self.write_collection(&employees)?;
        info!("event=employee_update module=repo status=ok id={id}");
        Ok(employee)
    }

    fn delete(&mut self, id: &str) -> RepoResult<()> {
        let mut employees = self.list()?;
        let before = employees.len();
        employees.retain(|employee| employee.id != id);
        let removed = before != employees.len();

        self.write_collection(&employees)?;
        info!("event=employee_delete module=repo status=ok id={id} removed={removed}");
        Ok(())
    }

    fn set_active(&mut self, id: &str, active: bool) -> RepoResult<Employee> {
        let mut employees = self.list()?;
        let employee = employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        employee.is_active = active;
        let updated = employee.clone();
        self.write_collection(&employees)?;
        info!("event=employee_set_active module=repo status=ok id={id} active={active}");
        Ok(updated)
    }
}

/// Derives a fresh id from the creation-time epoch milliseconds: `EMP`
/// plus the last six digits, advanced past any id already taken.
///
/// The collection is orders of magnitude smaller than the million-wide
/// suffix space, so the advance terminates.
fn next_employee_id(employees: &[Employee], epoch_ms: i64) -> String {
    let mut suffix = epoch_ms.rem_euclid(1_000_000);
    loop {
        let candidate = format!("EMP{suffix:06}");
        if !employees.iter().any(|employee| employee.id == candidate) {
            return candidate;
        }
        suffix = (suffix + 1) % 1_000_000;
    }
}
