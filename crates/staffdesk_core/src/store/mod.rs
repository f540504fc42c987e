//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the synchronous string key-value contract the data layer
//!   persists through.
//! - Provide an in-process implementation and a SQLite-backed one.
//!
//! # Invariants
//! - The adapter is passed explicitly to its consumers, never reached as
//!   an ambient global.
//! - No locking: two adapters over the same durable store can race and
//!   silently last-write-win. Accepted single-user limitation.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence adapter failure, surfaced to callers as a generic failure
/// so the UI can offer a retry.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "store connection is missing required table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string key-value storage contract.
pub trait StoreAdapter {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Absent keys are a no-op.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
