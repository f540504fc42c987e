//! SQLite-backed store adapter.
//!
//! # Responsibility
//! - Persist key-value entries in the `kv_store` table.
//! - Reject connections that were not bootstrapped through `db::open_db`.
//!
//! # Invariants
//! - Each `set` fully replaces the previous value under the key.

use super::{StoreAdapter, StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Durable adapter over a migrated SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wraps a migrated connection after verifying the `kv_store` table.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        let table_count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store';",
            [],
            |row| row.get(0),
        )?;
        if table_count == 0 {
            return Err(StoreError::MissingRequiredTable("kv_store"));
        }
        Ok(Self { conn })
    }

    /// Releases the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

impl StoreAdapter for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
