//! SQLite database handle.
//!
//! [`Database`] is a cloneable handle around the database *path*, not
//! an open connection. Every operation opens its own
//! `rusqlite::Connection`, runs exactly one statement, and drops the
//! connection again. The unit of work matches the protocol's
//! one-request-per-connection shape, and concurrent handlers are
//! serialized by SQLite's own locking rather than anything in-process.

use crate::storage::schema::SCHEMA_SQL;
use rusqlite::types::Value;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while executing statements against the store.
///
/// The `Display` text of the underlying driver error is what gets sent
/// back to the client, so nothing is added or rephrased here.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Any failure reported by SQLite: bad syntax, constraint
    /// violation, locked or unreachable database.
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// A handle to the backing SQLite database.
///
/// Cheap to clone; each clone opens independent connections against
/// the same file.
///
/// # Example
///
/// ```no_run
/// use sqlgate::storage::Database;
///
/// let db = Database::new("sqlgate.db");
/// db.ensure_schema().unwrap();
/// db.run_mutation("INSERT INTO users VALUES ('a', 'b')").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// Path to the database file.
    path: PathBuf,
}

impl Database {
    /// Creates a handle for the database at `path`.
    ///
    /// The file is created lazily on the first connection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing tables if they do not exist yet.
    ///
    /// Idempotent; called once at startup before the first accept.
    pub fn ensure_schema(&self) -> Result<(), StorageError> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Executes a mutating statement verbatim and commits.
    ///
    /// The statement text is the client's own; it is not inspected,
    /// parameterized, or rewritten. Autocommit closes the unit of work
    /// when the connection drops.
    pub fn run_mutation(&self, sql: &str) -> Result<(), StorageError> {
        let conn = self.connect()?;
        conn.execute(sql, [])?;
        Ok(())
    }

    /// Executes a read statement verbatim and fetches all rows.
    ///
    /// Rows and columns keep the order the store returned them in.
    pub fn run_query(&self, sql: &str) -> Result<Vec<Vec<Value>>, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map([], |row| {
                let mut scalars = Vec::with_capacity(column_count);
                for i in 0..column_count {
                    scalars.push(row.get::<_, Value>(i)?);
                }
                Ok(scalars)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        Ok(Connection::open(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_database() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("test.db"));
        db.ensure_schema().unwrap();
        (dir, db)
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let (_dir, db) = temp_database();
        db.ensure_schema().unwrap();
        db.ensure_schema().unwrap();
    }

    #[test]
    fn test_mutation_then_query() {
        let (_dir, db) = temp_database();
        db.run_mutation("INSERT INTO users VALUES ('alice', 'secret')")
            .unwrap();

        let rows = db.run_query("SELECT username FROM users").unwrap();
        assert_eq!(rows, vec![vec![Value::Text("alice".to_string())]]);
    }

    #[test]
    fn test_mutation_visible_to_fresh_handle() {
        // A second handle over the same file sees committed writes
        let (_dir, db) = temp_database();
        db.run_mutation("INSERT INTO users VALUES ('bob', 'pw')")
            .unwrap();

        let other = Database::new(db.path());
        let rows = other.run_query("SELECT COUNT(*) FROM users").unwrap();
        assert_eq!(rows, vec![vec![Value::Integer(1)]]);
    }

    #[test]
    fn test_unique_violation_diagnostic() {
        let (_dir, db) = temp_database();
        db.run_mutation("INSERT INTO users VALUES ('carol', 'pw')")
            .unwrap();

        let err = db
            .run_mutation("INSERT INTO users VALUES ('carol', 'pw')")
            .unwrap_err();
        assert!(err.to_string().contains("UNIQUE"));
    }

    #[test]
    fn test_syntax_error_surfaces() {
        let (_dir, db) = temp_database();
        assert!(db.run_mutation("NOT EVEN SQL").is_err());
        assert!(db.run_query("SELECT FROM FROM").is_err());
    }

    #[test]
    fn test_query_preserves_column_order() {
        let (_dir, db) = temp_database();
        db.run_mutation(
            "INSERT INTO files (username, filename, upload_time) \
             VALUES ('alice', 'notes.txt', '2024-01-01')",
        )
        .unwrap();

        let rows = db
            .run_query("SELECT filename, username FROM files")
            .unwrap();
        assert_eq!(
            rows,
            vec![vec![
                Value::Text("notes.txt".to_string()),
                Value::Text("alice".to_string()),
            ]]
        );
    }

    #[test]
    fn test_null_scalar_comes_back_as_null() {
        let (_dir, db) = temp_database();
        db.run_mutation("INSERT INTO logins (username) VALUES ('dave')")
            .unwrap();

        let rows = db
            .run_query("SELECT login_time FROM logins WHERE username = 'dave'")
            .unwrap();
        assert_eq!(rows, vec![vec![Value::Null]]);
    }
}
