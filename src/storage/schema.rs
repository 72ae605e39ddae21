//! Database schema definitions.
//!
//! SQL for the three record shapes the gateway serves. Creation is
//! idempotent (`IF NOT EXISTS`) so it runs unconditionally at startup.
//! The gateway itself never inspects these shapes: clients issue
//! arbitrary statements against them and schema enforcement is
//! SQLite's job.

/// SQL schema for initial database setup.
pub const SCHEMA_SQL: &str = r"
-- Account credentials keyed by a unique identifier
CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
);

-- Session records linking an identifier to login/logout timestamps
CREATE TABLE IF NOT EXISTS logins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    login_time DATETIME,
    logout_time DATETIME
);

-- Upload records linking an identifier to a filename and upload timestamp
CREATE TABLE IF NOT EXISTS files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    filename TEXT,
    upload_time DATETIME
);
";
