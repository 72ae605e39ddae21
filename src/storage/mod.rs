//! Storage Module
//!
//! This module owns all contact with the backing SQLite store.
//! The gateway never touches SQL driver types directly; it goes
//! through [`Database`], which scopes every statement to its own
//! short-lived connection.
//!
//! ## Unit of Work
//!
//! ```text
//! request ──> Database::run_mutation / run_query
//!                  │
//!                  ▼
//!          ┌────────────────────┐
//!          │ Connection::open   │   one connection
//!          │ execute / query    │   per request,
//!          │ drop (autocommit)  │   never shared
//!          └────────────────────┘
//! ```
//!
//! No connection is held across requests and no state is cached, so a
//! mutation on one TCP connection is immediately visible to a query on
//! the next. Serialization of concurrent writers is SQLite's file
//! locking, not in-process locks.

pub mod database;
pub mod schema;

// Re-export commonly used types
pub use database::{Database, StorageError};
pub use schema::SCHEMA_SQL;
