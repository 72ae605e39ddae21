//! # SQLGate - A Minimal SQL-over-TCP Gateway
//!
//! SQLGate is a network-accessible command executor written in Rust.
//! It accepts TCP connections, reads one null-terminated UTF-8 frame
//! per request, classifies it as a query or a mutation, executes it
//! against a persistent SQLite store, and answers with one
//! newline-terminated text frame before closing the connection.
//!
//! It exists to let a remote client manipulate a small fixed schema
//! (users, login sessions, uploaded-file records) without implementing
//! its own database client.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           SQLGate                              │
//! │                                                                │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐         │
//! │  │ TCP Server  │───>│ Connection  │───>│   Store     │         │
//! │  │ (Listener)  │    │  Handler    │    │  Gateway    │         │
//! │  └─────────────┘    └─────────────┘    └──────┬──────┘         │
//! │                                               │                │
//! │  ┌─────────────┐                              ▼                │
//! │  │   Framer    │    ┌──────────────────────────────────────┐   │
//! │  │ (0x00 scan) │    │              Database                │   │
//! │  │             │    │   one SQLite connection per request  │   │
//! │  └─────────────┘    └──────────────────────────────────────┘   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Protocol
//!
//! One logical exchange per TCP connection:
//!
//! - Request: UTF-8 bytes terminated by a single `0x00` byte
//! - Response: UTF-8 bytes followed by a single `\n`
//! - The connection is closed immediately after the response
//!
//! A request whose trimmed, uppercased text starts with `SELECT` takes
//! the query path and returns formatted rows; everything else takes
//! the mutation path and returns `done`. Store failures come back as
//! `ERROR:` followed by the store's diagnostic.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sqlgate::connection::{handle_connection, ConnectionStats};
//! use sqlgate::gateway::StoreGateway;
//! use sqlgate::storage::Database;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() {
//!     let database = Database::new("sqlgate.db");
//!     database.ensure_schema().unwrap();
//!
//!     let gateway = StoreGateway::new(database);
//!     let stats = Arc::new(ConnectionStats::new());
//!
//!     let listener = TcpListener::bind("127.0.0.1:7778").await.unwrap();
//!
//!     loop {
//!         let (stream, addr) = listener.accept().await.unwrap();
//!         let gateway = gateway.clone();
//!         let stats = Arc::clone(&stats);
//!
//!         tokio::spawn(handle_connection(stream, addr, gateway, stats));
//!     }
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`protocol`]: Null-terminated framing and the reply wire type
//! - [`gateway`]: Request classification, dispatch, and row formatting
//! - [`storage`]: SQLite access with one connection per request
//! - [`connection`]: Per-connection lifecycle management
//!
//! ## Design Highlights
//!
//! ### One Exchange per Connection
//!
//! The handler reads exactly one frame, sends exactly one reply, and
//! closes. Bytes after the first delimiter are discarded; there is no
//! keep-alive or continuation signaling in the protocol.
//!
//! ### No In-Process Locks
//!
//! Each request opens a short-lived SQLite connection and relies on
//! the store's own locking to serialize concurrent writers. Handler
//! tasks share nothing but the database path and a stats counter.
//!
//! ### Explicit Failure Paths
//!
//! Framing yields `Option` (frame or not-yet), the gateway yields a
//! tagged `Reply` (body or error), and transport faults stop at the
//! connection boundary. A broken client never disturbs the listener.

pub mod connection;
pub mod gateway;
pub mod protocol;
pub mod storage;

// Re-export commonly used types for convenience
pub use connection::{handle_connection, ConnectionStats};
pub use gateway::{is_query, StoreGateway};
pub use protocol::{extract_request, Reply};
pub use storage::{Database, StorageError};

/// The default port SQLGate listens on
pub const DEFAULT_PORT: u16 = 7778;

/// The default host SQLGate binds to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The default SQLite database file
pub const DEFAULT_DB_PATH: &str = "sqlgate.db";

/// Version of SQLGate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
