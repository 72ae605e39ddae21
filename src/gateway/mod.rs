//! Store Gateway Module
//!
//! This module implements the request-dispatch layer for SQLGate.
//! It receives one framed request, decides whether it reads or writes,
//! executes it against the storage layer, and shapes the result into
//! a wire reply.
//!
//! ## Architecture
//!
//! ```text
//! Request text
//!       │
//!       ▼
//! ┌─────────────────┐
//! │  StoreGateway   │  (this module)
//! │                 │
//! │  - Classify     │   is_query: SELECT prefix heuristic
//! │  - Execute      │   query path / mutation path
//! │  - Format       │   rows -> canonical text
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Database     │  (storage module)
//! └─────────────────┘
//! ```
//!
//! Store failures never escape this layer: every error becomes an
//! `ERROR:`-prefixed reply for the client that caused it.

pub mod format;
pub mod handler;

// Re-export the main gateway types
pub use format::format_rows;
pub use handler::{is_query, StoreGateway};
