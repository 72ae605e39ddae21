//! Store Gateway
//!
//! Classifies one request as a query or a mutation and executes it
//! against the backing store.
//!
//! ## Classification
//!
//! The request kind is decided by a prefix test: trim, uppercase a
//! copy, check for the literal token `SELECT`. This is a documented
//! heuristic, not a parser: multi-statement strings, leading SQL
//! comments, and anything else that does not lexically start with
//! `SELECT` all take the mutation path. It lives in one function
//! ([`is_query`]) so a real parser could replace it without touching
//! the rest of the pipeline.
//!
//! ## Error Surfacing
//!
//! Every failure raised by the store (bad syntax, constraint
//! violation, unreachable database) is converted into an error reply
//! carrying the store's own diagnostic text verbatim. Nothing is
//! propagated further and nothing is retried.

use crate::gateway::format::format_rows;
use crate::protocol::Reply;
use crate::storage::Database;
use tracing::debug;

/// Returns true if the request should take the query path.
///
/// # Example
///
/// ```
/// use sqlgate::gateway::is_query;
///
/// assert!(is_query("SELECT * FROM users"));
/// assert!(is_query("  select count(*) from files"));
/// assert!(!is_query("INSERT INTO users VALUES ('a', 'b')"));
/// ```
pub fn is_query(request: &str) -> bool {
    request
        .trim()
        .to_uppercase()
        .starts_with("SELECT")
}

/// Executes requests against the store and shapes replies.
///
/// One gateway is cloned per connection; cloning just copies the
/// database path handle. The blocking SQLite work runs on the
/// runtime's blocking pool so connection tasks stay responsive.
#[derive(Debug, Clone)]
pub struct StoreGateway {
    /// The backing database handle
    database: Database,
}

impl StoreGateway {
    /// Creates a new gateway over the given database handle.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Executes a single request and returns the reply to send.
    ///
    /// Query path: fetch all rows, format them. Mutation path: run the
    /// statement, acknowledge with `done`. Either way a store failure
    /// becomes an error reply, never an `Err`.
    pub async fn execute(&self, request: String) -> Reply {
        let database = self.database.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            if is_query(&request) {
                debug!(len = request.len(), "dispatching query");
                database
                    .run_query(&request)
                    .map(|rows| Reply::body(format_rows(&rows)))
            } else {
                debug!(len = request.len(), "dispatching mutation");
                database.run_mutation(&request).map(|()| Reply::done())
            }
        })
        .await;

        match outcome {
            Ok(Ok(reply)) => reply,
            Ok(Err(storage_err)) => Reply::error(storage_err.to_string()),
            // The blocking task itself died; surface it like any other
            // store failure so the client still gets a response.
            Err(join_err) => Reply::error(join_err.to_string()),
        }
    }
}
