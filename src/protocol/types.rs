//! Wire Protocol Types
//!
//! This module defines the types that cross the wire boundary.
//!
//! ## Response Format
//!
//! Every response is a single UTF-8 text body followed by one `\n`:
//!
//! - Mutation success: `done\n`
//! - Query result: the formatted row text, e.g. `alice, notes.txt\n`
//! - Error: `ERROR:` followed by the store's diagnostic, e.g.
//!   `ERROR:UNIQUE constraint failed: users.username\n`
//!
//! An empty query result serializes to a bare `\n`.

use std::fmt;

/// The byte that terminates a request frame.
pub const DELIMITER: u8 = 0x00;

/// The byte that terminates a response frame.
pub const RESPONSE_TERMINATOR: u8 = b'\n';

/// Prefix marking an error reply on the wire.
pub const ERROR_PREFIX: &str = "ERROR:";

/// Acknowledgment body sent for a successful mutation.
pub const MUTATION_ACK: &str = "done";

/// A reply to a single request frame.
///
/// This is what the gateway produces and the connection handler sends.
/// Both variants serialize to one newline-terminated text frame; the
/// only wire-level difference is the `ERROR:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A successful result: the mutation acknowledgment or a formatted
    /// query result (possibly empty).
    Body(String),

    /// A failed request: carries the store's diagnostic text verbatim.
    Error(String),
}

impl Reply {
    /// Creates the acknowledgment reply for a successful mutation.
    pub fn done() -> Self {
        Reply::Body(MUTATION_ACK.to_string())
    }

    /// Creates a success reply with the given body.
    pub fn body(s: impl Into<String>) -> Self {
        Reply::Body(s.into())
    }

    /// Creates an error reply carrying a diagnostic message.
    pub fn error(s: impl Into<String>) -> Self {
        Reply::Error(s.into())
    }

    /// Returns true if this reply is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Serializes the reply to bytes for sending over the wire.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.serialize_into(&mut buf);
        buf
    }

    /// Serializes the reply into an existing buffer.
    ///
    /// This is more efficient than `serialize()` when you want to reuse
    /// a buffer.
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        match self {
            Reply::Body(body) => {
                buf.extend_from_slice(body.as_bytes());
            }
            Reply::Error(diagnostic) => {
                buf.extend_from_slice(ERROR_PREFIX.as_bytes());
                buf.extend_from_slice(diagnostic.as_bytes());
            }
        }
        buf.push(RESPONSE_TERMINATOR);
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Body(body) => write!(f, "{}", body),
            Reply::Error(diagnostic) => write!(f, "{}{}", ERROR_PREFIX, diagnostic),
        }
    }
}
