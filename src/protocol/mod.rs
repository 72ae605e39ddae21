//! Wire Protocol Implementation
//!
//! This module implements SQLGate's framing layer: how a raw TCP byte
//! stream is demarcated into discrete request frames, and how replies
//! are serialized for transmission.
//!
//! ## Frame Format
//!
//! The protocol is deliberately minimal, one exchange per connection:
//!
//! ```text
//! Request:   <UTF-8 statement bytes> 0x00
//! Response:  <UTF-8 body bytes> '\n'
//! ```
//!
//! There is no length prefix, no header section, no versioning, and no
//! multiplexing. The request terminator is a single null byte; the
//! response terminator is a single line feed. After the response is
//! written the server closes the connection.
//!
//! ## Modules
//!
//! - `framer`: Extracts one null-terminated request from a read buffer
//! - `types`: Defines the `Reply` type and its serialization
//!
//! ## Example
//!
//! ```
//! use sqlgate::protocol::{extract_request, Reply};
//!
//! // Framing incoming data
//! let data = b"SELECT COUNT(*) FROM users\x00";
//! let (request, consumed) = extract_request(data).unwrap();
//! assert_eq!(request, "SELECT COUNT(*) FROM users");
//! assert_eq!(consumed, data.len());
//!
//! // Serializing a reply
//! let reply = Reply::done();
//! assert_eq!(reply.serialize(), b"done\n");
//! ```

pub mod framer;
pub mod types;

// Re-export commonly used items for convenience
pub use framer::extract_request;
pub use types::{Reply, DELIMITER, ERROR_PREFIX, RESPONSE_TERMINATOR};
