//! Request Framing
//!
//! A request frame is everything up to the first null byte. The framer
//! works incrementally over a caller-owned buffer:
//!
//! 1. Append incoming network data to the buffer
//! 2. Call [`extract_request`] to look for a complete frame
//! 3. If `Some`, advance the buffer by `consumed` bytes and dispatch
//! 4. If `None`, wait for more data
//!
//! There is no error case: the payload is decoded with
//! [`String::from_utf8_lossy`], so malformed UTF-8 is replaced rather
//! than rejected. A connection that closes before a delimiter arrives
//! is simply "no request"; that signal comes from the read side, not
//! from here.

use crate::protocol::types::DELIMITER;

/// Attempts to extract one request frame from the buffer.
///
/// Returns the decoded request text and the number of bytes consumed
/// (payload plus the delimiter byte), or `None` if no delimiter has
/// arrived yet.
///
/// Invalid UTF-8 sequences in the payload are replaced with U+FFFD.
///
/// # Example
///
/// ```
/// use sqlgate::protocol::extract_request;
///
/// assert_eq!(extract_request(b"abc"), None);
/// assert_eq!(
///     extract_request(b"abc\x00tail"),
///     Some(("abc".to_string(), 4)),
/// );
/// ```
pub fn extract_request(buf: &[u8]) -> Option<(String, usize)> {
    let pos = buf.iter().position(|&b| b == DELIMITER)?;
    let request = String::from_utf8_lossy(&buf[..pos]).into_owned();
    Some((request, pos + 1))
}
