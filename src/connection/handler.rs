//! Connection Handler
//!
//! Owns one accepted connection end-to-end. The lifecycle is fixed:
//!
//! ```text
//! 1. Client connects (TCP handshake)
//!        │
//!        ▼
//! 2. ConnectionHandler spawned
//!        │
//!        ▼
//! 3. Read bytes until the 0x00 delimiter arrives
//!        │
//!        ├── stream ends first ──> close, send nothing
//!        ▼
//! 4. Dispatch the request to the StoreGateway
//!        │
//!        ▼
//! 5. Send the newline-terminated reply
//!        │
//!        ▼
//! 6. Close
//! ```
//!
//! TCP is a stream protocol, so the delimiter may arrive split across
//! any number of reads; a `BytesMut` buffer accumulates data until a
//! full frame is present. Bytes that arrive after the first delimiter
//! are discarded when the connection closes; only one frame is ever
//! extracted.
//!
//! Transport faults (reset mid-read, failed write) are swallowed at
//! [`handle_connection`]: the only observable effect is the client not
//! receiving a reply. A single connection's failure never reaches the
//! accept loop.

use crate::gateway::StoreGateway;
use crate::protocol::{extract_request, Reply};
use bytes::BytesMut;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;
use tracing::{debug, info, trace, warn};

/// Initial buffer capacity
const INITIAL_BUFFER_SIZE: usize = 4096;

/// Statistics for connection handling
#[derive(Debug, Default)]
pub struct ConnectionStats {
    /// Total number of connections accepted
    pub connections_accepted: AtomicU64,
    /// Currently active connections
    pub active_connections: AtomicU64,
    /// Total requests dispatched to the store
    pub requests_processed: AtomicU64,
    /// Total bytes read
    pub bytes_read: AtomicU64,
    /// Total bytes written
    pub bytes_written: AtomicU64,
}

impl ConnectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection_opened(&self) {
        self.connections_accepted.fetch_add(1, Ordering::Relaxed);
        self.active_connections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn connection_closed(&self) {
        self.active_connections.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn request_processed(&self) {
        self.requests_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn bytes_read(&self, count: usize) {
        self.bytes_read.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn bytes_written(&self, count: usize) {
        self.bytes_written
            .fetch_add(count as u64, Ordering::Relaxed);
    }
}

/// How a connection's single exchange concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// A frame arrived, was dispatched, and a reply was sent.
    Responded,
    /// The stream ended before a delimiter arrived; nothing was sent.
    EndOfStream,
}

/// Errors that can occur while handling a connection.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// I/O error (network issue)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handles a single client connection.
///
/// This struct manages the read buffer, framing, dispatch, and reply
/// sending for one connected client.
pub struct ConnectionHandler {
    /// The TCP stream for this connection
    stream: BufWriter<TcpStream>,

    /// Client's address (for logging)
    addr: SocketAddr,

    /// Buffer for incoming data
    buffer: BytesMut,

    /// The store gateway (cloned per connection)
    gateway: StoreGateway,

    /// Connection statistics (shared)
    stats: Arc<ConnectionStats>,
}

impl ConnectionHandler {
    /// Creates a new connection handler.
    ///
    /// # Arguments
    ///
    /// * `stream` - The TCP stream for this connection
    /// * `addr` - The client's socket address
    /// * `gateway` - The gateway that executes requests
    /// * `stats` - Shared connection statistics
    pub fn new(
        stream: TcpStream,
        addr: SocketAddr,
        gateway: StoreGateway,
        stats: Arc<ConnectionStats>,
    ) -> Self {
        stats.connection_opened();

        Self {
            stream: BufWriter::new(stream),
            addr,
            buffer: BytesMut::with_capacity(INITIAL_BUFFER_SIZE),
            gateway,
            stats,
        }
    }

    /// Runs the connection to completion: at most one exchange, then
    /// the stream drops and the socket closes.
    pub async fn run(mut self) -> Result<(), ConnectionError> {
        info!(client = %self.addr, "client connected");

        let result = self.serve_once().await;

        match &result {
            Ok(Exchange::Responded) => {
                debug!(client = %self.addr, "exchange complete, closing")
            }
            Ok(Exchange::EndOfStream) => {
                debug!(client = %self.addr, "stream ended before a frame, closing")
            }
            Err(e) => warn!(client = %self.addr, error = %e, "connection error"),
        }

        self.stats.connection_closed();
        result.map(|_| ())
    }

    /// Reads one frame, dispatches it, and sends the reply.
    async fn serve_once(&mut self) -> Result<Exchange, ConnectionError> {
        loop {
            if let Some((request, consumed)) = extract_request(&self.buffer) {
                // Anything buffered past the delimiter is dropped with
                // the connection; this protocol never reads a second
                // frame.
                let _ = self.buffer.split_to(consumed);
                trace!(
                    client = %self.addr,
                    consumed = consumed,
                    discarded = self.buffer.len(),
                    "extracted request frame"
                );

                let reply = self.gateway.execute(request).await;
                self.stats.request_processed();

                self.send_reply(&reply).await?;
                return Ok(Exchange::Responded);
            }

            // Need more data - read from the socket
            if self.read_more_data().await? == 0 {
                // Stream ended with no complete frame: nothing to do.
                // Partial bytes in the buffer are discarded unanswered.
                return Ok(Exchange::EndOfStream);
            }
        }
    }

    /// Reads more data from the socket into the buffer.
    ///
    /// Returns the number of bytes read; 0 means end of stream.
    async fn read_more_data(&mut self) -> Result<usize, ConnectionError> {
        // Requests are arbitrary length, so the buffer grows as needed
        if self.buffer.capacity() - self.buffer.len() < 1024 {
            self.buffer.reserve(4096);
        }

        let n = self.stream.get_mut().read_buf(&mut self.buffer).await?;

        self.stats.bytes_read(n);
        trace!(client = %self.addr, bytes = n, "read data");

        Ok(n)
    }

    /// Sends a reply to the client.
    ///
    /// The write is flushed before returning so the full frame is on
    /// the wire by the time the connection closes.
    async fn send_reply(&mut self, reply: &Reply) -> Result<(), ConnectionError> {
        let bytes = reply.serialize();
        self.stream.write_all(&bytes).await?;
        self.stream.flush().await?;
        self.stats.bytes_written(bytes.len());
        trace!(
            client = %self.addr,
            bytes = bytes.len(),
            error = reply.is_error(),
            "sent reply"
        );
        Ok(())
    }
}

/// Handles a client connection.
///
/// This is a convenience function that creates a ConnectionHandler and
/// runs it to completion. All transport errors stop here; the accept
/// loop never sees them.
///
/// # Arguments
///
/// * `stream` - The TCP stream for this connection
/// * `addr` - The client's socket address
/// * `gateway` - The gateway that executes requests
/// * `stats` - Shared connection statistics
pub async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    gateway: StoreGateway,
    stats: Arc<ConnectionStats>,
) {
    let handler = ConnectionHandler::new(stream, addr, gateway, stats);
    if let Err(e) = handler.run().await {
        debug!(client = %addr, error = %e, "connection ended with error");
    }
}
