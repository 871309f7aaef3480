//! HTTP transport port

use async_trait::async_trait;
use nexus_domain::HttpMethod;
use nexus_domain::request::Headers;
use thiserror::Error;

/// A fully resolved call, ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Resolved URL.
    pub url: String,
    /// Resolved headers.
    pub headers: Headers,
    /// Resolved body; `None` means no body is sent.
    pub body: Option<String>,
}

/// What the transport got back, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase; may be empty.
    pub status_text: String,
    /// Response headers.
    pub headers: Headers,
    /// Full body as text.
    pub body: String,
}

/// Transport-level failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The transport gave up waiting.
    #[error("Request timed out")]
    Timeout,

    /// The host name could not be resolved.
    #[error("Could not resolve host {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("Connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Connecting failed for another reason.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Too many redirects were followed.
    #[error("Too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit that was hit.
        max: usize,
    },

    /// The body could not be read to the end.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

/// Port for issuing HTTP calls.
///
/// Implementations do not interpret bodies and do not enforce a timeout
/// beyond their own defaults. There is no cancellation: a call runs until
/// it completes or fails.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and reads the full response body as text.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` for DNS, connection, timeout and read
    /// failures. HTTP error statuses are not errors.
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError>;
}
