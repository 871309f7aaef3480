//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while parsing or validating values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not one of GET, POST, PUT, DELETE or PATCH.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A header line could not be split into a name and a value.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
