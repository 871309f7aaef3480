//! Application error types

use nexus_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Engine operations never fail; these errors come from the persistence
/// channel and from parsing user input.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
