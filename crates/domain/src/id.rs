//! ID generation utilities.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Generates a new UUID v7 as a string.
///
/// This is the id format for tabs and requests. v7 ids carry a timestamp
/// prefix, so ids generated later sort after earlier ones.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// Checks that an externally supplied id is usable as a map key.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` for blank ids.
pub fn validate_id(id: &str) -> DomainResult<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidIdentifier(id.to_string()));
    }
    Ok(trimmed)
}
