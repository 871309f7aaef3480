//! HTTP Header types

use std::collections::BTreeMap;

use crate::error::{DomainError, DomainResult};

/// Header mapping of a request or response.
///
/// Keys are unique. A `BTreeMap` keeps serialized output stable.
pub type Headers = BTreeMap<String, String>;

/// Looks up a header by name, ignoring ASCII case.
#[must_use]
pub fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Splits a `Name: value` line into its parts.
///
/// # Errors
///
/// Returns `DomainError::InvalidHeader` when there is no colon or the name is blank.
pub fn parse_header_line(line: &str) -> DomainResult<(String, String)> {
    let Some((name, value)) = line.split_once(':') else {
        return Err(DomainError::InvalidHeader(line.to_string()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidHeader(line.to_string()));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
