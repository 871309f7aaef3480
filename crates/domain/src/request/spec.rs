//! Request type

use serde::{Deserialize, Serialize};

use super::{Headers, HttpMethod};
use crate::id::generate_id;

/// Name given to requests created without one.
pub const UNTITLED_REQUEST: &str = "Untitled Request";

/// An HTTP request as the user composed it.
///
/// `url`, header values and `body` are templates that may contain
/// `{{variable}}` tokens. They are resolved only when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Unique identifier for this request. Never changes once created.
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// HTTP method
    #[serde(default)]
    pub method: HttpMethod,
    /// Target URL template
    #[serde(default)]
    pub url: String,
    /// HTTP headers, values may be templates
    #[serde(default)]
    pub headers: Headers,
    /// Body template, sent only for POST, PUT and PATCH
    #[serde(default)]
    pub body: String,
    /// Collection this request belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl Request {
    /// Creates a new request with default values and a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            method: HttpMethod::default(),
            url: String::new(),
            headers: Headers::new(),
            body: String::new(),
            collection: None,
        }
    }

    /// Creates a GET request with the given URL.
    #[must_use]
    pub fn get(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::new(name)
        }
    }

    /// Returns this request with a header added.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns this request tagged with a collection.
    #[must_use]
    pub fn in_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new(UNTITLED_REQUEST)
    }
}
