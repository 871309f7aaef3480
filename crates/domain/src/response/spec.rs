//! Response type
//!
//! Contains types for representing HTTP responses including
//! status codes, headers, payload, and timing information.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::Headers;

/// Status text of the synthetic response produced for transport failures.
pub const NETWORK_ERROR_STATUS_TEXT: &str = "Network Error";

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns the canonical reason phrase for common status codes.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            0 => NETWORK_ERROR_STATUS_TEXT,
            100 => "Continue",
            101 => "Switching Protocols",
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            204 => "No Content",
            301 => "Moved Permanently",
            302 => "Found",
            304 => "Not Modified",
            307 => "Temporary Redirect",
            308 => "Permanent Redirect",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            408 => "Request Timeout",
            409 => "Conflict",
            422 => "Unprocessable Entity",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Response body, either parsed as JSON or kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Payload {
    /// The body parsed as JSON.
    Structured(Value),
    /// The body as received, when it is not valid JSON.
    Raw(String),
}

impl Payload {
    /// Parses text as JSON, falling back to the raw text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).map_or_else(|_| Self::Raw(text.to_string()), Self::Structured)
    }

    /// Returns the parsed value, if any.
    #[must_use]
    pub const fn as_structured(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw text, if the body was not JSON.
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::Raw(text) => Some(text),
        }
    }

    /// Renders the payload for display: pretty JSON or the text itself.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Raw(text) => text.clone(),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

/// HTTP response as shown to the user.
///
/// A response is always replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code, `0` for transport failures.
    pub status: u16,
    /// Status text (e.g., "OK", "Not Found")
    pub status_text: String,
    /// Response headers.
    #[serde(default)]
    pub headers: Headers,
    /// Response body.
    pub data: Payload,
    /// Elapsed time in milliseconds.
    pub time: u64,
    /// UTF-8 byte length of the raw body text.
    pub size: usize,
}

impl Response {
    /// Creates a response from the raw body text.
    ///
    /// The body is parsed as JSON when possible; `size` is always the
    /// byte length of the raw text.
    #[must_use]
    pub fn from_text(
        status: impl Into<StatusCode>,
        status_text: impl Into<String>,
        headers: Headers,
        body: &str,
        time: u64,
    ) -> Self {
        let status = status.into();
        let mut status_text = status_text.into();
        if status_text.is_empty() {
            status_text = status.reason_phrase().to_string();
        }

        Self {
            status: status.as_u16(),
            status_text,
            headers,
            data: Payload::parse(body),
            time,
            size: body.len(),
        }
    }

    /// Creates the synthetic response for a transport failure.
    #[must_use]
    pub fn network_error(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            status_text: NETWORK_ERROR_STATUS_TEXT.to_string(),
            headers: Headers::new(),
            data: Payload::Structured(serde_json::json!({ "error": message.into() })),
            time: 0,
            size: 0,
        }
    }

    /// Returns the status as a `StatusCode`.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode(self.status)
    }

    /// Returns true if the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code().is_success()
    }

    /// Returns true if this is the synthetic transport-failure response.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        self.status == 0
    }

    /// Returns the failure message carried by a network-error response.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if !self.is_network_error() {
            return None;
        }
        self.data.as_structured()?.get("error")?.as_str()
    }
}
