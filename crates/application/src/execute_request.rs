//! Execute Request Use Case
//!
//! Resolves a request's templates, performs the HTTP call and turns whatever
//! comes back, including transport failures, into a `Response`.

use std::sync::Arc;
use std::time::Instant;

use nexus_domain::request::{Headers, find_header};
use nexus_domain::{Environment, Request, Response};
use tracing::{debug, info, warn};

use crate::ports::{HttpTransport, OutgoingRequest};
use crate::variable_resolver::{interpolate, resolve};

const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Use case for executing HTTP requests.
///
/// The executor knows nothing about tabs or history; the workspace wires
/// its result into both.
///
/// # Example
///
/// ```ignore
/// let transport = Arc::new(ReqwestTransport::new()?);
/// let executor = RequestExecutor::new(transport);
///
/// let response = executor.execute(&request, workspace.active_environment().as_ref()).await;
/// ```
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    /// Creates a new executor on top of the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Executes the request against the active environment.
    ///
    /// Never fails: a transport failure yields a status-0 "Network Error"
    /// response carrying the failure message.
    pub async fn execute(&self, request: &Request, environment: Option<&Environment>) -> Response {
        let outgoing = prepare(request, environment);
        info!(method = %outgoing.method, url = %request.url, "sending request");

        let start = Instant::now();
        match self.transport.send(outgoing).await {
            Ok(received) => {
                let elapsed = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let response = Response::from_text(
                    received.status,
                    received.status_text,
                    received.headers,
                    &received.body,
                    elapsed,
                );
                info!(
                    status = response.status,
                    success = response.is_success(),
                    time_ms = response.time,
                    size = response.size,
                    "request completed"
                );
                response
            }
            Err(error) => {
                warn!(url = %request.url, %error, "request failed");
                Response::network_error(error.to_string())
            }
        }
    }
}

/// Resolves a request into the call that goes on the wire.
///
/// - URL, body and header values are interpolated once.
/// - Headers whose key or resolved value is blank are dropped.
/// - POST, PUT and PATCH with a body and no `Content-Type` get one:
///   `application/json` if the body parses as JSON, `text/plain` otherwise.
/// - GET and DELETE never carry a body.
#[must_use]
pub fn prepare(request: &Request, environment: Option<&Environment>) -> OutgoingRequest {
    let resolution = resolve(&request.url, environment);
    if !resolution.is_complete() {
        warn!(
            unresolved = ?resolution.unresolved,
            "URL has variables missing from the active environment"
        );
    }
    debug!(variables = ?resolution.resolved_variables, "resolved URL");
    let url = resolution.resolved;
    let body = interpolate(&request.body, environment);

    let mut headers = Headers::new();
    for (key, value) in &request.headers {
        let value = interpolate(value, environment);
        if key.trim().is_empty() || value.trim().is_empty() {
            debug!(header = %key, "dropping blank header");
            continue;
        }
        headers.insert(key.clone(), value);
    }

    let sends_body = request.method.has_body() && !body.is_empty();
    if sends_body && find_header(&headers, CONTENT_TYPE).is_none() {
        headers.insert(CONTENT_TYPE.to_string(), detect_content_type(&body).to_string());
    }

    OutgoingRequest {
        method: request.method,
        url,
        headers,
        body: sends_body.then_some(body),
    }
}

/// Guesses the content type of a request body. Malformed JSON is plain text.
fn detect_content_type(body: &str) -> &'static str {
    if serde_json::from_str::<serde_json::Value>(body).is_ok() {
        JSON_CONTENT_TYPE
    } else {
        TEXT_CONTENT_TYPE
    }
}
