//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It sends exactly what
//! the executor prepared and hands back the raw status, headers and body
//! text; interpretation happens in the application layer.

use std::error::Error as _;
use std::io;

use async_trait::async_trait;
use nexus_application::ports::{HttpTransport, OutgoingRequest, TransportError, TransportResponse};
use nexus_domain::request::Headers;
use nexus_domain::{HttpMethod, WorkbenchSettings};
use reqwest::{Client, Method, Url};
use tracing::debug;

/// HTTP transport backed by a shared `reqwest::Client`.
///
/// No timeout is configured; reqwest's defaults apply.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    max_redirects: usize,
}

impl ReqwestTransport {
    /// Creates a transport configured from the workbench settings:
    /// User-Agent and redirect limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &WorkbenchSettings) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            max_redirects: settings.max_redirects,
        })
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to transport errors.
    fn map_error(&self, error: &reqwest::Error, url: &Url) -> TransportError {
        let host = url.host_str().unwrap_or("unknown").to_string();

        if error.is_timeout() {
            return TransportError::Timeout;
        }

        if error.is_redirect() {
            return TransportError::TooManyRedirects {
                max: self.max_redirects,
            };
        }

        if error.is_connect() {
            if io_error_kind(error) == Some(io::ErrorKind::ConnectionRefused) {
                return TransportError::ConnectionRefused {
                    host,
                    port: url.port_or_known_default().unwrap_or(80),
                };
            }

            let message = error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return TransportError::DnsError { host, message };
            }
            if lower.contains("refused") {
                return TransportError::ConnectionRefused {
                    host,
                    port: url.port_or_known_default().unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(error_chain(error))
    }
}

/// Finds the first I/O error kind in the source chain.
fn io_error_kind(error: &reqwest::Error) -> Option<io::ErrorKind> {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            return Some(io_error.kind());
        }
        source = cause.source();
    }
    None
}

/// Joins the error and its causes, outermost first.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Collects response headers. Repeated names are joined with `", "`.
fn collect_headers(headers: &reqwest::header::HeaderMap) -> Headers {
    let mut collected = Headers::new();
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        collected
            .entry(name.to_string())
            .and_modify(|existing: &mut String| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    collected
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_error(&e, &url))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers = collect_headers(response.headers());
        debug!(status = status.as_u16(), "response received");

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(error_chain(&e)))?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}
