//! Open request tabs and the partial updates applied to them.

use serde::{Deserialize, Serialize};

use crate::id::generate_id;
use crate::request::{Headers, HttpMethod, Request};
use crate::response::Response;

/// An open, independently editable request plus its latest response.
///
/// Each tab owns its request by value; editing one tab never touches another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Unique identifier of the tab.
    pub id: String,
    /// The request being edited.
    pub request: Request,
    /// Response of the last completed send, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,
    /// True while a send is in flight.
    #[serde(default)]
    pub is_loading: bool,
}

impl Tab {
    /// Creates an idle tab around a request.
    #[must_use]
    pub fn new(request: Request) -> Self {
        Self {
            id: generate_id(),
            request,
            response: None,
            is_loading: false,
        }
    }

    /// Shallow-merges a patch into this tab.
    ///
    /// A replacement request keeps this tab's request id.
    pub fn apply(&mut self, patch: TabPatch) {
        if let Some(mut request) = patch.request {
            request.id.clone_from(&self.request.id);
            self.request = request;
        }
        if let Some(response) = patch.response {
            self.response = response;
        }
        if let Some(is_loading) = patch.is_loading {
            self.is_loading = is_loading;
        }
    }
}

/// Partial update of a [`Tab`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabPatch {
    /// Replacement request.
    pub request: Option<Request>,
    /// Replacement response; `Some(None)` clears it.
    pub response: Option<Option<Response>>,
    /// New loading flag.
    pub is_loading: Option<bool>,
}

impl TabPatch {
    /// Patch that stores a completed response and clears the loading flag.
    #[must_use]
    pub fn completed(response: Response) -> Self {
        Self {
            request: None,
            response: Some(Some(response)),
            is_loading: Some(false),
        }
    }

    /// Patch that marks the tab as loading.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            request: None,
            response: None,
            is_loading: Some(true),
        }
    }
}

/// Partial [`Request`] used to seed new tabs and to edit existing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPatch {
    /// Request id. Honoured when creating a tab, ignored on edits.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// HTTP method.
    pub method: Option<HttpMethod>,
    /// URL template.
    pub url: Option<String>,
    /// Whole header mapping.
    pub headers: Option<Headers>,
    /// Body template.
    pub body: Option<String>,
    /// Collection tag; `Some(None)` removes it.
    pub collection: Option<Option<String>>,
}

impl RequestPatch {
    /// Patch that only changes the URL.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Merges the patch into an existing request. The id never changes.
    pub fn apply_to(self, request: &mut Request) {
        if let Some(name) = self.name {
            request.name = name;
        }
        if let Some(method) = self.method {
            request.method = method;
        }
        if let Some(url) = self.url {
            request.url = url;
        }
        if let Some(headers) = self.headers {
            request.headers = headers;
        }
        if let Some(body) = self.body {
            request.body = body;
        }
        if let Some(collection) = self.collection {
            request.collection = collection;
        }
    }

    /// Builds a new request: supplied fields override `defaults`, including the id.
    #[must_use]
    pub fn into_request(self, mut defaults: Request) -> Request {
        if let Some(id) = self.id.clone() {
            defaults.id = id;
        }
        self.apply_to(&mut defaults);
        defaults
    }
}

impl From<Request> for RequestPatch {
    fn from(request: Request) -> Self {
        Self {
            id: Some(request.id),
            name: Some(request.name),
            method: Some(request.method),
            url: Some(request.url),
            headers: Some(request.headers),
            body: Some(request.body),
            collection: Some(request.collection),
        }
    }
}
