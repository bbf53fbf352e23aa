//! HTTP transport port
//!
//! Defines the single request/response exchange the request pipeline needs
//! from the network. The production adapter lives in `adapters::http`; tests plug in
//! a recording mock.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use thiserror::Error;

/// Header name → value mapping sent with a request
pub type Headers = BTreeMap<String, String>;

/// HTTP methods the backend is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read
    Get,
    /// Create
    Post,
    /// Replace
    Put,
    /// Partial update
    Patch,
    /// Remove
    Delete,
}

impl HttpMethod {
    /// Upper-case method name as it appears on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of a single multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    /// Plain text field
    Text(String),
    /// Uploaded file
    File {
        /// File name announced to the server
        file_name: String,
        /// Optional MIME type (e.g. `text/csv`)
        mime: Option<String>,
        /// Raw file bytes
        bytes: Vec<u8>,
    },
}

/// A named multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// Part content
    pub content: PartContent,
}

/// Ordered multipart form body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Create an empty form
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append a text field
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            content: PartContent::Text(value.into()),
        });
        self
    }

    /// Append a file field
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            content: PartContent::File {
                file_name: file_name.into(),
                mime: mime.map(String::from),
                bytes,
            },
        });
        self
    }

    /// Parts in insertion order
    #[must_use]
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Take the parts in insertion order
    #[must_use]
    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    /// Whether a part with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }

    /// Describe the form as JSON so it can go through a `Shape`
    ///
    /// Each part becomes `{ "kind": "text" | "file", ... }` keyed by its name.
    /// File contents are summarized by size, never embedded.
    #[must_use]
    pub fn describe(&self) -> Value {
        let mut map = Map::new();
        for part in &self.parts {
            let entry = match &part.content {
                PartContent::Text(text) => json!({ "kind": "text", "value": text }),
                PartContent::File {
                    file_name,
                    mime,
                    bytes,
                } => json!({
                    "kind": "file",
                    "fileName": file_name,
                    "mime": mime,
                    "size": bytes.len(),
                }),
            };
            map.insert(part.name.clone(), entry);
        }
        Value::Object(map)
    }
}

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Already-serialized text (JSON or otherwise)
    Text(String),
    /// Multipart form, encoded by the transport
    Multipart(MultipartForm),
}

/// A fully-built outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Method
    pub method: HttpMethod,
    /// Absolute URL including query string
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Optional body
    pub body: Option<RequestBody>,
}

/// Response as seen by the pipeline: status line plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric status code
    pub status: u16,
    /// Reason phrase (e.g. `Unauthorized`)
    pub status_text: String,
    /// Body decoded as text
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Network-level failure (the request never produced a response)
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error reported by the HTTP client
    #[error("{0}")]
    Http(String),

    /// Endpoint could not be reached
    #[error("{0}")]
    Unavailable(String),
}

/// HTTP transport abstraction
///
/// Implementations perform exactly one exchange per call; no retries, no
/// caching.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the status line and body text
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
