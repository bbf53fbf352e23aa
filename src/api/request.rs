//! Request descriptors
//!
//! One value per call, built with consuming builder methods and handed to
//! [`super::ApiClient`]. Descriptors carry no session state; the token and
//! selected project are read when the call runs.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::params::Params;
use super::shape::AnyShape;
use crate::core::ports::{HttpMethod, MultipartForm};

/// Methods allowed on the write path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationMethod {
    /// Create
    Post,
    /// Replace
    Put,
    /// Partial update
    Patch,
    /// Remove
    Delete,
}

impl From<MutationMethod> for HttpMethod {
    fn from(method: MutationMethod) -> Self {
        match method {
            MutationMethod::Post => Self::Post,
            MutationMethod::Put => Self::Put,
            MutationMethod::Patch => Self::Patch,
            MutationMethod::Delete => Self::Delete,
        }
    }
}

/// Request body before validation
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// JSON document
    Json(Value),
    /// Multipart form (file uploads)
    Multipart(MultipartForm),
}

impl Payload {
    /// JSON payload from any serializable value
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// JSON view used for validation and logging
    #[must_use]
    pub fn as_value(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Multipart(form) => form.describe(),
        }
    }
}

impl From<MultipartForm> for Payload {
    fn from(form: MultipartForm) -> Self {
        Self::Multipart(form)
    }
}

/// Read-path descriptor (always `GET`)
#[derive(Debug, Clone)]
pub struct QueryRequest<S> {
    pub(crate) route: String,
    pub(crate) params: Params,
    pub(crate) json_content: bool,
    pub(crate) delay: Option<Duration>,
    pub(crate) response_shape: S,
}

impl<S> QueryRequest<S> {
    /// `GET route`, response validated against `response_shape`
    pub fn new(route: impl Into<String>, response_shape: S) -> Self {
        Self {
            route: route.into(),
            params: Params::new(),
            json_content: true,
            delay: None,
            response_shape,
        }
    }

    /// Replace the query parameters
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Add one query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Whether to send `Content-Type: application/json` (default true)
    #[must_use]
    pub const fn json_content(mut self, json_content: bool) -> Self {
        self.json_content = json_content;
        self
    }

    /// Wait before sending
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Route as given
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }
}

/// Write-path descriptor
///
/// A body is only sent once a body shape is attached with
/// [`MutateRequest::body_shape`].
#[derive(Debug, Clone)]
pub struct MutateRequest<S = AnyShape> {
    pub(crate) method: MutationMethod,
    pub(crate) route: String,
    pub(crate) params: Params,
    pub(crate) json_content: bool,
    pub(crate) delay: Option<Duration>,
    pub(crate) body: Option<Payload>,
    pub(crate) body_shape: Option<S>,
}

impl MutateRequest {
    /// `method route` without a body
    pub fn new(method: MutationMethod, route: impl Into<String>) -> Self {
        Self {
            method,
            route: route.into(),
            params: Params::new(),
            json_content: true,
            delay: None,
            body: None,
            body_shape: None,
        }
    }

    /// `POST route`
    pub fn post(route: impl Into<String>) -> Self {
        Self::new(MutationMethod::Post, route)
    }

    /// `PUT route`
    pub fn put(route: impl Into<String>) -> Self {
        Self::new(MutationMethod::Put, route)
    }

    /// `PATCH route`
    pub fn patch(route: impl Into<String>) -> Self {
        Self::new(MutationMethod::Patch, route)
    }

    /// `DELETE route`
    pub fn delete(route: impl Into<String>) -> Self {
        Self::new(MutationMethod::Delete, route)
    }
}

impl<S> MutateRequest<S> {
    /// Attach the body
    #[must_use]
    pub fn body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach the shape the body is validated against
    #[must_use]
    pub fn body_shape<T>(self, shape: T) -> MutateRequest<T> {
        MutateRequest {
            method: self.method,
            route: self.route,
            params: self.params,
            json_content: self.json_content,
            delay: self.delay,
            body: self.body,
            body_shape: Some(shape),
        }
    }

    /// Replace the query parameters
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Add one query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Whether the body is JSON (default true); multipart uploads set false
    #[must_use]
    pub const fn json_content(mut self, json_content: bool) -> Self {
        self.json_content = json_content;
        self
    }

    /// Wait before sending
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Method
    #[must_use]
    pub const fn method(&self) -> MutationMethod {
        self.method
    }

    /// Route as given
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }
}

/// Authentication-path descriptor (always `POST`, JSON, unauthenticated)
#[derive(Debug, Clone)]
pub struct LoginRequest<B, R> {
    pub(crate) route: String,
    pub(crate) params: Params,
    pub(crate) body: Option<Payload>,
    pub(crate) body_shape: Option<B>,
    pub(crate) response_shape: R,
}

impl<R> LoginRequest<AnyShape, R> {
    /// `POST route`, response validated against `response_shape`
    pub fn new(route: impl Into<String>, response_shape: R) -> Self {
        Self {
            route: route.into(),
            params: Params::new(),
            body: None,
            body_shape: None,
            response_shape,
        }
    }
}

impl<B, R> LoginRequest<B, R> {
    /// Attach the credentials
    #[must_use]
    pub fn body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach the shape the credentials are validated against
    #[must_use]
    pub fn body_shape<T>(self, shape: T) -> LoginRequest<T, R> {
        LoginRequest {
            route: self.route,
            params: self.params,
            body: self.body,
            body_shape: Some(shape),
            response_shape: self.response_shape,
        }
    }

    /// Add one query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key, value);
        self
    }
}
