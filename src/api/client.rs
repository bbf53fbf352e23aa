//! Request executor
//!
//! [`ApiClient`] runs the three request paths against the backend:
//!
//! - [`ApiClient::query_and_validate`]: `GET`, response validated
//! - [`ApiClient::mutate_and_validate`]: body validated, response ignored
//! - [`ApiClient::login_and_validate`]: unauthenticated `POST`, both validated
//!
//! Every expected failure (transport, HTTP status, validation) comes back as
//! [`ApiResult::Error`] with a `Failed to fetch ...` or `Failed to validate ...`
//! message. Nothing here panics on backend input.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, warn};
use serde::Serialize;
use serde_json::Value;

use super::error::ConfigError;
use super::headers::{build_headers, login_headers};
use super::params::Params;
use super::request::{LoginRequest, MutateRequest, Payload, QueryRequest};
use super::result::ApiResult;
use super::shape::Shape;
use super::url::UrlBuilder;
use crate::core::ports::{
    AuthContext, HttpMethod, HttpRequest, HttpResponse, HttpTransport, LOGIN_PATH,
    Navigator, RequestBody, SessionStore,
};

/// Query parameter carrying the selected project on every call
pub const PROJECT_PARAM: &str = "projectId";

const BODY_SCHEMA_REQUIRED: &str = "Body schema is required when body is provided";

/// Client for the grading backend
///
/// Cheap to clone; clones share the transport, session and navigator.
#[derive(Clone)]
pub struct ApiClient {
    urls: UrlBuilder,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.urls.base())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client; fails when `api_url` is unset or empty
    pub fn new(
        api_url: Option<&str>,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            urls: UrlBuilder::new(api_url)?,
            transport,
            session,
            navigator,
        })
    }

    /// Session the client reads its token and project from
    #[must_use]
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Token and project as they would be sent right now
    #[must_use]
    pub fn auth_context(&self) -> AuthContext {
        self.session.auth_context()
    }

    /// Send the user to `path` (the login page when the session is unusable)
    pub fn redirect(&self, path: &str) {
        self.navigator.redirect(path);
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.urls.base()
    }

    /// `GET` a route and validate the response
    pub async fn query_and_validate<S: Shape>(
        &self,
        request: QueryRequest<S>,
    ) -> ApiResult<S::Output> {
        let QueryRequest {
            route,
            params,
            json_content,
            delay,
            response_shape,
        } = request;
        pause(delay).await;

        let method = HttpMethod::Get;
        let auth = self.session.auth_context();
        let params = with_project(params, &auth);
        debug!("{method} {route} params: {}", params.to_query_string());

        let request = HttpRequest {
            method,
            url: self.urls.build(&route, &params),
            headers: build_headers(auth.token.as_deref(), json_content),
            body: None,
        };
        let response = match self.exchange(request, &route, true).await {
            Ok(response) => response,
            Err(message) => return fail(message),
        };
        validate_response(method, &route, &response, &response_shape)
    }

    /// Send a `POST`/`PUT`/`PATCH`/`DELETE`, validating the body first
    ///
    /// Nothing is sent when the body has no shape or fails validation.
    pub async fn mutate_and_validate<S>(&self, request: MutateRequest<S>) -> ApiResult<()>
    where
        S: Shape,
        S::Output: Serialize,
    {
        let MutateRequest {
            method,
            route,
            params,
            json_content,
            delay,
            body,
            body_shape,
        } = request;
        pause(delay).await;

        let method = HttpMethod::from(method);
        let body = match prepare_body(method, &route, body, body_shape.as_ref(), json_content) {
            Ok(body) => body,
            Err(message) => return fail(message),
        };

        let auth = self.session.auth_context();
        let params = with_project(params, &auth);
        let request = HttpRequest {
            method,
            url: self.urls.build(&route, &params),
            headers: build_headers(auth.token.as_deref(), json_content),
            body,
        };
        match self.exchange(request, &route, true).await {
            Ok(_) => ApiResult::success(()),
            Err(message) => fail(message),
        }
    }

    /// Authenticate: unauthenticated JSON `POST`, body and response validated
    ///
    /// A 401 here means bad credentials, so there is no login redirect.
    pub async fn login_and_validate<B, R>(&self, request: LoginRequest<B, R>) -> ApiResult<R::Output>
    where
        B: Shape,
        B::Output: Serialize,
        R: Shape,
    {
        let LoginRequest {
            route,
            params,
            body,
            body_shape,
            response_shape,
        } = request;

        let method = HttpMethod::Post;
        let body = match prepare_body(method, &route, body, body_shape.as_ref(), true) {
            Ok(body) => body,
            Err(message) => return fail(message),
        };

        let auth = self.session.auth_context();
        let params = with_project(params, &auth);
        let request = HttpRequest {
            method,
            url: self.urls.build(&route, &params),
            headers: login_headers(),
            body,
        };
        let response = match self.exchange(request, &route, false).await {
            Ok(response) => response,
            Err(message) => return fail(message),
        };
        validate_response(method, &route, &response, &response_shape)
    }

    /// One network exchange; non-2xx and transport failures become messages
    async fn exchange(
        &self,
        request: HttpRequest,
        route: &str,
        redirect_on_401: bool,
    ) -> Result<HttpResponse, String> {
        let method = request.method;
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| format!("Failed to fetch {method} {route}: {e}"))?;

        if response.is_success() {
            return Ok(response);
        }
        if response.status == 401 && redirect_on_401 {
            warn!("{method} {route} unauthorized, redirecting to {LOGIN_PATH}");
            self.navigator.redirect(LOGIN_PATH);
        }
        Err(format!(
            "Failed to fetch {method} {route}: {} {}",
            response.status, response.status_text
        ))
    }
}

async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

fn fail<T>(message: String) -> ApiResult<T> {
    error!("{message}");
    ApiResult::Error { error: message }
}

/// Merge the session project into the caller's params (session wins)
fn with_project(mut params: Params, auth: &AuthContext) -> Params {
    params.insert(PROJECT_PARAM, auth.project_param());
    params
}

/// JSON when possible, otherwise the raw text as a JSON string
fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn validate_response<S: Shape>(
    method: HttpMethod,
    route: &str,
    response: &HttpResponse,
    shape: &S,
) -> ApiResult<S::Output> {
    let raw = parse_body(&response.body);
    debug!("{method} {route} response: {raw}");
    match shape.parse(&raw) {
        Ok(data) => ApiResult::success(data),
        Err(e) => fail(format!(
            "Failed to validate {method} {route}: {}",
            e.message()
        )),
    }
}

/// Validate the body and encode it for the transport
fn prepare_body<S>(
    method: HttpMethod,
    route: &str,
    body: Option<Payload>,
    shape: Option<&S>,
    json_content: bool,
) -> Result<Option<RequestBody>, String>
where
    S: Shape,
    S::Output: Serialize,
{
    let Some(body) = body else {
        return Ok(None);
    };
    let Some(shape) = shape else {
        return Err(BODY_SCHEMA_REQUIRED.to_string());
    };

    let raw = body.as_value();
    debug!("{method} {route} payload: {raw}");
    let invalid = |message: &str| format!("Failed to validate {method} {route}: {message}");
    let validated = shape.parse(&raw).map_err(|e| invalid(e.message()))?;

    let encoded = match body {
        Payload::Multipart(form) => RequestBody::Multipart(form),
        Payload::Json(_) => {
            let value = serde_json::to_value(&validated).map_err(|e| invalid(&e.to_string()))?;
            RequestBody::Text(encode_text(value, json_content))
        },
    };
    Ok(Some(encoded))
}

/// Serialize a validated body; without JSON content a bare string goes out unquoted
fn encode_text(value: Value, json_content: bool) -> String {
    match value {
        Value::String(text) if !json_content => text,
        other => other.to_string(),
    }
}

