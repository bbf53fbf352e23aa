//! reqwest-backed HTTP transport
//!
//! Implements `HttpTransport` with a shared `reqwest::Client`. One call is
//! one exchange: no retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::core::ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartForm, PartContent,
    RequestBody, TransportError,
};

/// Transport backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default client
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self::with_client(
            reqwest::Client::builder().build().map_err(http_error)?,
        ))
    }

    /// Create a transport whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self::with_client(
            reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(http_error)?,
        ))
    }

    /// Create a transport around an existing client
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_method(request.method), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            None => builder,
            Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::Multipart(form)) => builder.multipart(to_form(form)?),
        };

        let response = builder.send().await.map_err(http_error)?;
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await.map_err(http_error)?;
        Ok(HttpResponse::new(status.as_u16(), status_text, body))
    }
}

#[allow(clippy::needless_pass_by_value)]
fn http_error(error: reqwest::Error) -> TransportError {
    TransportError::Http(error.to_string())
}

const fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn to_form(form: MultipartForm) -> Result<Form, TransportError> {
    let mut out = Form::new();
    for part in form.into_parts() {
        out = match part.content {
            PartContent::Text(value) => out.text(part.name, value),
            PartContent::File {
                file_name,
                mime,
                bytes,
            } => {
                let mut file = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime {
                    file = file.mime_str(&mime).map_err(http_error)?;
                }
                out.part(part.name, file)
            },
        };
    }
    Ok(out)
}
