//! Request header construction

use crate::core::ports::Headers;

/// `Authorization` header name
pub const AUTHORIZATION: &str = "Authorization";
/// `Content-Type` header name
pub const CONTENT_TYPE: &str = "Content-Type";
/// JSON media type
pub const APPLICATION_JSON: &str = "application/json";

/// Headers for authenticated calls
///
/// A missing token is sent as `Bearer null`, which the backend rejects with
/// 401 and the pipeline turns into a login redirect.
#[must_use]
pub fn build_headers(token: Option<&str>, json_content: bool) -> Headers {
    let mut headers = Headers::new();
    headers.insert(
        AUTHORIZATION.to_string(),
        format!("Bearer {}", token.unwrap_or("null")),
    );
    if json_content {
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    }
    headers
}

/// Headers for the login call: JSON content, no `Authorization`
#[must_use]
pub fn login_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    headers
}
