//! Validated request/response pipeline
//!
//! Every domain service talks to the backend through [`ApiClient`]. The
//! pieces are small and independent so they can be tested on their own:
//!
//! ## Design
//!
//! - **Descriptors are values**: [`QueryRequest`], [`MutateRequest`] and
//!   [`LoginRequest`] describe one call; session state is read at execution
//! - **Validation is pluggable**: anything implementing [`Shape`]
//! - **Failures are data**: the executor returns [`ApiResult`], never panics

mod client;
mod error;
mod headers;
mod params;
mod request;
mod result;
mod shape;
mod url;

pub use client::{ApiClient, PROJECT_PARAM};
pub use error::{ConfigError, ServiceError, ValidationError};
pub use headers::{APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, build_headers, login_headers};
pub use params::Params;
pub use request::{LoginRequest, MutateRequest, MutationMethod, Payload, QueryRequest};
pub use result::ApiResult;
pub use shape::{
    AnyShape, ArrayOf, Checked, FormShape, Nullable, Number, OrEmpty, Schema, Shape, Text,
    Validate,
};
pub use url::{UrlBuilder, build_url};
