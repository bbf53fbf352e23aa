//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the request pipeline and the
//! systems around it (network, session storage, navigation, encryption).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The pipeline and the domain services depend only on these traits, never on
//! concrete implementations. This enables:
//!
//! - **Testability**: Mock transports that record every request
//! - **Flexibility**: Swap session storage without touching services
//! - **Clarity**: Clear boundaries between layers

mod cipher;
mod navigator;
mod session;
mod transport;

pub use cipher::Cipher;
pub use navigator::{LOGIN_PATH, Navigator};
pub use session::{AuthContext, SessionError, SessionStore};
pub use transport::{
    FormPart, Headers, HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartForm,
    PartContent, RequestBody, TransportError,
};
