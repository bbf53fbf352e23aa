//! Mock implementations of port traits for testing
//!
//! `MockTransport` answers by URL substring and records every request, so a
//! test can assert both on what came back and on what was (or was not) sent.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use teamgrade::adapters::MemorySessionStore;
use teamgrade::api::ApiClient;
use teamgrade::core::ports::{
    HttpRequest, HttpResponse, HttpTransport, Navigator, RequestBody, SessionStore,
    TransportError,
};

pub const BASE_URL: &str = "http://api.test";

#[derive(Clone)]
enum Reply {
    Response(HttpResponse),
    Fail(String),
}

struct Rule {
    url: String,
    body: Option<String>,
    reply: Reply,
}

impl Rule {
    fn matches(&self, request: &HttpRequest) -> bool {
        if !request.url.contains(self.url.as_str()) {
            return false;
        }
        match (&self.body, &request.body) {
            (None, _) => true,
            (Some(fragment), Some(RequestBody::Text(text))) => text.contains(fragment.as_str()),
            (Some(_), _) => false,
        }
    }
}

/// Transport answering from a list of rules keyed by URL substring and,
/// optionally, a body fragment
///
/// The first matching rule wins; unmatched requests get `200 OK` with an
/// empty body.
#[derive(Default)]
pub struct MockTransport {
    rules: Mutex<Vec<Rule>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, url: &str, body: Option<&str>, reply: Reply) {
        self.rules.lock().unwrap().push(Rule {
            url: url.to_string(),
            body: body.map(String::from),
            reply,
        });
    }

    pub fn respond(&self, pattern: &str, status: u16, body: impl Into<String>) {
        let response = HttpResponse::new(status, status_text(status), body);
        self.push(pattern, None, Reply::Response(response));
    }

    /// Answer `status` to requests on `pattern` whose body contains `fragment`
    pub fn respond_to_body(&self, pattern: &str, fragment: &str, status: u16) {
        let response = HttpResponse::new(status, status_text(status), "");
        self.push(pattern, Some(fragment), Reply::Response(response));
    }

    pub fn ok_json(&self, pattern: &str, body: Value) {
        self.respond(pattern, 200, body.to_string());
    }

    pub fn fail(&self, pattern: &str, message: &str) {
        self.push(pattern, None, Reply::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let reply = self
            .rules
            .lock()
            .unwrap()
            .iter()
            .find(|rule| rule.matches(&request))
            .map(|rule| rule.reply.clone());
        self.requests.lock().unwrap().push(request);

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(TransportError::Unavailable(message)),
            None => Ok(HttpResponse::new(200, "OK", "")),
        }
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// Navigator that remembers every redirect
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Client wired to mocks, with handles on each collaborator
pub struct Harness {
    pub api: ApiClient,
    pub transport: Arc<MockTransport>,
    pub session: Arc<MemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness(session: MemorySessionStore) -> Harness {
    let transport = Arc::new(MockTransport::new());
    let session = Arc::new(session);
    let navigator = Arc::new(RecordingNavigator::default());

    let transport_port: Arc<dyn HttpTransport> = transport.clone();
    let session_port: Arc<dyn SessionStore> = session.clone();
    let navigator_port: Arc<dyn Navigator> = navigator.clone();
    let api = ApiClient::new(Some(BASE_URL), transport_port, session_port, navigator_port)
        .expect("base url is set");

    Harness {
        api,
        transport,
        session,
        navigator,
    }
}

/// Token `tok`, project 3, user 7
pub fn logged_in() -> Harness {
    let session = MemorySessionStore::logged_in("tok", 3);
    session.set_user_id(7).unwrap();
    harness(session)
}

pub fn anonymous() -> Harness {
    harness(MemorySessionStore::new())
}
