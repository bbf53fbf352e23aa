//! Request pipeline behavior against a recording transport

use std::time::Duration;

use serde_json::{Value, json};
use teamgrade::api::{
    AnyShape, ApiResult, AUTHORIZATION, CONTENT_TYPE, Checked, LoginRequest, MutateRequest,
    Number, Payload, QueryRequest, Schema, Text,
};
use teamgrade::core::models::{AuthRequest, AuthResponse, CreateUser, Sprint};
use teamgrade::core::ports::{HttpMethod, MultipartForm, RequestBody};

use crate::common::fixtures;
use crate::common::mocks::{BASE_URL, anonymous, logged_in};

// =============================================================================
// Read path
// =============================================================================

#[tokio::test]
async fn test_query_non_2xx_reports_status_line() {
    for (status, text) in [(404, "Not Found"), (500, "Internal Server Error"), (400, "Bad Request")] {
        let h = logged_in();
        h.transport.respond("teams", status, "{\"oops\":true}");

        let result = h
            .api
            .query_and_validate(QueryRequest::new("teams", AnyShape))
            .await;

        assert_eq!(
            result.message(),
            Some(format!("Failed to fetch GET teams: {status} {text}").as_str())
        );
        assert!(h.navigator.redirects().is_empty());
    }
}

#[tokio::test]
async fn test_query_returns_validated_data() {
    let h = logged_in();
    let body = json!([fixtures::sprint(2, 2, "2024-02-01", "2024-02-14")]);
    h.transport.ok_json("sprints", body.clone());

    let result = h
        .api
        .query_and_validate(QueryRequest::new("sprints", AnyShape))
        .await;

    assert_eq!(result, ApiResult::success(body));
}

#[tokio::test]
async fn test_query_validation_failure_message() {
    let h = logged_in();
    h.transport.ok_json("sprints", json!([{ "id": "not-a-sprint" }]));

    let result = h
        .api
        .query_and_validate(QueryRequest::new("sprints", Schema::<Vec<Sprint>>::new()))
        .await;

    let message = result.message().unwrap();
    assert!(message.starts_with("Failed to validate GET sprints:"), "{message}");
}

#[tokio::test]
async fn test_query_is_idempotent() {
    let h = logged_in();
    h.transport.ok_json("teams/1", fixtures::team(1, "Alpha"));

    let first = h
        .api
        .query_and_validate(QueryRequest::new("teams/1", AnyShape))
        .await;
    let second = h
        .api
        .query_and_validate(QueryRequest::new("teams/1", AnyShape))
        .await;

    assert!(first.is_success());
    assert_eq!(first, second);
    assert_eq!(h.transport.request_count(), 2);
}

#[tokio::test]
async fn test_query_sends_token_and_project() {
    let h = logged_in();
    h.transport.ok_json("teams", json!([]));

    let _ = h
        .api
        .query_and_validate(QueryRequest::new("/teams", AnyShape).param("ordered", true))
        .await;

    let request = h.transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, format!("{BASE_URL}/teams?ordered=true&projectId=3"));
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
    assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_session_project_overrides_caller_param() {
    let h = logged_in();

    let _ = h
        .api
        .query_and_validate(QueryRequest::new("teams", AnyShape).param("projectId", 99))
        .await;

    let url = h.transport.last_request().url;
    assert!(url.ends_with("?projectId=3"), "{url}");
}

#[tokio::test]
async fn test_anonymous_query_sends_bearer_null() {
    let h = anonymous();

    let _ = h
        .api
        .query_and_validate(QueryRequest::new("projects", AnyShape))
        .await;

    let request = h.transport.last_request();
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer null");
    assert!(request.url.ends_with("projects?projectId="));
}

#[tokio::test]
async fn test_non_json_body_is_read_as_text() {
    let h = logged_in();
    h.transport.respond("grades/download", 200, "name;grade\nAnn;15\n");

    let result = h
        .api
        .query_and_validate(QueryRequest::new("grades/download", Text))
        .await;

    assert_eq!(result.data().map(String::as_str), Some("name;grade\nAnn;15\n"));
}

#[tokio::test]
async fn test_numeric_string_accepted_as_number() {
    let h = logged_in();
    h.transport.respond("average", 200, "\"12.5\"");

    let result = h
        .api
        .query_and_validate(QueryRequest::new("teams/1/average", Number))
        .await;

    assert_eq!(result, ApiResult::success(12.5));
}

#[tokio::test]
async fn test_transport_failure_becomes_error() {
    let h = logged_in();
    h.transport.fail("teams", "connection refused");

    let result = h
        .api
        .query_and_validate(QueryRequest::new("teams", AnyShape))
        .await;

    assert_eq!(
        result.message(),
        Some("Failed to fetch GET teams: connection refused")
    );
}

#[tokio::test(start_paused = true)]
async fn test_query_delay_holds_request_back() {
    let h = logged_in();
    let api = h.api.clone();

    let task = tokio::spawn(async move {
        api.query_and_validate(QueryRequest::new("teams", AnyShape).delay(Duration::from_millis(500)))
            .await
    });

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert_eq!(h.transport.request_count(), 0);

    assert!(task.await.unwrap().is_success());
    assert_eq!(h.transport.request_count(), 1);
}

// =============================================================================
// Write path
// =============================================================================

#[tokio::test]
async fn test_mutate_body_without_shape_sends_nothing() {
    let h = logged_in();

    let request = MutateRequest::post("teams").body(Payload::Json(json!({ "name": "A" })));
    let result = h.api.mutate_and_validate(request).await;

    assert_eq!(
        result.message(),
        Some("Body schema is required when body is provided")
    );
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn test_mutate_invalid_body_sends_nothing() {
    let h = logged_in();

    let request = MutateRequest::post("users")
        .body(Payload::Json(json!({ "name": "Ann" })))
        .body_shape(Schema::<CreateUser>::new());
    let result = h.api.mutate_and_validate(request).await;

    let message = result.message().unwrap();
    assert!(message.contains("Failed to validate POST users:"), "{message}");
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn test_mutate_without_body() {
    let h = logged_in();
    h.transport.respond("notifications/1/changeStateChecked", 200, "");

    let result = h
        .api
        .mutate_and_validate(MutateRequest::patch("notifications/1/changeStateChecked"))
        .await;

    assert_eq!(result, ApiResult::success(()));
    let request = h.transport.last_request();
    assert_eq!(request.method, HttpMethod::Patch);
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_mutate_sends_validated_json() {
    let h = logged_in();
    let body = json!({ "name": "Ann", "email": "ann@example.org", "password": null, "privateKey": null });

    let request = MutateRequest::post("users")
        .body(Payload::Json(body))
        .body_shape(Schema::<CreateUser>::new());
    assert!(h.api.mutate_and_validate(request).await.is_success());

    let sent = h.transport.last_request();
    let Some(RequestBody::Text(text)) = sent.body else {
        panic!("expected a JSON body");
    };
    let sent: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(sent["name"], "Ann");
    assert_eq!(sent["email"], "ann@example.org");
}

#[tokio::test]
async fn test_mutate_error_status() {
    let h = logged_in();
    h.transport.respond("students/4", 404, "");

    let result = h
        .api
        .mutate_and_validate(MutateRequest::delete("students/4"))
        .await;

    assert_eq!(
        result.message(),
        Some("Failed to fetch DELETE students/4: 404 Not Found")
    );
}

#[tokio::test]
async fn test_multipart_without_json_content_type() {
    let h = logged_in();
    let form = MultipartForm::new().file("file-upload", "students.csv", Some("text/csv"), b"a;b".to_vec());

    let request = MutateRequest::post("students")
        .json_content(false)
        .body(form.into())
        .body_shape(AnyShape);
    assert!(h.api.mutate_and_validate(request).await.is_success());

    let sent = h.transport.last_request();
    assert!(sent.headers.get(CONTENT_TYPE).is_none());
    assert!(matches!(sent.body, Some(RequestBody::Multipart(ref form)) if form.contains("file-upload")));
}

#[tokio::test]
async fn test_plain_text_body_is_the_validated_value() {
    let h = logged_in();

    let request = MutateRequest::post("grades/scale")
        .body(Payload::Json(json!("12.5")))
        .json_content(false)
        .body_shape(Number);
    assert!(h.api.mutate_and_validate(request).await.is_success());

    let sent = h.transport.last_request();
    assert_eq!(sent.body, Some(RequestBody::Text("12.5".to_string())));
    assert!(sent.headers.get(CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn test_json_body_drops_fields_the_shape_does_not_know() {
    let h = logged_in();
    let body = json!({
        "name": "Ann",
        "email": "ann@example.org",
        "password": null,
        "privateKey": null,
        "unexpected": 1
    });

    let request = MutateRequest::post("users")
        .body(Payload::Json(body))
        .body_shape(Schema::<CreateUser>::new());
    assert!(h.api.mutate_and_validate(request).await.is_success());

    let sent = h.transport.last_request();
    let Some(RequestBody::Text(text)) = sent.body else {
        panic!("expected a JSON body");
    };
    let sent: Value = serde_json::from_str(&text).unwrap();
    assert!(sent.get("unexpected").is_none());
    assert_eq!(sent["name"], "Ann");
}

#[tokio::test(start_paused = true)]
async fn test_mutate_delay_holds_request_back() {
    let h = logged_in();
    let api = h.api.clone();

    let task = tokio::spawn(async move {
        api.mutate_and_validate(MutateRequest::delete("students/4").delay(Duration::from_secs(2)))
            .await
    });

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert_eq!(h.transport.request_count(), 0);

    assert!(task.await.unwrap().is_success());
    assert_eq!(h.transport.last_request().method, HttpMethod::Delete);
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_unauthorized_redirects_to_login() {
    let h = logged_in();
    h.transport.respond("teams/1", 401, "");

    let result = h
        .api
        .query_and_validate(QueryRequest::new("teams/1", AnyShape))
        .await;

    let message = result.message().unwrap();
    assert!(message.starts_with("Failed to fetch GET teams/1: 401"), "{message}");
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_write_redirects_to_login() {
    let h = logged_in();
    h.transport.respond("notifications/1/changeStateChecked", 401, "");

    let result = h
        .api
        .mutate_and_validate(MutateRequest::patch("notifications/1/changeStateChecked"))
        .await;

    assert_eq!(
        result.message(),
        Some("Failed to fetch PATCH notifications/1/changeStateChecked: 401 Unauthorized")
    );
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_login_has_no_authorization_and_no_redirect() {
    let h = anonymous();
    h.transport.respond("auth/login", 401, "");

    let request = LoginRequest::new("auth/login", Schema::<AuthResponse>::new())
        .body(Payload::Json(json!({ "login": "ann@example.org", "password": "pw" })))
        .body_shape(Checked::<AuthRequest>::new());
    let result = h.api.login_and_validate(request).await;

    assert_eq!(
        result.message(),
        Some("Failed to fetch POST auth/login: 401 Unauthorized")
    );
    let sent = h.transport.last_request();
    assert!(sent.headers.get(AUTHORIZATION).is_none());
    assert_eq!(sent.method, HttpMethod::Post);
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn test_login_rejects_malformed_email_before_sending() {
    let h = anonymous();

    let request = LoginRequest::new("auth/login", Schema::<AuthResponse>::new())
        .body(Payload::Json(json!({ "login": "not-an-email", "password": "pw" })))
        .body_shape(Checked::<AuthRequest>::new());
    let result = h.api.login_and_validate(request).await;

    let message = result.message().unwrap();
    assert!(message.starts_with("Failed to validate POST auth/login: login:"), "{message}");
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn test_clear_session_navigator_forgets_expired_login() {
    use std::sync::Arc;
    use teamgrade::adapters::{ClearSessionNavigator, MemorySessionStore};
    use teamgrade::api::ApiClient;
    use teamgrade::core::ports::SessionStore;

    use crate::common::mocks::MockTransport;

    let transport = Arc::new(MockTransport::new());
    transport.respond("teams", 401, "");
    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::logged_in("tok", 3));
    let navigator = Arc::new(ClearSessionNavigator::new(Arc::clone(&session)));
    let api = ApiClient::new(Some(BASE_URL), transport, Arc::clone(&session), navigator).unwrap();

    let result = api.query_and_validate(QueryRequest::new("teams", AnyShape)).await;

    assert!(!result.is_success());
    assert_eq!(session.token(), None);
    assert_eq!(session.project_id(), None);
}

#[tokio::test]
async fn test_log_navigator_only_reports() {
    use std::sync::Arc;
    use teamgrade::adapters::{LogNavigator, MemorySessionStore};
    use teamgrade::api::ApiClient;
    use teamgrade::core::ports::SessionStore;

    use crate::common::mocks::MockTransport;

    let transport = Arc::new(MockTransport::new());
    transport.respond("teams", 401, "");
    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::logged_in("tok", 3));
    let api = ApiClient::new(Some(BASE_URL), transport, Arc::clone(&session), Arc::new(LogNavigator)).unwrap();

    let result = api.query_and_validate(QueryRequest::new("teams", AnyShape)).await;

    assert!(!result.is_success());
    assert_eq!(session.token().as_deref(), Some("tok"));
}
