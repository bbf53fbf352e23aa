//! Domain services over the mocked pipeline

use serde_json::{Value, json};
use teamgrade::core::models::{
    CreateBonus, Gender, GradeInput, GradeTypeName, NewStudent, Permission, RoleType,
};
use teamgrade::core::ports::{HttpMethod, HttpRequest, RequestBody, SessionStore};
use teamgrade::services::{
    auth, bonus, feedback, flag, grade, grade_type, notification, project, role, sprint, student, team,
    user, validation_flag,
};

use crate::common::fixtures;
use crate::common::mocks::{anonymous, logged_in};

fn json_body(request: &HttpRequest) -> Value {
    match &request.body {
        Some(RequestBody::Text(text)) => serde_json::from_str(text).unwrap(),
        other => panic!("expected a JSON body, got {other:?}"),
    }
}

fn sent(requests: &[HttpRequest], method: HttpMethod, route: &str) -> Vec<HttpRequest> {
    requests
        .iter()
        .filter(|r| r.method == method && r.url.contains(route))
        .cloned()
        .collect()
}

// =============================================================================
// Teams and sprints
// =============================================================================

#[tokio::test]
async fn test_team_by_user_id_empty_answer_is_none() {
    let h = logged_in();
    h.transport.respond("users/5/team", 200, "\"\"");
    assert_eq!(team::get_team_by_user_id(&h.api, 5).await.unwrap(), None);

    let h = logged_in();
    h.transport.respond("users/5/team", 200, "");
    assert_eq!(team::get_team_by_user_id(&h.api, 5).await.unwrap(), None);
}

#[tokio::test]
async fn test_team_by_user_id_returns_team() {
    let h = logged_in();
    h.transport.ok_json("users/5/team", fixtures::team(2, "Beta"));

    let team = team::get_team_by_user_id(&h.api, 5).await.unwrap().unwrap();
    assert_eq!(team.id, 2);
    assert_eq!(team.leader.map(|l| l.id), Some(40));
}

#[tokio::test]
async fn test_sprints_sorted_by_order() {
    let h = logged_in();
    h.transport.ok_json(
        "sprints",
        json!([
            fixtures::sprint(30, 3, "2024-03-01", "2024-03-14"),
            fixtures::sprint(10, 1, "2024-01-08", "2024-01-19"),
            fixtures::sprint(20, 2, "2024-02-01", "2024-02-14"),
        ]),
    );

    let sprints = sprint::get_sprints(&h.api).await.unwrap();
    let order: Vec<i64> = sprints.iter().map(|s| s.sprint_order).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_graded_sprints_skip_ungraded() {
    let h = logged_in();
    let mut ungraded = fixtures::sprint(20, 2, "2024-02-01", "2024-02-14");
    ungraded["endType"] = json!("UNGRADED_SPRINT");
    h.transport.ok_json(
        "sprints",
        json!([fixtures::sprint(10, 1, "2024-01-08", "2024-01-19"), ungraded]),
    );

    let sprints = sprint::get_graded_sprints(&h.api).await.unwrap();
    assert_eq!(sprints.iter().map(|s| s.id).collect::<Vec<_>>(), vec![10]);
}

#[tokio::test]
async fn test_service_error_carries_pipeline_message() {
    let h = logged_in();
    h.transport.respond("teams/9", 404, "");

    let err = team::get_team_by_id(&h.api, 9).await.unwrap_err();
    assert_eq!(err.message(), "Failed to fetch GET teams/9: 404 Not Found");
}

// =============================================================================
// Notifications
// =============================================================================

#[tokio::test]
async fn test_fan_out_posts_every_recipient_despite_failure() {
    let h = logged_in();
    h.transport
        .respond_to_body("notifications", "\"userToId\":12", 500);

    let result =
        notification::send_notifications_by_users(&h.api, "Équipes créées", &[11, 12, 13], "CREATE_TEAMS")
            .await;

    assert_eq!(
        result.unwrap_err().message(),
        "Failed to fetch POST notifications: 500 Internal Server Error"
    );
    let posts = sent(&h.transport.requests(), HttpMethod::Post, "notifications");
    assert_eq!(posts.len(), 3);

    let mut recipients: Vec<i64> = posts
        .iter()
        .map(|r| json_body(r)["userToId"].as_i64().unwrap())
        .collect();
    recipients.sort_unstable();
    assert_eq!(recipients, vec![11, 12, 13]);
    assert!(posts.iter().all(|r| json_body(r)["userFromId"] == 7));
}

#[tokio::test]
async fn test_fan_out_requires_login() {
    let h = anonymous();

    let result = notification::send_notifications_by_users(&h.api, "hi", &[1], "CREATE_TEAMS").await;

    assert_eq!(result.unwrap_err().message(), "No user logged in");
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn test_notification_marked_checked() {
    let h = logged_in();

    notification::change_state_checked(&h.api, 1).await.unwrap();

    let request = h.transport.last_request();
    assert_eq!(request.method, HttpMethod::Patch);
    assert!(request.url.contains("notifications/1/changeStateChecked"));
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_login_fills_session() {
    let h = anonymous();
    h.transport.ok_json(
        "auth/login",
        json!({ "id": 7, "accessToken": "jwt", "idProject": 3 }),
    );
    h.transport
        .ok_json("users/7/roles", json!(["OPTION_LEADER", "TECHNICAL_COACH"]));
    h.transport
        .ok_json("users/7/permissions", json!(["ADD_GRADE", "VIEW_TEAMS"]));

    auth::login(&h.api, "ann@example.org", "secret").await.unwrap();

    assert_eq!(h.session.token().as_deref(), Some("jwt"));
    assert_eq!(h.session.user_id(), Some(7));
    assert_eq!(h.session.project_id(), Some(3));
    assert_eq!(h.session.role(), Some(RoleType::OptionLeader));
    assert!(user::has_permission(&h.api, &Permission("ADD_GRADE".to_string())));

    let requests = h.transport.requests();
    assert!(requests[0].url.ends_with("auth/login?projectId=0"));
    assert_eq!(json_body(&requests[0]), json!({ "login": "ann@example.org", "password": "secret" }));
    assert_eq!(requests[1].headers.get("Authorization").unwrap(), "Bearer jwt");
    assert!(requests[1].url.ends_with("projectId=3"));
}

#[tokio::test]
async fn test_login_without_role_still_succeeds() {
    let h = anonymous();
    h.transport.ok_json(
        "auth/login",
        json!({ "id": 7, "accessToken": "jwt", "idProject": 3 }),
    );
    h.transport.ok_json("users/7/roles", json!([]));
    h.transport.ok_json("users/7/permissions", json!([]));

    auth::login(&h.api, "ann@example.org", "secret").await.unwrap();

    assert_eq!(h.session.role(), None);
    assert!(h.session.permissions().is_empty());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let h = logged_in();

    auth::logout(&h.api).unwrap();

    assert_eq!(h.session.token(), None);
    assert_eq!(h.session.user_id(), None);
}

// =============================================================================
// Grades
// =============================================================================

fn individual_input(value: f64) -> GradeInput {
    GradeInput {
        grade_type_name: GradeTypeName::IndividualPerformance,
        value: Some(value),
        comment: None,
        student_id: Some(20),
        team_id: None,
        sprint_id: Some(2),
    }
}

#[tokio::test]
async fn test_grade_upsert_updates_existing() {
    let h = logged_in();
    h.transport.ok_json(
        "users/7/rated-grades",
        json!([fixtures::individual_grade(55, 2, 20)]),
    );
    h.transport.ok_json("users/7?", fixtures::user(7, "Coach"));

    grade::create_or_update_grade(&h.api, &individual_input(16.0))
        .await
        .unwrap();

    let requests = h.transport.requests();
    let patches = sent(&requests, HttpMethod::Patch, "grades/55");
    assert_eq!(patches.len(), 1);
    assert_eq!(json_body(&patches[0])["value"], 16.0);
    assert!(sent(&requests, HttpMethod::Post, "/grades?").is_empty());
}

#[tokio::test]
async fn test_grade_upsert_creates_when_missing() {
    let h = logged_in();
    h.transport.ok_json("users/7/rated-grades", json!([]));
    h.transport.ok_json("users/7?", fixtures::user(7, "Coach"));
    h.transport
        .ok_json("grade-types/name", fixtures::grade_type(6, "Performance individuelle"));

    grade::create_or_update_grade(&h.api, &individual_input(12.0))
        .await
        .unwrap();

    let posts = sent(&h.transport.requests(), HttpMethod::Post, "/grades?");
    assert_eq!(posts.len(), 1);
    let body = json_body(&posts[0]);
    assert_eq!(body["gradeTypeId"], 6);
    assert_eq!(body["authorId"], 7);
    assert_eq!(body["studentId"], 20);
}

#[tokio::test]
async fn test_grade_scale_download_is_raw_text() {
    let h = logged_in();
    h.transport
        .ok_json("grade-types/name", fixtures::grade_type(6, "Solution Technique"));
    h.transport
        .respond("grade-types/6/download-grade-scale", 200, "A: 16-20\nB: 12-16");

    let scale = grade_type::download_grade_scale(&h.api, GradeTypeName::TechnicalSolution)
        .await
        .unwrap();

    assert_eq!(scale, "A: 16-20\nB: 12-16");
    let lookup = &h.transport.requests()[0];
    assert!(lookup.url.contains("grade-types/name?name=Solution Technique"));
}

// =============================================================================
// Students, flags, comments
// =============================================================================

#[tokio::test]
async fn test_create_student_uses_selected_project() {
    let h = logged_in();

    student::create_student(
        &h.api,
        NewStudent {
            name: "Eve".to_string(),
            gender: Some(Gender::Woman),
            bachelor: true,
            team_role: None,
            team_id: Some(4),
        },
    )
    .await
    .unwrap();

    let body = json_body(&h.transport.last_request());
    assert_eq!(body["projectId"], 3);
    assert_eq!(body["email"], "");
    assert_eq!(body["password"], "");
    assert_eq!(body["teamId"], 4);
}

#[tokio::test]
async fn test_reporting_flag_about_two_students() {
    let h = logged_in();
    h.transport.ok_json("users/7?", fixtures::user(7, "Coach"));

    flag::create_reporting_flag(&h.api, "Swap please", Some((20, 21)))
        .await
        .unwrap();

    let body = json_body(&h.transport.last_request());
    assert_eq!(body["type"], "REPORTING");
    assert_eq!(body["firstStudentId"], 20);
    assert_eq!(body["secondStudentId"], 21);
    assert_eq!(body["authorId"], 7);
    assert_eq!(body["projectId"], 3);
}

#[tokio::test]
async fn test_no_validation_flag_means_not_validated() {
    let h = logged_in();
    h.transport.ok_json("flags/author/7/type/VALIDATION", json!([]));

    assert!(!flag::user_has_validated_teams(&h.api, 7).await.unwrap());
}

#[tokio::test]
async fn test_author_comments_route_uses_connected_user() {
    let h = logged_in();
    h.transport.ok_json("student-comments", json!([]));

    let comments = feedback::get_team_students_comments_by_sprint_and_author(&h.api, 2, 4)
        .await
        .unwrap();

    assert!(comments.is_empty());
    assert!(
        h.transport
            .last_request()
            .url
            .ends_with("sprints/2/author/7/student-comments?teamId=4&projectId=3")
    );
}

#[tokio::test]
async fn test_update_validation_flag_route_and_body() {
    let h = logged_in();

    validation_flag::update_validation_flag(&h.api, 5, 7, true)
        .await
        .unwrap();

    let request = h.transport.last_request();
    assert_eq!(request.method, HttpMethod::Patch);
    assert!(request.url.contains("flags/5/validation/7?"));
    assert_eq!(json_body(&request), json!({ "confirmed": true, "authorId": 7, "flagId": 5 }));
}

// =============================================================================
// Projects, bonuses, roles
// =============================================================================

#[tokio::test]
async fn test_current_project_requires_selection() {
    let h = anonymous();

    let err = project::get_current_project(&h.api).await.unwrap_err();

    assert_eq!(err.message(), "No project selected");
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn test_bonus_author_is_connected_user() {
    let h = logged_in();
    h.transport.ok_json("users/7?", fixtures::user(7, "Coach"));

    bonus::create_bonus(
        &h.api,
        CreateBonus {
            value: 1.5,
            comment: None,
            limited: true,
            sprint_id: 2,
            student_id: 20,
            author_id: Some(99),
        },
    )
    .await
    .unwrap();

    let request = h.transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    let body = json_body(&request);
    assert_eq!(body["authorId"], 7);
    assert_eq!(body["studentId"], 20);
}

#[tokio::test]
async fn test_create_role_posts_to_email_route() {
    let h = logged_in();

    role::create_role(&h.api, "ann@example.org", &[RoleType::TechnicalCoach])
        .await
        .unwrap();

    let request = h.transport.last_request();
    assert!(request.url.ends_with("roles/ann@example.org?projectId=3"));
    assert_eq!(json_body(&request), json!(["TECHNICAL_COACH"]));
}
