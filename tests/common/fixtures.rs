//! Backend JSON payloads

use serde_json::{Value, json};

pub fn project(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Projet 2024",
        "nbTeams": "6",
        "nbWomen": 1,
        "phase": "PUBLISHED",
        "actual": true
    })
}

pub fn user(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "email": format!("{}@example.org", name.to_lowercase()) })
}

pub fn team(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "project": project(3),
        "leader": user(40, "Leader")
    })
}

pub fn sprint(id: i64, order: i64, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "startDate": start,
        "endDate": end,
        "endType": "NORMAL_SPRINT",
        "sprintOrder": order,
        "project": project(3)
    })
}

pub fn student(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.org", name.to_lowercase()),
        "gender": "WOMAN",
        "bachelor": false,
        "project": project(3)
    })
}

pub fn grade_type(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "factor": 0.3,
        "forGroup": false,
        "imported": false,
        "project": project(3)
    })
}

pub fn individual_grade(id: i64, sprint_id: i64, student_id: i64) -> Value {
    json!({
        "id": id,
        "value": "14",
        "comment": null,
        "gradeType": grade_type(6, "Performance individuelle"),
        "author": user(7, "Coach"),
        "student": student(student_id, "Eve"),
        "sprint": sprint(sprint_id, 1, "2024-01-08", "2024-01-19"),
        "confirmed": false
    })
}
