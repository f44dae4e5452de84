//! Integration tests for the HTTP API.
//!
//! Drives the full router (middleware included) against the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use skills_gap_analyzer::adapters::http::{app_router, AppState};
use skills_gap_analyzer::adapters::InMemoryWorkforceStore;
use skills_gap_analyzer::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> (InMemoryWorkforceStore, Router) {
    let store = InMemoryWorkforceStore::new();
    let router = app_router(
        AppState::new(Arc::new(store.clone())),
        &ServerConfig::default(),
    );
    (store, router)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_skill(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/skills",
        Some(json!({"name": name, "category": "Technical"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

async fn create_employee(app: &Router, code: &str, role_id: Option<&str>) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "employee_id": code,
            "first_name": "Test",
            "last_name": code,
            "email": format!("{}@example.com", code.to_lowercase()),
            "department": "Analytics",
            "role_id": role_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

async fn assign(app: &Router, employee_id: &str, skill_id: &str, level: i32) {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/api/employees/{employee_id}/skills"),
        Some(json!({"skill_id": skill_id, "proficiency_level": level})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

struct Workforce {
    analyst: String,
    unassigned: String,
}

/// Python required 5 (held 2), SQL required 3 (held 4), Excel required 2 (held 1).
async fn seed(app: &Router) -> Workforce {
    let python = create_skill(app, "Python").await;
    let sql = create_skill(app, "SQL").await;
    let excel = create_skill(app, "Excel").await;

    let (status, role) = send(
        app,
        Method::POST,
        "/api/roles",
        Some(json!({
            "title": "Data Analyst",
            "department": "Analytics",
            "required_skills": [
                {"skill_id": python, "required_level": 5},
                {"skill_id": sql, "required_level": 3},
                {"skill_id": excel, "required_level": 2}
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{role}");
    let role_id = role["id"].as_str().unwrap().to_string();

    let analyst = create_employee(app, "EMP001", Some(&role_id)).await;
    assign(app, &analyst, &python, 2).await;
    assign(app, &analyst, &sql, 4).await;
    assign(app, &analyst, &excel, 1).await;

    let unassigned = create_employee(app, "EMP002", None).await;
    assign(app, &unassigned, &python, 1).await;

    Workforce {
        analyst,
        unassigned,
    }
}

// =============================================================================
// Health and errors
// =============================================================================

#[tokio::test]
async fn health_check_reports_healthy() {
    let (_, app) = app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Employee Skills Gap Analyzer API is running");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (_, app) = app();
    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let (_, app) = app();
    let (status, body) = send(&app, Method::GET, "/api/employees/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

// =============================================================================
// Employees
// =============================================================================

#[tokio::test]
async fn duplicate_employee_code_conflicts() {
    let (_, app) = app();
    create_employee(&app, "EMP001", None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "employee_id": "EMP001",
            "first_name": "Other",
            "last_name": "Person",
            "email": "other@example.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "EMPLOYEE_EXISTS");
}

#[tokio::test]
async fn employee_missing_required_fields_is_rejected() {
    let (_, app) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({"employee_id": "EMP009", "first_name": "No"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn out_of_range_proficiency_is_rejected() {
    let (_, app) = app();
    let skill = create_skill(&app, "Python").await;
    let employee = create_employee(&app, "EMP001", None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/employees/{employee}/skills"),
        Some(json!({"skill_id": skill, "proficiency_level": 6})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn employee_detail_includes_skills_and_role() {
    let (_, app) = app();
    let workforce = seed(&app).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/employees/{}", workforce.analyst),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role_title"], "Data Analyst");
    assert_eq!(body["skills"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn deleted_employee_is_gone() {
    let (_, app) = app();
    let employee = create_employee(&app, "EMP001", None).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/employees/{employee}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &format!("/api/employees/{employee}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Gap analysis
// =============================================================================

#[tokio::test]
async fn analysis_with_empty_body_covers_everyone() {
    let (_, app) = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::POST, "/api/analysis/gaps", None).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Skill gap analysis completed");
    assert_eq!(body["analyzed_employees"], 2);
    assert_eq!(body["total_gaps_found"], 2);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn repeated_analysis_keeps_one_record_per_pair() {
    let (store, app) = app();
    let workforce = seed(&app).await;

    for _ in 0..2 {
        let (status, _) = send(&app, Method::POST, "/api/analysis/gaps", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(store.gap_record_count().await, 3);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/analysis/gaps/{}", workforce.analyst),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skill_gaps"].as_array().unwrap().len(), 3);
    assert_eq!(body["total_gaps"], 2);
    assert_eq!(body["high_priority_gaps"], 1);
}

#[tokio::test]
async fn employee_without_role_has_no_gaps() {
    let (_, app) = app();
    let workforce = seed(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/analysis/gaps",
        Some(json!({"employee_id": workforce.unassigned})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analyzed_employees"], 1);
    assert_eq!(body["total_gaps_found"], 0);

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/analysis/gaps/{}", workforce.unassigned),
        None,
    )
    .await;
    assert_eq!(body["total_gaps"], 0);
}

#[tokio::test]
async fn analysis_of_unknown_employee_is_not_found() {
    let (_, app) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/analysis/gaps",
        Some(json!({"employee_id": "00000000-0000-0000-0000-000000000001"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn recommendations_are_ranked_by_priority() {
    let (_, app) = app();
    seed(&app).await;
    send(&app, Method::POST, "/api/analysis/gaps", None).await;

    let (status, body) = send(&app, Method::POST, "/api/analysis/recommendations", None).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0]["skill_name"], "Python");
    assert_eq!(recs[0]["priority"], "High");
    assert_eq!(recs[1]["skill_name"], "Excel");
    assert_eq!(recs[1]["priority"], "Medium");
    assert_eq!(body["total_employees_needing_training"], 1);
    assert_eq!(body["total_training_hours"], 80);
}

#[tokio::test]
async fn recommendations_can_be_filtered_by_priority() {
    let (_, app) = app();
    seed(&app).await;
    send(&app, Method::POST, "/api/analysis/gaps", None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/analysis/recommendations",
        Some(json!({"priority": "medium"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["skill_name"], "Excel");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/analysis/recommendations",
        Some(json!({"priority": "urgent"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn predictions_cover_deficits_only() {
    let (_, app) = app();
    let workforce = seed(&app).await;
    send(&app, Method::POST, "/api/analysis/gaps", None).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/analysis/predictions/{}", workforce.analyst),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["employee_name"], "Test EMP001");
    let predictions = body["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 2);
    assert_eq!(body["total_training_hours"], 80);

    let python = predictions
        .iter()
        .find(|p| p["skill_name"] == "Python")
        .unwrap();
    assert_eq!(python["predicted_training_hours"], 60);
    assert_eq!(python["success_probability"], 0.7);
}
