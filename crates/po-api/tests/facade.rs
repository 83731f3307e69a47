//! Every facade operation against a recording transport: one request, the
//! documented method and path, and the payload untouched.

mod common;

use common::{url, RecordingTransport};
use po_api::{ApiError, ApiRequest, ApiResponse, HttpMethod, PoApiClient, TransportError};
use serde_json::json;
use std::future::Future;

/// Run one operation on a fresh client and return the single request it sent
async fn capture<F, Fut>(op: F) -> ApiRequest
where
    F: FnOnce(PoApiClient) -> Fut,
    Fut: Future<Output = po_api::Result<ApiResponse>>,
{
    let transport = RecordingTransport::ok();
    op(transport.client()).await.unwrap();
    let mut requests = transport.requests();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

fn assert_route(request: &ApiRequest, method: HttpMethod, path: &str) {
    assert_eq!(request.method, method);
    assert_eq!(request.url.as_str(), url(path));
}

#[tokio::test]
async fn test_course_endpoints() {
    let req = capture(|c| async move { c.get_courses().await }).await;
    assert_route(&req, HttpMethod::Get, "courses/");
    assert!(req.body.is_none());

    let req = capture(|c| async move { c.get_course(42).await }).await;
    assert_route(&req, HttpMethod::Get, "courses/42/");

    let req = capture(|c| async move { c.get_course_detail(42).await }).await;
    assert_route(&req, HttpMethod::Get, "courses/42/detail/");

    let req = capture(|c| async move { c.create_course(&json!({"name": "X"})).await }).await;
    assert_route(&req, HttpMethod::Post, "courses/");

    let req = capture(|c| async move { c.delete_course(42).await }).await;
    assert_route(&req, HttpMethod::Delete, "courses/42/");
    assert!(req.body.is_none());

    let req = capture(|c| async move { c.get_course_learning_outcomes(7).await }).await;
    assert_route(&req, HttpMethod::Get, "courses/7/learning_outcomes/");
}

#[tokio::test]
async fn test_program_outcome_endpoints() {
    let req = capture(|c| async move { c.get_program_outcomes().await }).await;
    assert_route(&req, HttpMethod::Get, "program-outcomes/");

    let req = capture(|c| async move {
        c.create_program_outcome(&json!({"code": "PO1", "description": "Math"}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Post, "program-outcomes/");

    let req = capture(|c| async move {
        c.update_program_outcome(3, &json!({"description": "Updated"}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Patch, "program-outcomes/3/");
    assert_eq!(req.body, Some(json!({"description": "Updated"})));

    let req = capture(|c| async move { c.delete_program_outcome(3).await }).await;
    assert_route(&req, HttpMethod::Delete, "program-outcomes/3/");
}

#[tokio::test]
async fn test_learning_outcome_endpoints() {
    let req = capture(|c| async move { c.get_learning_outcomes().await }).await;
    assert_route(&req, HttpMethod::Get, "learning-outcomes/");

    let req = capture(|c| async move { c.get_learning_outcome(5).await }).await;
    assert_route(&req, HttpMethod::Get, "learning-outcomes/5/");

    let req = capture(|c| async move {
        c.create_learning_outcome(&json!({"course": 1, "code": "LO1", "description": "d"}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Post, "learning-outcomes/");

    let req = capture(|c| async move {
        c.update_learning_outcome(5, &json!({"weight": 2.0})).await
    })
    .await;
    assert_route(&req, HttpMethod::Patch, "learning-outcomes/5/");

    let req = capture(|c| async move { c.delete_learning_outcome(5).await }).await;
    assert_route(&req, HttpMethod::Delete, "learning-outcomes/5/");

    let req = capture(|c| async move { c.get_lo_mappings(5).await }).await;
    assert_route(&req, HttpMethod::Get, "learning-outcomes/5/mappings/");

    let req = capture(|c| async move {
        c.create_lo_mapping(5, &json!({"program_outcome": 2})).await
    })
    .await;
    assert_route(&req, HttpMethod::Post, "learning-outcomes/5/mappings/");
    assert_eq!(req.body, Some(json!({"program_outcome": 2})));
}

#[tokio::test]
async fn test_lo_to_po_mapping_endpoints() {
    let req = capture(|c| async move { c.get_mappings().await }).await;
    assert_route(&req, HttpMethod::Get, "mappings/");

    let req = capture(|c| async move { c.create_mapping(&json!({"x": 1})).await }).await;
    assert_route(&req, HttpMethod::Post, "mappings/");

    let req = capture(|c| async move {
        c.update_mapping(8, &json!({"contribution_weight": 0.4})).await
    })
    .await;
    assert_route(&req, HttpMethod::Patch, "mappings/8/");

    let req = capture(|c| async move { c.delete_mapping(8).await }).await;
    assert_route(&req, HttpMethod::Delete, "mappings/8/");
}

#[tokio::test]
async fn test_student_endpoints() {
    let req = capture(|c| async move { c.get_students().await }).await;
    assert_route(&req, HttpMethod::Get, "students/");

    let req = capture(|c| async move { c.get_student(11).await }).await;
    assert_route(&req, HttpMethod::Get, "students/11/");

    let req = capture(|c| async move {
        c.create_student(&json!({"username": "ayse", "student_number": "2021001"}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Post, "students/");

    let req = capture(|c| async move { c.get_student_po_scores(11).await }).await;
    assert_route(&req, HttpMethod::Get, "students/11/po_scores/");

    let req = capture(|c| async move { c.get_student_grades(11).await }).await;
    assert_route(&req, HttpMethod::Get, "students/11/grades/");
}

#[tokio::test]
async fn test_assessment_and_grade_endpoints() {
    let req = capture(|c| async move { c.get_assessments().await }).await;
    assert_route(&req, HttpMethod::Get, "assessments/");

    let req = capture(|c| async move {
        c.create_assessment(&json!({"course": 1, "name": "Quiz 1", "total_points": 10}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Post, "assessments/");

    let req = capture(|c| async move { c.get_grades().await }).await;
    assert_route(&req, HttpMethod::Get, "grades/");

    let req = capture(|c| async move {
        c.create_grade(&json!({"assessment": 1, "student": 2, "points": 8.5}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Post, "grades/");
}

#[tokio::test]
async fn test_assessment_to_lo_mapping_endpoints() {
    let req = capture(|c| async move { c.get_assessment_to_lo_mappings().await }).await;
    assert_route(&req, HttpMethod::Get, "assessment-to-lo-mappings/");

    let req = capture(|c| async move {
        c.create_assessment_to_lo_mapping(&json!({"assessment": 1, "learning_outcome": 2}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Post, "assessment-to-lo-mappings/");

    let req = capture(|c| async move {
        c.update_assessment_to_lo_mapping(4, &json!({"contribution_weight": 60}))
            .await
    })
    .await;
    assert_route(&req, HttpMethod::Patch, "assessment-to-lo-mappings/4/");

    let req = capture(|c| async move { c.delete_assessment_to_lo_mapping(4).await }).await;
    assert_route(&req, HttpMethod::Delete, "assessment-to-lo-mappings/4/");
}

#[tokio::test]
async fn test_chat_wraps_message() {
    let req = capture(|c| async move { c.chat_with_gemini("hi").await }).await;
    assert_route(&req, HttpMethod::Post, "chat/");
    assert_eq!(req.body, Some(json!({"message": "hi"})));
}

#[tokio::test]
async fn test_body_is_passed_through_unchanged() {
    let payload = json!({"name": "X"});
    let req = capture(|c| async move { c.create_course(&json!({"name": "X"})).await }).await;
    assert_eq!(req.body, Some(payload));

    let nested = json!({
        "code": "CSE311",
        "extra": {"unknown": [1, 2, 3], "flag": null}
    });
    let sent = nested.clone();
    let req = capture(|c| async move { c.create_course(&sent).await }).await;
    assert_eq!(req.body, Some(nested));
}

#[tokio::test]
async fn test_typed_payload_serializes_only_set_fields() {
    let course = po_core::NewCourse {
        code: "CSE321".to_string(),
        name: "Databases".to_string(),
        semester: Some("Fall".to_string()),
        ..Default::default()
    };
    let req = capture(|c| async move { c.create_course(&course).await }).await;
    assert_eq!(
        req.body,
        Some(json!({"code": "CSE321", "name": "Databases", "semester": "Fall"}))
    );
}

#[tokio::test]
async fn test_alias_pairs_issue_identical_requests() {
    let a = capture(|c| async move { c.get_mappings().await }).await;
    let b = capture(|c| async move { c.get_lo_to_po_mappings().await }).await;
    assert_eq!(a, b);

    let body = json!({"learning_outcome": 1, "program_outcome": 2});
    let (first, second) = (body.clone(), body.clone());
    let a = capture(|c| async move { c.create_mapping(&first).await }).await;
    let b = capture(|c| async move { c.create_lo_to_po_mapping(&second).await }).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_default_content_type_header_on_every_request() {
    let transport = RecordingTransport::ok();
    let client = transport.client();
    client.get_courses().await.unwrap();
    client.delete_course(1).await.unwrap();
    client.chat_with_gemini("x").await.unwrap();

    for request in transport.requests() {
        assert!(request
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/json"));
    }
}

#[tokio::test]
async fn test_string_identifier_is_encoded_as_one_segment() {
    let req = capture(|c| async move { c.get_student("a b").await }).await;
    assert_eq!(req.url.as_str(), url("students/a%20b/"));
}

#[tokio::test]
async fn test_transport_failure_propagates_without_retry() {
    let transport = RecordingTransport::failing();
    let client = transport.client();

    let result = client.get_course(1).await;

    assert!(matches!(
        result,
        Err(ApiError::Transport(TransportError::Connect(_)))
    ));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_non_success_status_resolves() {
    let transport =
        RecordingTransport::responding(ApiResponse::new(404, r#"{"detail": "Not found."}"#));
    let client = transport.client();

    let response = client.get_course(999).await.unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    assert_eq!(response.json_value().unwrap(), json!({"detail": "Not found."}));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let transport = RecordingTransport::ok();
    let client = transport.client();
    let other = client.clone();

    let (a, b, c) = tokio::join!(
        client.get_courses(),
        other.get_students(),
        client.get_grades()
    );
    assert!(a.is_ok() && b.is_ok() && c.is_ok());

    let mut paths: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    paths.sort();
    assert_eq!(paths, vec!["/api/courses/", "/api/grades/", "/api/students/"]);
}
