use super::*;

use hyper::StatusCode;
use serial_test::serial;
use tower::ServiceExt;

#[serial]
#[tokio::test]
async fn resolve_without_identity() {
    reset_all();

    let (status, _) = call("GET", "/api/auth/user", None, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[serial]
#[tokio::test]
async fn resolve_pending_and_upsert() {
    reset_all();

    let request = hyper::Request::builder()
        .uri("/api/auth/user")
        .method("GET")
        .header("X-User-Id", "u-new")
        .header("X-User-Email", "dev@vis.edu.in")
        .header("X-User-First-Name", "Devika")
        .header("X-User-Last-Name", "Nair")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = crate::router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value =
        serde_json::from_slice(&hyper::body::to_bytes(response.into_body()).await.unwrap())
            .unwrap();

    assert_eq!(body["id"], "u-new");
    assert_eq!(body["role"], "pending");
    assert_eq!(body["firstName"], "Devika");
    assert!(body["profile"].is_null());

    // the stored record mirrors the headers
    let user = crate::account::INSTANCE.get("u-new").unwrap();
    assert_eq!(user.email.unwrap().to_string(), "dev@vis.edu.in");

    // a later login with changed claims refreshes the same record
    let request = hyper::Request::builder()
        .uri("/api/auth/user")
        .method("GET")
        .header("X-User-Id", "u-new")
        .header("X-User-First-Name", "Dev")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = crate::router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let user = crate::account::INSTANCE.get("u-new").unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Dev"));
    assert!(user.email.is_none());
}

#[serial]
#[tokio::test]
async fn resolve_admin() {
    reset_all();
    seed_admin("u-admin");

    let (status, body) = call("GET", "/api/auth/user", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["profile"]["name"], "Asha Pillai");
}

#[serial]
#[tokio::test]
async fn resolve_student() {
    reset_all();

    let mut student = seed_student(7, "Ravi Menon", crate::student::StudentStatus::Approved);
    student.user_id = Some("u-ravi".to_string());
    crate::student::INSTANCE.reset();
    crate::student::INSTANCE.push(student);

    let (status, body) = call("GET", "/api/auth/user", Some("u-ravi"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "student");
    assert_eq!(body["profile"]["regNo"], "VIS-007");
}
