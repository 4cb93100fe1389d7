use super::*;

use crate::student::StudentStatus;
use hyper::StatusCode;
use serde_json::json;
use serial_test::serial;

#[serial]
#[tokio::test]
async fn register_is_public_and_pending() {
    reset_all();

    let (status, body) = call(
        "POST",
        "/api/students/register",
        None,
        Some(json!({
            "name": "Ravi Menon",
            "email": "ravi@vis.edu.in",
            "regNo": "VIS-101"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["batch"], "VIS-2025");
    assert_eq!(crate::student::INSTANCE.count(), 1);
}

#[serial]
#[tokio::test]
async fn register_rejects_duplicates() {
    reset_all();
    seed_student(1, "Ravi Menon", StudentStatus::Pending);

    // same email, fresh registration number
    let (status, _) = call(
        "POST",
        "/api/students/register",
        None,
        Some(json!({
            "name": "Someone Else",
            "email": "student1@vis.edu.in",
            "regNo": "VIS-999"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(crate::student::INSTANCE.count(), 1);

    // fresh email, same registration number
    let (status, _) = call(
        "POST",
        "/api/students/register",
        None,
        Some(json!({
            "name": "Someone Else",
            "email": "else@vis.edu.in",
            "regNo": "VIS-001"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(crate::student::INSTANCE.count(), 1);
}

#[serial]
#[tokio::test]
async fn admin_creation_is_approved() {
    reset_all();
    seed_admin("u-admin");

    let (status, body) = call(
        "POST",
        "/api/students",
        Some("u-admin"),
        Some(json!({
            "name": "Meera Iyer",
            "email": "meera@vis.edu.in",
            "regNo": "VIS-102"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");
}

#[serial]
#[tokio::test]
async fn admin_routes_reject_other_roles() {
    reset_all();

    let (status, _) = call("GET", "/api/students", Some("u-nobody"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(
        "POST",
        "/api/students",
        Some("u-nobody"),
        Some(json!({
            "name": "Meera Iyer",
            "email": "meera@vis.edu.in",
            "regNo": "VIS-102"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(crate::student::INSTANCE.count(), 0);
}

#[serial]
#[tokio::test]
async fn pending_list_is_oldest_first() {
    reset_all();
    seed_admin("u-admin");

    let mut early = seed_student(1, "Zoya Khan", StudentStatus::Pending);
    early.created_at = early.created_at - chrono::Duration::hours(2);
    let mut late = seed_student(2, "Arun Das", StudentStatus::Pending);
    late.created_at = late.created_at - chrono::Duration::hours(1);
    let approved = seed_student(3, "Meera Iyer", StudentStatus::Approved);

    crate::student::INSTANCE.reset();
    crate::student::INSTANCE.push(late);
    crate::student::INSTANCE.push(early);
    crate::student::INSTANCE.push(approved);

    let (status, body) = call("GET", "/api/students/pending", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::OK);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Zoya Khan");
    assert_eq!(list[1]["name"], "Arun Das");
}

#[serial]
#[tokio::test]
async fn students_list_is_name_ascending() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Meera Iyer", StudentStatus::Approved);
    seed_student(2, "Arun Das", StudentStatus::Pending);

    let (status, body) = call("GET", "/api/students", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::OK);

    let list = body.as_array().unwrap();
    assert_eq!(list[0]["name"], "Arun Das");
    assert_eq!(list[1]["name"], "Meera Iyer");
}

#[serial]
#[tokio::test]
async fn status_follows_allowed_transitions() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Pending);

    let (status, body) = call(
        "PATCH",
        "/api/students/1/status",
        Some("u-admin"),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");

    // re-asserting the current status is a no-op
    let (status, _) = call(
        "PATCH",
        "/api/students/1/status",
        Some("u-admin"),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // approval can still be revoked
    let (status, _) = call(
        "PATCH",
        "/api/students/1/status",
        Some("u-admin"),
        Some(json!({ "status": "rejected" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // rejection is terminal
    let (status, _) = call(
        "PATCH",
        "/api/students/1/status",
        Some("u-admin"),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        crate::student::INSTANCE.get(1).unwrap().status,
        StudentStatus::Rejected
    );
}

#[serial]
#[tokio::test]
async fn edit_merges_fields() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);
    seed_student(2, "Meera Iyer", StudentStatus::Approved);

    let (status, body) = call(
        "PATCH",
        "/api/students/1",
        Some("u-admin"),
        Some(json!({ "name": "Ravi K. Menon" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ravi K. Menon");
    assert_eq!(body["regNo"], "VIS-001");

    // taking another student's registration number fails
    let (status, _) = call(
        "PATCH",
        "/api/students/1",
        Some("u-admin"),
        Some(json!({ "regNo": "VIS-002" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(crate::student::INSTANCE.get(1).unwrap().reg_no, "VIS-001");
}

#[serial]
#[tokio::test]
async fn remove_deletes_exactly_one() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);
    seed_student(2, "Meera Iyer", StudentStatus::Approved);

    let (status, _) = call("DELETE", "/api/students/1", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::OK);

    assert!(crate::student::INSTANCE.get(1).is_none());
    assert!(crate::student::INSTANCE.get(2).is_some());

    let (status, _) = call("DELETE", "/api/students/1", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
