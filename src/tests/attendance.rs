use super::*;

use crate::attendance::AttendanceStatus;
use crate::student::StudentStatus;
use hyper::StatusCode;
use serde_json::json;
use serial_test::serial;

#[serial]
#[tokio::test]
async fn mark_inserts_once() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);

    let (status, body) = call(
        "POST",
        "/api/attendance",
        Some("u-admin"),
        Some(json!({ "studentId": 1, "date": "2025-01-01", "status": "present" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "present");
    assert_eq!(body["markedBy"], "u-admin");
    assert_eq!(crate::attendance::INSTANCE.records.read().len(), 1);
}

#[serial]
#[tokio::test]
async fn mark_is_idempotent_per_pair() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);

    for _ in 0..2 {
        let (status, _) = call(
            "POST",
            "/api/attendance",
            Some("u-admin"),
            Some(json!({ "studentId": 1, "date": "2025-01-01", "status": "present" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let records = crate::attendance::INSTANCE.records.read();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Present);
}

#[serial]
#[tokio::test]
async fn remark_takes_latest_status() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);

    for status_name in ["present", "absent"] {
        let (status, _) = call(
            "POST",
            "/api/attendance",
            Some("u-admin"),
            Some(json!({ "studentId": 1, "date": "2025-01-01", "status": status_name })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let records = crate::attendance::INSTANCE.records.read();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Absent);
}

#[serial]
#[tokio::test]
async fn mark_unknown_student_fails() {
    reset_all();
    seed_admin("u-admin");

    let (status, _) = call(
        "POST",
        "/api/attendance",
        Some("u-admin"),
        Some(json!({ "studentId": 9, "date": "2025-01-01", "status": "present" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(crate::attendance::INSTANCE.records.read().is_empty());
}

#[serial]
#[tokio::test]
async fn by_date_filters_and_orders_by_name() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Meera Iyer", StudentStatus::Approved);
    seed_student(2, "Arun Das", StudentStatus::Approved);
    seed_student(3, "Zoya Khan", StudentStatus::Approved);

    for (student_id, date) in [(1, "2025-01-01"), (2, "2025-01-01"), (3, "2025-01-02")] {
        let (status, _) = call(
            "POST",
            "/api/attendance",
            Some("u-admin"),
            Some(json!({ "studentId": student_id, "date": date, "status": "present" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = call(
        "GET",
        "/api/attendance?date=2025-01-01",
        Some("u-admin"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["student"]["name"], "Arun Das");
    assert_eq!(rows[1]["student"]["name"], "Meera Iyer");
    assert_eq!(rows[0]["date"], "2025-01-01");
}

#[serial]
#[tokio::test]
async fn by_date_requires_the_parameter() {
    reset_all();
    seed_admin("u-admin");

    let (status, _) = call("GET", "/api/attendance", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[serial]
#[tokio::test]
async fn bulk_mark_defaults_to_approved_students() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);
    seed_student(2, "Meera Iyer", StudentStatus::Approved);
    seed_student(3, "Zoya Khan", StudentStatus::Pending);

    let (status, body) = call(
        "POST",
        "/api/attendance/bulk",
        Some("u-admin"),
        Some(json!({ "date": "2025-01-01", "status": "present" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["marked"], 2);

    let records = crate::attendance::INSTANCE.records.read();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.student_id != 3));
}

#[serial]
#[tokio::test]
async fn bulk_mark_is_all_or_nothing() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);

    let (status, _) = call(
        "POST",
        "/api/attendance/bulk",
        Some("u-admin"),
        Some(json!({ "date": "2025-01-01", "status": "present", "studentIds": [1, 99] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(crate::attendance::INSTANCE.records.read().is_empty());
}

#[serial]
#[tokio::test]
async fn history_is_newest_first() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);

    for date in ["2025-01-01", "2025-01-03", "2025-01-02"] {
        let (status, _) = call(
            "POST",
            "/api/attendance",
            Some("u-admin"),
            Some(json!({ "studentId": 1, "date": date, "status": "present" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = call("GET", "/api/students/1/attendance", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::OK);

    let dates: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, ["2025-01-03", "2025-01-02", "2025-01-01"]);
}

#[serial]
#[tokio::test]
async fn deleting_a_student_keeps_other_rows() {
    reset_all();
    seed_admin("u-admin");
    seed_student(1, "Ravi Menon", StudentStatus::Approved);
    seed_student(2, "Meera Iyer", StudentStatus::Approved);

    for student_id in [1, 2] {
        let (status, _) = call(
            "POST",
            "/api/attendance",
            Some("u-admin"),
            Some(json!({ "studentId": student_id, "date": "2025-01-01", "status": "present" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = call("DELETE", "/api/students/1", Some("u-admin"), None).await;
    assert_eq!(status, StatusCode::OK);

    // no cascade: both rows survive, but only the remaining student joins
    assert_eq!(crate::attendance::INSTANCE.records.read().len(), 2);

    let (status, body) = call(
        "GET",
        "/api/attendance?date=2025-01-01",
        Some("u-admin"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student"]["name"], "Meera Iyer");
}

#[serial]
#[tokio::test]
async fn marking_requires_admin() {
    reset_all();

    let (status, _) = call(
        "POST",
        "/api/attendance",
        Some("u-nobody"),
        Some(json!({ "studentId": 1, "date": "2025-01-01", "status": "present" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(crate::attendance::INSTANCE.records.read().is_empty());
}
