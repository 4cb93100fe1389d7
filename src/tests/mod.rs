mod account;
mod attendance;
mod student;

use axum::http;
use chrono::Utc;
use tower::ServiceExt;

/// Reset all static instances.
fn reset_all() {
    crate::account::INSTANCE.reset();
    crate::admin::INSTANCE.reset();
    crate::student::INSTANCE.reset();
    crate::attendance::INSTANCE.reset();
    crate::highlight::INSTANCE.reset();
    crate::schedule::INSTANCE.reset();
}

/// Seed an admin linked to the given identity.
fn seed_admin(user_id: &str) {
    let now = Utc::now();
    crate::admin::INSTANCE.push(crate::admin::Admin {
        id: 1,
        user_id: Some(user_id.to_string()),
        name: "Asha Pillai".to_string(),
        email: lettre::Address::new("asha", "vis.edu.in").unwrap(),
        role: crate::admin::AdminRole::Admin,
        created_at: now,
        updated_at: now,
    });
}

/// Seed a student record and return it.
fn seed_student(
    id: i32,
    name: &str,
    status: crate::student::StudentStatus,
) -> crate::student::Student {
    let now = Utc::now();
    let student = crate::student::Student {
        id,
        user_id: None,
        name: name.to_string(),
        email: lettre::Address::new(format!("student{id}"), "vis.edu.in").unwrap(),
        reg_no: format!("VIS-{id:03}"),
        batch: crate::student::DEFAULT_BATCH.to_string(),
        status,
        created_at: now,
        updated_at: now,
    };
    crate::student::INSTANCE.push(student.clone());
    student
}

/// Drive the router with one request and decode the JSON response.
async fn call(
    method: &str,
    uri: &str,
    user_id: Option<&str>,
    body: Option<serde_json::Value>,
) -> (hyper::StatusCode, serde_json::Value) {
    let mut builder = hyper::Request::builder().uri(uri).method(method);
    if let Some(user_id) = user_id {
        builder = builder.header("X-User-Id", user_id);
    }

    let request = match body {
        Some(body) => builder
            .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(serde_json::to_vec(&body).unwrap().into())
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let response = crate::router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
