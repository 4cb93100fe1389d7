use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde::Serialize;
use vis_portal_shared::student::StudentStatus;

pub mod config;

pub mod account;
pub mod admin;
pub mod attendance;
pub mod dashboard;
pub mod highlight;
pub mod schedule;
pub mod student;

#[cfg(test)]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("identity headers missing or malformed")]
    IdentityMissing,
    #[error("admin access required")]
    AdminRequired,

    #[error("student email already registered")]
    StudentEmailTaken,
    #[error("registration number already registered")]
    RegNoTaken,
    #[error("admin email already registered")]
    AdminEmailTaken,

    #[error("target student not found")]
    StudentNotFound,
    #[error("target admin not found")]
    AdminNotFound,
    #[error("target highlight not found")]
    HighlightNotFound,
    #[error("target event not found")]
    EventNotFound,

    #[error("student status cannot change from {0} to {1}")]
    StatusTransition(StudentStatus, StudentStatus),
    #[error("date query parameter required")]
    DateRequired,
}

impl Error {
    pub fn to_status_code(&self) -> StatusCode {
        match self {
            Error::IdentityMissing | Error::AdminRequired => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> axum::response::Response {
        #[derive(Serialize)]
        struct ErrorInfo {
            message: String,
        }
        (
            self.to_status_code(),
            axum::Json(ErrorInfo {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Construct a router.
pub fn router() -> axum::Router {
    axum::Router::new()
        // identity
        .route("/api/auth/user", get(account::handle::auth_user))
        // students
        .route(
            "/api/students/register",
            post(student::handle::register_student),
        )
        .route(
            "/api/students",
            get(student::handle::list_students).post(student::handle::make_student),
        )
        .route(
            "/api/students/pending",
            get(student::handle::list_pending_students),
        )
        .route(
            "/api/students/:id/status",
            patch(student::handle::set_student_status),
        )
        .route(
            "/api/students/:id",
            patch(student::handle::edit_student).delete(student::handle::remove_student),
        )
        .route(
            "/api/students/:id/attendance",
            get(attendance::handle::student_history),
        )
        // admins
        .route(
            "/api/admins",
            get(admin::handle::list_admins).post(admin::handle::make_admin),
        )
        .route("/api/admins/:id", delete(admin::handle::remove_admin))
        // attendance
        .route(
            "/api/attendance",
            get(attendance::handle::attendance_by_date).post(attendance::handle::mark_attendance),
        )
        .route(
            "/api/attendance/bulk",
            post(attendance::handle::bulk_mark_attendance),
        )
        // highlights
        .route(
            "/api/highlights",
            get(highlight::handle::list_highlights).post(highlight::handle::new_highlight),
        )
        .route(
            "/api/highlights/:id",
            patch(highlight::handle::edit_highlight).delete(highlight::handle::remove_highlight),
        )
        // schedule
        .route(
            "/api/schedule",
            get(schedule::handle::list_events).post(schedule::handle::new_event),
        )
        .route(
            "/api/schedule/:id",
            patch(schedule::handle::edit_event).delete(schedule::handle::remove_event),
        )
        // dashboard
        .route("/api/dashboard/stats", get(dashboard::stats))
}
