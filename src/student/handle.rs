use axum::extract::Path;
use axum::Json;
use serde_json::json;
use tracing::info;

pub use vis_portal_shared::student::handle::*;

use super::{Student, StudentStatus};
use crate::account::AuthContext;
use crate::Error;

/// Public self-registration. The record always starts out pending review.
pub async fn register_student(
    Json(descriptor): Json<RegisterStudentDescriptor>,
) -> Result<Json<Student>, Error> {
    let student = super::INSTANCE.insert(
        None,
        descriptor.name,
        descriptor.email,
        descriptor.reg_no,
        descriptor.batch,
        StudentStatus::Pending,
    )?;

    info!(
        "student registered: {} ({}), awaiting approval",
        student.name, student.reg_no
    );

    Ok(Json(student))
}

/// Admin-side creation, skipping the review queue.
pub async fn make_student(
    ctx: AuthContext,
    Json(descriptor): Json<MakeStudentDescriptor>,
) -> Result<Json<Student>, Error> {
    ctx.require_admin()?;

    let student = super::INSTANCE.insert(
        descriptor.user_id,
        descriptor.name,
        descriptor.email,
        descriptor.reg_no,
        descriptor.batch,
        StudentStatus::Approved,
    )?;

    info!("student created by admin: {} ({})", student.name, student.reg_no);

    Ok(Json(student))
}

pub async fn list_students(ctx: AuthContext) -> Result<Json<Vec<Student>>, Error> {
    ctx.require_admin()?;
    Ok(Json(super::INSTANCE.all()))
}

pub async fn list_pending_students(ctx: AuthContext) -> Result<Json<Vec<Student>>, Error> {
    ctx.require_admin()?;
    Ok(Json(super::INSTANCE.pending()))
}

pub async fn set_student_status(
    ctx: AuthContext,
    Path(id): Path<i32>,
    Json(descriptor): Json<SetStudentStatusDescriptor>,
) -> Result<Json<Student>, Error> {
    ctx.require_admin()?;

    let student = super::INSTANCE.set_status(id, descriptor.status)?;
    info!("student {} is now {}", student.id, student.status);
    Ok(Json(student))
}

pub async fn edit_student(
    ctx: AuthContext,
    Path(id): Path<i32>,
    Json(descriptor): Json<EditStudentDescriptor>,
) -> Result<Json<Student>, Error> {
    ctx.require_admin()?;

    let student = super::INSTANCE.edit(id, descriptor)?;
    info!("student {} updated", student.id);
    Ok(Json(student))
}

pub async fn remove_student(
    ctx: AuthContext,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, Error> {
    ctx.require_admin()?;

    super::INSTANCE.remove(id)?;
    info!("student {} removed", id);
    Ok(Json(json!({ "message": "student removed" })))
}
