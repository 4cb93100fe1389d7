use axum::extract::{Path, Query};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use vis_portal_shared::attendance::handle::*;

use super::AttendanceRecord;
use crate::account::AuthContext;
use crate::{student, Error};

#[derive(Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Records for one date joined with their students, name ascending.
pub async fn attendance_by_date(
    ctx: AuthContext,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<AttendanceRow>>, Error> {
    ctx.require_admin()?;

    let date = query.date.ok_or(Error::DateRequired)?;
    Ok(Json(super::rows_on(date)))
}

/// Mark or re-mark one student for one date.
pub async fn mark_attendance(
    ctx: AuthContext,
    Json(descriptor): Json<MarkAttendanceDescriptor>,
) -> Result<Json<AttendanceRecord>, Error> {
    ctx.require_admin()?;

    if student::INSTANCE.get(descriptor.student_id).is_none() {
        return Err(Error::StudentNotFound);
    }

    let record = super::INSTANCE.mark(
        descriptor.student_id,
        descriptor.date,
        descriptor.status,
        &ctx.user_id,
    );

    info!(
        "attendance: student {} {:?} on {}",
        record.student_id, record.status, record.date
    );

    Ok(Json(record))
}

/// Mark a whole set of students in one request.
///
/// Every target is validated up front, so an unknown id fails the batch
/// before anything is written.
pub async fn bulk_mark_attendance(
    ctx: AuthContext,
    Json(descriptor): Json<BulkMarkDescriptor>,
) -> Result<Json<serde_json::Value>, Error> {
    ctx.require_admin()?;

    let student_ids = match descriptor.student_ids {
        Some(ids) => {
            for &id in &ids {
                if student::INSTANCE.get(id).is_none() {
                    return Err(Error::StudentNotFound);
                }
            }
            ids
        }
        None => student::INSTANCE.approved_ids(),
    };

    let records =
        super::INSTANCE.mark_many(&student_ids, descriptor.date, descriptor.status, &ctx.user_id);

    info!(
        "attendance: {} students {:?} on {}",
        records.len(),
        descriptor.status,
        descriptor.date
    );

    Ok(Json(json!({ "marked": records.len() })))
}

/// One student's attendance history, newest first.
pub async fn student_history(
    ctx: AuthContext,
    Path(id): Path<i32>,
) -> Result<Json<Vec<AttendanceRecord>>, Error> {
    ctx.require_admin()?;

    if student::INSTANCE.get(id).is_none() {
        return Err(Error::StudentNotFound);
    }

    Ok(Json(super::INSTANCE.history(id)))
}
