use axum::Json;
use chrono::Utc;

use vis_portal_shared::attendance::AttendanceStatus;
use vis_portal_shared::dashboard::DashboardStats;

use crate::account::AuthContext;
use crate::{attendance, schedule, student, Error};

/// Aggregate counters, recomputed on every request.
pub async fn stats(ctx: AuthContext) -> Result<Json<DashboardStats>, Error> {
    ctx.require_admin()?;

    let today = Utc::now().date_naive();

    Ok(Json(DashboardStats {
        total_students: student::INSTANCE.count(),
        present_today: attendance::rows_on(today)
            .iter()
            .filter(|row| row.record.status == AttendanceStatus::Present)
            .count(),
        pending_approvals: student::INSTANCE.pending().len(),
        upcoming_events: schedule::INSTANCE.on_date(today).len(),
    }))
}
