use axum::extract::{Path, Query};
use axum::Json;
use serde_json::json;
use tracing::info;

pub use vis_portal_shared::schedule::handle::*;

use super::ScheduleEvent;
use crate::account::AuthContext;
use crate::attendance::handle::DateQuery;
use crate::Error;

/// Readable by every authenticated caller; `?date=` narrows to one day.
pub async fn list_events(
    _ctx: AuthContext,
    Query(query): Query<DateQuery>,
) -> Json<Vec<ScheduleEvent>> {
    Json(match query.date {
        Some(date) => super::INSTANCE.on_date(date),
        None => super::INSTANCE.all(),
    })
}

pub async fn new_event(
    ctx: AuthContext,
    Json(descriptor): Json<ScheduleDescriptor>,
) -> Result<Json<ScheduleEvent>, Error> {
    ctx.require_admin()?;

    let event = super::INSTANCE.insert(descriptor, &ctx.user_id);
    info!("event created: {} ({} {})", event.title, event.date, event.time);
    Ok(Json(event))
}

pub async fn edit_event(
    ctx: AuthContext,
    Path(id): Path<i32>,
    Json(descriptor): Json<EditScheduleDescriptor>,
) -> Result<Json<ScheduleEvent>, Error> {
    ctx.require_admin()?;

    let event = super::INSTANCE.edit(id, descriptor)?;
    info!("event {} updated", event.id);
    Ok(Json(event))
}

pub async fn remove_event(
    ctx: AuthContext,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, Error> {
    ctx.require_admin()?;

    super::INSTANCE.remove(id)?;
    info!("event {} removed", id);
    Ok(Json(json!({ "message": "event removed" })))
}
