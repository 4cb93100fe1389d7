use axum::extract::Path;
use axum::Json;
use serde_json::json;
use tracing::info;

pub use vis_portal_shared::highlight::handle::*;

use super::Highlight;
use crate::account::AuthContext;
use crate::Error;

/// Readable by every authenticated caller, whatever the role.
pub async fn list_highlights(_ctx: AuthContext) -> Json<Vec<Highlight>> {
    Json(super::INSTANCE.all())
}

pub async fn new_highlight(
    ctx: AuthContext,
    Json(descriptor): Json<HighlightDescriptor>,
) -> Result<Json<Highlight>, Error> {
    ctx.require_admin()?;

    let highlight = super::INSTANCE.insert(descriptor, &ctx.user_id);
    info!("highlight created: {} ({})", highlight.title, highlight.date);
    Ok(Json(highlight))
}

pub async fn edit_highlight(
    ctx: AuthContext,
    Path(id): Path<i32>,
    Json(descriptor): Json<EditHighlightDescriptor>,
) -> Result<Json<Highlight>, Error> {
    ctx.require_admin()?;

    let highlight = super::INSTANCE.edit(id, descriptor)?;
    info!("highlight {} updated", highlight.id);
    Ok(Json(highlight))
}

pub async fn remove_highlight(
    ctx: AuthContext,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, Error> {
    ctx.require_admin()?;

    super::INSTANCE.remove(id)?;
    info!("highlight {} removed", id);
    Ok(Json(json!({ "message": "highlight removed" })))
}
