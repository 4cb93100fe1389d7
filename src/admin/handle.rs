use axum::extract::Path;
use axum::Json;
use serde_json::json;
use tracing::info;

use vis_portal_shared::admin::handle::MakeAdminDescriptor;

use super::{Admin, AdminRole};
use crate::account::AuthContext;
use crate::Error;

pub async fn list_admins(ctx: AuthContext) -> Result<Json<Vec<Admin>>, Error> {
    ctx.require_admin()?;
    Ok(Json(super::INSTANCE.all()))
}

pub async fn make_admin(
    ctx: AuthContext,
    Json(descriptor): Json<MakeAdminDescriptor>,
) -> Result<Json<Admin>, Error> {
    ctx.require_admin()?;

    let admin = super::INSTANCE.insert(
        descriptor.user_id,
        descriptor.name,
        descriptor.email,
        descriptor.role.unwrap_or(AdminRole::Admin),
    )?;

    info!("admin created: {} ({})", admin.name, admin.email);

    Ok(Json(admin))
}

pub async fn remove_admin(
    ctx: AuthContext,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, Error> {
    ctx.require_admin()?;

    super::INSTANCE.remove(id)?;
    info!("admin {} removed", id);
    Ok(Json(json!({ "message": "admin removed" })))
}
